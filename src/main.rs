use kasane_coordinate::Coordinate;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let berlin = Coordinate::new(52.5200, 13.4050);
    let paris = Coordinate::new(48.8566, 2.3522);

    // 範囲外の値は境界に丸め込まれる（RUST_LOG=trace で確認できる）
    let clamped = Coordinate::new(91.0, -181.0);

    let origin = Coordinate::new(0.0, 0.0);
    let antipode = Coordinate::new(0.0, 180.0);

    tracing::info!(%berlin, %paris, km = berlin.distance_km(&paris), "Berlin - Paris");
    tracing::info!(%clamped, "clamped input (91, -181)");
    tracing::info!(%origin, %antipode, km = origin.distance_km(&antipode), "antipodal points");
}
