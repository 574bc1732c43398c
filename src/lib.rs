/// 発生し得るすべてのエラーを`enum` 型として定義・集約。
mod error;

/// 地理空間座標と大円距離の計算。
mod geometry;

pub use error::Error;
pub use geometry::{
    constants::{EARTH_RADIUS_KM, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE},
    coordinate::Coordinate,
};
