/// 地球を球で近似したときの平均半径（km）
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// 緯度の最小値（南極）
pub const MIN_LATITUDE: f64 = -90.0;

/// 緯度の最大値（北極）
pub const MAX_LATITUDE: f64 = 90.0;

/// 経度の最小値
pub const MIN_LONGITUDE: f64 = -180.0;

/// 経度の最大値
pub const MAX_LONGITUDE: f64 = 180.0;
