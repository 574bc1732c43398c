use std::fmt;

#[cfg(any(test))]
use proptest::prelude::*;
#[cfg(any(test, feature = "random"))]
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    geometry::constants::{
        EARTH_RADIUS_KM, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE,
    },
};

/// 緯度・経度で表される地理座標。
///
/// 球面近似（平均半径 6371 km）の地球上の一点を表します。
/// 各フィールドはプライベートであり、[`Coordinate::new`] による生成時に
/// 緯度は `-90.0..=90.0`、経度は `-180.0..=180.0` に丸め込まれます。
/// 一度生成した値は変更できません。
///
/// デシリアライズも [`Coordinate::new`] を経由するため、範囲外の値は同様に丸め込まれます。
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

/// デシリアライズ直後の未検証の値
#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl From<RawCoordinate> for Coordinate {
    fn from(raw: RawCoordinate) -> Self {
        Coordinate::new(raw.latitude, raw.longitude)
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coordinate")
            .field("latitude", &self.latitude)
            .field("longitude", &self.longitude)
            .finish()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

impl Coordinate {
    /// 緯度・経度から [`Coordinate`] を生成する。
    ///
    /// 範囲外の値はエラーにせず、最も近い境界値に丸め込む。
    /// 球面上の折り返しは行わないため、緯度 `91.0` は `-89.0` ではなく `90.0` になる。
    ///
    /// # Examples
    /// ```
    /// # use kasane_coordinate::Coordinate;
    ///
    /// let c = Coordinate::new(91.0, -181.0);
    ///
    /// assert_eq!(c.as_latitude(), 90.0);
    /// assert_eq!(c.as_longitude(), -180.0);
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate {
            latitude: clamp_degree("latitude", latitude, MIN_LATITUDE, MAX_LATITUDE),
            longitude: clamp_degree("longitude", longitude, MIN_LONGITUDE, MAX_LONGITUDE),
        }
    }

    /// 範囲検証を行い、範囲外の値を丸め込まずに拒否する [`Coordinate`] の生成。
    ///
    /// # Examples
    /// ```
    /// # use kasane_coordinate::{Coordinate, Error};
    ///
    /// assert!(Coordinate::try_new(35.0, 139.0).is_ok());
    /// assert_eq!(
    ///     Coordinate::try_new(91.0, 0.0),
    ///     Err(Error::LatitudeOutOfRange { latitude: 91.0 })
    /// );
    /// ```
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Coordinate, Error> {
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(Error::LatitudeOutOfRange { latitude });
        }

        if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            return Err(Error::LongitudeOutOfRange { longitude });
        }

        Ok(Coordinate {
            latitude,
            longitude,
        })
    }

    /// 緯度（度）を返す。
    pub fn as_latitude(&self) -> f64 {
        self.latitude
    }

    /// 経度（度）を返す。
    pub fn as_longitude(&self) -> f64 {
        self.longitude
    }

    /// 他の [`Coordinate`] までの大円距離をキロメートル単位で返す。
    ///
    /// 球面余弦定理
    ///
    /// `d = R * acos(sin(lat1) * sin(lat2) + cos(lat1) * cos(lat2) * cos(lon2 - lon1))`
    ///
    /// を半径 `R = 6371 km` の球で評価する。
    /// 地球は完全な球ではないため近似値であり、主に長距離向け。
    ///
    /// # Examples
    /// ```
    /// # use kasane_coordinate::Coordinate;
    ///
    /// let berlin = Coordinate::new(52.5200, 13.4050);
    /// let paris = Coordinate::new(48.8566, 2.3522);
    ///
    /// assert!((berlin.distance_km(&paris) - 878.0).abs() < 5.0);
    /// ```
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lon1 = self.longitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let lon2 = other.longitude.to_radians();

        let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * (lon2 - lon1).cos();

        // 丸め誤差で [-1, 1] をわずかに超えると acos が NaN になる
        EARTH_RADIUS_KM * cos_angle.clamp(-1.0, 1.0).acos()
    }

    /// 全範囲からランダムに [`Coordinate`] を生成します。
    #[cfg(any(test, feature = "random"))]
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Self::random_using(&mut rng)
    }

    /// 外部の乱数生成器を使用してランダムな [`Coordinate`] を生成します。
    #[cfg(any(test, feature = "random"))]
    pub fn random_using<R: Rng>(rng: &mut R) -> Self {
        let latitude = rng.random_range(MIN_LATITUDE..=MAX_LATITUDE);
        let longitude = rng.random_range(MIN_LONGITUDE..=MAX_LONGITUDE);
        Coordinate {
            latitude,
            longitude,
        }
    }

    #[cfg(any(test))]
    pub fn arb() -> impl Strategy<Value = Self> {
        (MIN_LATITUDE..=MAX_LATITUDE, MIN_LONGITUDE..=MAX_LONGITUDE)
            .prop_map(|(latitude, longitude)| Coordinate::new(latitude, longitude))
    }
}

fn clamp_degree(axis: &'static str, value: f64, min: f64, max: f64) -> f64 {
    let clamped = value.clamp(min, max);
    if clamped != value {
        tracing::trace!(axis, value, clamped, "coordinate value clamped to valid range");
    }
    clamped
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = Error;
    /// `(緯度, 経度)` のタプルからの検証付き変換。
    fn try_from((latitude, longitude): (f64, f64)) -> Result<Self, Self::Error> {
        Coordinate::try_new(latitude, longitude)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(value: Coordinate) -> Self {
        (value.latitude, value.longitude)
    }
}
