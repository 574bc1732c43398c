//! 地理空間座標を扱うための型やロジック。
//!
//! 本モジュールでは、距離をキロメートル（km）単位で扱います。

/// 地理空間座標の計算で使用される各種の代表的な定数。
pub mod constants;

/// 緯度・経度で定義される `Coordinate` 型。
pub mod coordinate;
