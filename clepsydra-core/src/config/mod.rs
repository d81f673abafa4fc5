//! Configuration data
//!
//! Calibration tables owned in fixed-capacity storage and persisted as
//! postcard binary images.

pub mod table;

pub use table::{CalibrationTable, CurveTable, MapTable, TABLE_MAGIC, TABLE_VERSION};

#[cfg(feature = "serde")]
pub use table::{decode, encode};
