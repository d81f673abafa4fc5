//! Calibration table storage
//!
//! Owned counterparts of [`Curve`] and [`Map`] for tables loaded at
//! runtime (flash, host download) instead of compiled in as constants.
//!
//! Image layout:
//!
//! ```text
//! ┌──────────────────────────────────────────┬───────┐
//! │ postcard(magic, version, kind, table)    │ CRC-8 │
//! └──────────────────────────────────────────┴───────┘
//! ```

use heapless::Vec;
#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

use crate::lookup::search::Distribution;
use crate::lookup::{Curve, Map, TableError};

/// Magic number identifying a calibration table image
pub const TABLE_MAGIC: u32 = 0x434C_5442; // "CLTB"

/// Current image format version
pub const TABLE_VERSION: u8 = 1;

/// A table that can be checked and persisted
pub trait CalibrationTable {
    /// Discriminant stored in the image header
    const KIND: u8;

    /// Re-run construction checks on the stored points
    fn validate(&self) -> Result<(), TableError>;
}

/// Owned `i16` curve with room for `N` points
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CurveTable<const N: usize> {
    x: Vec<i16, N>,
    y: Vec<i16, N>,
}

impl<const N: usize> CurveTable<N> {
    /// Validate and copy the points
    pub fn new(x: &[i16], y: &[i16]) -> Result<Self, TableError> {
        Curve::new(x, y)?;
        Ok(Self {
            x: Vec::from_slice(x).map_err(|_| TableError::Capacity)?,
            y: Vec::from_slice(y).map_err(|_| TableError::Capacity)?,
        })
    }

    /// Borrow as a curve
    pub fn curve(&self) -> Curve<'_, i16> {
        Curve::from_validated(Distribution::from_validated(self.x.as_slice()), &self.y)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

impl<const N: usize> CalibrationTable for CurveTable<N> {
    const KIND: u8 = 1;

    fn validate(&self) -> Result<(), TableError> {
        Curve::new(self.x.as_slice(), self.y.as_slice()).map(|_| ())
    }
}

/// Owned `i16` map with room for `NX` by `NY` grid points
///
/// `NZ` is the Z capacity and must be at least `NX * NY` for a full grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MapTable<const NX: usize, const NY: usize, const NZ: usize> {
    x: Vec<i16, NX>,
    y: Vec<i16, NY>,
    z: Vec<i16, NZ>,
}

impl<const NX: usize, const NY: usize, const NZ: usize> MapTable<NX, NY, NZ> {
    /// Validate and copy the axes and grid
    pub fn new(x: &[i16], y: &[i16], z: &[i16]) -> Result<Self, TableError> {
        Map::new(x, y, z)?;
        Ok(Self {
            x: Vec::from_slice(x).map_err(|_| TableError::Capacity)?,
            y: Vec::from_slice(y).map_err(|_| TableError::Capacity)?,
            z: Vec::from_slice(z).map_err(|_| TableError::Capacity)?,
        })
    }

    /// Borrow as a map
    pub fn map(&self) -> Map<'_> {
        Map::from_validated(
            Distribution::from_validated(self.x.as_slice()),
            Distribution::from_validated(self.y.as_slice()),
            &self.z,
        )
    }
}

impl<const NX: usize, const NY: usize, const NZ: usize> CalibrationTable
    for MapTable<NX, NY, NZ>
{
    const KIND: u8 = 2;

    fn validate(&self) -> Result<(), TableError> {
        Map::new(&self.x, &self.y, &self.z).map(|_| ())
    }
}

// Deserialization goes through the same checks as `new`, so a table
// obtained from any serde format is safe to borrow as a curve or map.

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename = "CurveTable")]
struct RawCurve<const N: usize> {
    x: Vec<i16, N>,
    y: Vec<i16, N>,
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> Deserialize<'de> for CurveTable<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RawCurve { x, y } = RawCurve::<N>::deserialize(deserializer)?;
        let table = Self { x, y };
        table.validate().map_err(serde::de::Error::custom)?;
        Ok(table)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename = "MapTable")]
struct RawMap<const NX: usize, const NY: usize, const NZ: usize> {
    x: Vec<i16, NX>,
    y: Vec<i16, NY>,
    z: Vec<i16, NZ>,
}

#[cfg(feature = "serde")]
impl<'de, const NX: usize, const NY: usize, const NZ: usize> Deserialize<'de>
    for MapTable<NX, NY, NZ>
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RawMap { x, y, z } = RawMap::<NX, NY, NZ>::deserialize(deserializer)?;
        let table = Self { x, y, z };
        table.validate().map_err(serde::de::Error::custom)?;
        Ok(table)
    }
}

/// Serialize `table` into `buf`, returning the image length
#[cfg(feature = "serde")]
pub fn encode<T>(table: &T, buf: &mut [u8]) -> Result<usize, TableError>
where
    T: CalibrationTable + Serialize,
{
    let body_len = postcard::to_slice(&(TABLE_MAGIC, TABLE_VERSION, T::KIND, table), buf)
        .map_err(|e| match e {
            postcard::Error::SerializeBufferFull => TableError::BufferTooSmall,
            _ => TableError::Encoding,
        })?
        .len();

    let crc = crate::checksum::crc8(&buf[..body_len]);
    let trailer = buf.get_mut(body_len).ok_or(TableError::BufferTooSmall)?;
    *trailer = crc;
    Ok(body_len + 1)
}

/// Check and deserialize an image produced by [`encode`]
#[cfg(feature = "serde")]
pub fn decode<T>(image: &[u8]) -> Result<T, TableError>
where
    T: CalibrationTable + DeserializeOwned,
{
    let (&crc, body) = image.split_last().ok_or(TableError::Encoding)?;
    if crate::checksum::crc8(body) != crc {
        return Err(TableError::Checksum);
    }

    let ((magic, version, kind, table), rest): ((u32, u8, u8, T), _) =
        postcard::take_from_bytes(body).map_err(|_| TableError::Encoding)?;
    if magic != TABLE_MAGIC || version != TABLE_VERSION || kind != T::KIND || !rest.is_empty() {
        return Err(TableError::Encoding);
    }
    Ok(table)
}
