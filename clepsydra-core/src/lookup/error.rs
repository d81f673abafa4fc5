//! Table construction errors

/// Errors that can occur when building or loading a lookup table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TableError {
    /// Fewer than two points in a distribution
    TooShort,
    /// A distribution point is smaller than its predecessor
    NotMonotonic,
    /// Declared or paired lengths do not match the data
    LengthMismatch,
    /// Adjacent points are too far apart for 32-bit interpolation
    SpanOverflow,
    /// Table does not fit the fixed storage capacity
    Capacity,
    /// Output buffer too small for the encoded image
    BufferTooSmall,
    /// Serialized image is malformed
    Encoding,
    /// Serialized image failed its CRC check
    Checksum,
}

impl core::fmt::Display for TableError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            TableError::TooShort => "distribution needs at least two points",
            TableError::NotMonotonic => "distribution points decrease",
            TableError::LengthMismatch => "table lengths do not match",
            TableError::SpanOverflow => "neighbouring points too far apart",
            TableError::Capacity => "table exceeds storage capacity",
            TableError::BufferTooSmall => "buffer too small for table image",
            TableError::Encoding => "malformed table image",
            TableError::Checksum => "table image checksum mismatch",
        };
        f.write_str(msg)
    }
}
