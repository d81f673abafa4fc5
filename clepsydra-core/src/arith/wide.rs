//! Sign/magnitude intermediate shared by every saturating operation
//!
//! Operands of any supported width and signedness are split into a sign
//! flag and an unsigned magnitude. Division and multiplication then work on
//! magnitudes only, so mixing `u32` values above `i32::MAX` with negative
//! `i32` values never needs a signed intermediate that could overflow.

/// Exact signed value held as sign flag plus 64-bit magnitude
///
/// Zero is always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Wide {
    negative: bool,
    magnitude: u64,
}

impl Wide {
    /// Zero
    pub const ZERO: Self = Self {
        negative: false,
        magnitude: 0,
    };

    /// Build from sign and magnitude, normalizing negative zero
    #[inline]
    pub const fn new(negative: bool, magnitude: u64) -> Self {
        Self {
            negative: negative && magnitude != 0,
            magnitude,
        }
    }

    /// Build from a signed 64-bit value
    #[inline]
    pub const fn from_i64(value: i64) -> Self {
        Self::new(value < 0, value.unsigned_abs())
    }

    /// Build from an unsigned 64-bit value
    #[inline]
    pub const fn from_u64(value: u64) -> Self {
        Self::new(false, value)
    }

    /// True if the value is below zero
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.negative
    }

    /// Absolute value
    #[inline]
    pub const fn magnitude(self) -> u64 {
        self.magnitude
    }
}

/// Integer types accepted as kernel operands (16 and 32 bits wide)
///
/// Every operand's magnitude fits in `u32`, which keeps the kernel's
/// divisions at native 32-bit width.
pub trait Operand: Copy {
    /// True if the value is below zero
    fn is_negative(self) -> bool;

    /// Absolute value (`i32::MIN` maps to `2^31`)
    fn magnitude(self) -> u32;

    /// Exact sign/magnitude view
    #[inline]
    fn to_wide(self) -> Wide {
        Wide::new(self.is_negative(), u64::from(self.magnitude()))
    }
}

macro_rules! impl_operand_unsigned {
    ($($t:ty),*) => {$(
        impl Operand for $t {
            #[inline]
            fn is_negative(self) -> bool {
                false
            }

            #[inline]
            fn magnitude(self) -> u32 {
                u32::from(self)
            }
        }
    )*};
}

macro_rules! impl_operand_signed {
    ($($t:ty),*) => {$(
        impl Operand for $t {
            #[inline]
            fn is_negative(self) -> bool {
                self < 0
            }

            #[inline]
            fn magnitude(self) -> u32 {
                u32::from(self.unsigned_abs())
            }
        }
    )*};
}

impl_operand_unsigned!(u16, u32);
impl_operand_signed!(i16, i32);

/// Integer types a kernel result can be clamped into
pub trait Saturate: Copy {
    /// Smallest representable value
    const LOWER: Self;
    /// Largest representable value
    const UPPER: Self;
    /// Whether the type can hold negative values
    const SIGNED: bool;

    /// Clamp an exact value into this type's range
    fn saturate(value: Wide) -> Self;
}

macro_rules! impl_saturate_unsigned {
    ($($t:ty),*) => {$(
        impl Saturate for $t {
            const LOWER: Self = <$t>::MIN;
            const UPPER: Self = <$t>::MAX;
            const SIGNED: bool = false;

            #[inline]
            fn saturate(value: Wide) -> Self {
                if value.is_negative() {
                    return Self::LOWER;
                }
                <$t>::try_from(value.magnitude()).unwrap_or(Self::UPPER)
            }
        }
    )*};
}

macro_rules! impl_saturate_signed {
    ($($t:ty),*) => {$(
        impl Saturate for $t {
            const LOWER: Self = <$t>::MIN;
            const UPPER: Self = <$t>::MAX;
            const SIGNED: bool = true;

            #[inline]
            fn saturate(value: Wide) -> Self {
                let magnitude = value.magnitude();
                if value.is_negative() {
                    // |MIN| is one more than MAX
                    if magnitude > <$t>::MAX as u64 {
                        Self::LOWER
                    } else {
                        -(magnitude as $t)
                    }
                } else {
                    <$t>::try_from(magnitude).unwrap_or(Self::UPPER)
                }
            }
        }
    )*};
}

impl_saturate_unsigned!(u16, u32, u64);
impl_saturate_signed!(i16, i32, i64);
