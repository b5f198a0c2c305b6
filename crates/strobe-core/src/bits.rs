// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Width-tagged unsigned values.
//!
//! A [`Bits<R, W>`] pairs a backing kind `R` with a compile-time width `W`
//! and maintains the invariant that the stored value never exceeds
//! `2^W - 1`. The width→kind mapping (narrowest native kind up to 64 bits,
//! then the wide buckets) is validated at build time: instantiating a
//! `Bits` with the wrong kind for its width, with a width above 1024, or
//! with a wide width while the `wide` capability is absent fails
//! compilation, never a run.

use core::fmt;
use core::ops::{Add, BitAnd, BitOr, Not};

use thiserror::Error;

use crate::width::Repr;

/// Error produced by fallible value construction at external boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The raw value has bits set at or above the tagged width.
    #[error("value does not fit in {width} bits")]
    OutOfRange {
        /// The width the value was checked against.
        width: u32,
    },
}

/// An unsigned value tagged with a compile-time bit width.
///
/// # Invariants
/// - The stored raw value is always strictly below `2^W` (for `W = 0` the
///   backing kind is [`crate::Unit`] and there is no value at all).
/// - `W` lies in the backing kind's bucket: `NARROWER_BITS < W <= KIND_BITS`.
///   Violations are compile-time errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bits<R: Repr, const W: u32>(R);

impl<R: Repr, const W: u32> Bits<R, W> {
    /// The tagged width in bits.
    pub const WIDTH: u32 = W;

    // Distance from the kind's capacity down to the tagged width. The
    // initializer doubles as the build-time width/kind validation: every
    // constructor evaluates it, so an invalid pair never compiles.
    const MASK_SHIFT: u32 = {
        assert!(W <= 1024, "bit widths above 1024 are not supported");
        if R::KIND_BITS == 0 {
            assert!(W == 0, "the unit kind carries only width 0");
            0
        } else {
            assert!(W != 0, "width-0 values use the unit kind");
            assert!(
                W > R::NARROWER_BITS,
                "width fits a narrower kind; use the narrowest kind that holds it"
            );
            assert!(W <= R::KIND_BITS, "width exceeds its backing kind");
            R::KIND_BITS - W
        }
    };

    /// The all-ones pattern of width `W` in kind `R`.
    fn low_mask() -> R {
        R::MAX.shr(Self::MASK_SHIFT)
    }

    /// Builds a value by masking `raw` down to `W` bits.
    #[inline]
    #[must_use]
    pub fn new(raw: R) -> Self {
        Self(raw & Self::low_mask())
    }

    /// Builds a value from a raw image already known to be in range.
    ///
    /// Callers uphold `raw < 2^W`; primitives whose arithmetic cannot
    /// overflow the width use this to skip the re-mask.
    #[inline]
    pub(crate) fn from_masked(raw: R) -> Self {
        debug_assert!(
            raw == raw & Self::low_mask(),
            "raw image exceeds the tagged width"
        );
        Self(raw)
    }

    /// Builds a value, rejecting raw images with bits at or above `W`.
    ///
    /// This is the boundary constructor for externally supplied data;
    /// generated simulation code uses the masking [`Bits::new`] instead.
    pub fn try_new(raw: R) -> Result<Self, ValueError> {
        if raw == raw & Self::low_mask() {
            Ok(Self(raw))
        } else {
            Err(ValueError::OutOfRange { width: W })
        }
    }

    /// Builds a value from the low `W` bits of a `u64`.
    #[inline]
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        Self::new(R::from_u64(value))
    }

    /// The zero value of this width.
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self::new(R::ZERO)
    }

    /// Returns the raw backing value.
    #[inline]
    #[must_use]
    pub fn raw(self) -> R {
        self.0
    }

    /// Returns `true` when every bit is clear.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == R::ZERO
    }
}

impl<R: Repr, const W: u32> Default for Bits<R, W> {
    fn default() -> Self {
        Self::zero()
    }
}

impl Bits<u8, 1> {
    /// Builds a 1-bit indicator from a boolean.
    #[inline]
    #[must_use]
    pub fn from_bool(value: bool) -> Self {
        Self::new(u8::from(value))
    }

    /// Interprets a 1-bit value as a boolean.
    #[inline]
    #[must_use]
    pub fn as_bool(self) -> bool {
        self.0 != 0
    }
}

impl<R: Repr, const W: u32> TryFrom<u64> for Bits<R, W> {
    type Error = ValueError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value.checked_shr(W).unwrap_or(0) != 0 {
            return Err(ValueError::OutOfRange { width: W });
        }
        Ok(Self::new(R::from_u64(value)))
    }
}

/// Stable textual contract for tooling: `"<w>'b<binary> (0x<hex>, <dec>)"`
/// for widths up to 64, `"<w>'x<hex>"` beyond.
impl<R: Repr, const W: u32> fmt::Display for Bits<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if W <= 64 {
            let val = self.0.low_u64();
            write!(f, "{W}'b")?;
            for pos in (0..W).rev() {
                let bit = (val >> pos) & 1;
                f.write_str(if bit == 1 { "1" } else { "0" })?;
            }
            write!(f, " (0x{val:x}, {val})")
        } else {
            let digits = hex::encode(self.0.be_bytes());
            let trimmed = digits.trim_start_matches('0');
            let hex_str = if trimmed.is_empty() { "0" } else { trimmed };
            write!(f, "{W}'x{hex_str}")
        }
    }
}

impl<R: Repr, const W: u32> BitAnd for Bits<R, W> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        crate::prims::land(self, rhs)
    }
}

impl<R: Repr, const W: u32> BitOr for Bits<R, W> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        crate::prims::lor(self, rhs)
    }
}

impl<R: Repr, const W: u32> Not for Bits<R, W> {
    type Output = Self;

    fn not(self) -> Self {
        crate::prims::lnot(self)
    }
}

/// Hardware adder semantics: addition modulo `2^W`.
impl<R: Repr, const W: u32> Add for Bits<R, W> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        crate::prims::plus(self, rhs)
    }
}

#[cfg(feature = "serde")]
impl<R: Repr + serde::Serialize, const W: u32> serde::Serialize for Bits<R, W> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, R: Repr + serde::Deserialize<'de>, const W: u32> serde::Deserialize<'de>
    for Bits<R, W>
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = R::deserialize(deserializer)?;
        Self::try_new(raw).map_err(serde::de::Error::custom)
    }
}
