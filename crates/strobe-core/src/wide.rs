// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Wide backing kinds (`wide` feature): the externally supplied big-unsigned
//! capability for widths above 64 bits.
//!
//! The buckets are `crypto_bigint::{U128, U256, U512, U1024}`; a width `w`
//! with `64 < w <= 1024` belongs to the smallest bucket that holds it, and
//! widths above 1024 have no kind at all. Without this feature the bucket
//! types do not exist, so any wide width fails the build, never the run.
//!
//! All cross-kind conversions go through fixed-size big-endian byte images.
//! `crypto-bigint` limb layout varies with the target word size, so byte
//! encodings are the only platform-stable seam.

use crypto_bigint::{Encoding, U1024, U128, U256, U512};

use crate::width::{private::Sealed, Cast, Repr};

impl Sealed for U128 {}
impl Sealed for U256 {}
impl Sealed for U512 {}
impl Sealed for U1024 {}

macro_rules! impl_wide_repr {
    ($($ty:ty, $bits:literal, $narrower:literal, $nbytes:literal;)+) => {
        $(
            impl Repr for $ty {
                const KIND_BITS: u32 = $bits;
                const NARROWER_BITS: u32 = $narrower;
                const ZERO: Self = <$ty>::ZERO;
                const ONE: Self = <$ty>::ONE;
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn shl(self, shift: u32) -> Self {
                    if shift >= $bits {
                        <$ty>::ZERO
                    } else {
                        self.shl_vartime(shift as usize)
                    }
                }

                #[inline]
                fn shr(self, shift: u32) -> Self {
                    if shift >= $bits {
                        <$ty>::ZERO
                    } else {
                        self.shr_vartime(shift as usize)
                    }
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(&self, &rhs)
                }

                fn from_u64(value: u64) -> Self {
                    let mut bytes = [0u8; $nbytes];
                    bytes[$nbytes - 8..].copy_from_slice(&value.to_be_bytes());
                    <$ty>::from_be_bytes(bytes)
                }

                fn low_u64(self) -> u64 {
                    let bytes = self.to_be_bytes();
                    let mut tail = [0u8; 8];
                    tail.copy_from_slice(&bytes[$nbytes - 8..]);
                    u64::from_be_bytes(tail)
                }

                fn be_bytes(self) -> Vec<u8> {
                    self.to_be_bytes().to_vec()
                }
            }
        )+
    };
}

impl_wide_repr! {
    U128, 128, 64, 16;
    U256, 256, 128, 32;
    U512, 512, 256, 64;
    U1024, 1024, 512, 128;
}

// Widening wide→wide: zero high bytes, copy the source into the tail.
macro_rules! impl_widening_cast {
    ($from:ty, $fbytes:literal => $($to:ty, $tbytes:literal);+) => {
        $(
            impl Cast<$to> for $from {
                #[inline]
                fn cast(self) -> $to {
                    let src = self.to_be_bytes();
                    let mut dst = [0u8; $tbytes];
                    dst[$tbytes - $fbytes..].copy_from_slice(&src);
                    <$to>::from_be_bytes(dst)
                }
            }
        )+
    };
}

// Narrowing wide→wide: keep the low bytes.
macro_rules! impl_narrowing_cast {
    ($from:ty, $fbytes:literal => $($to:ty, $tbytes:literal);+) => {
        $(
            impl Cast<$to> for $from {
                #[inline]
                fn cast(self) -> $to {
                    let src = self.to_be_bytes();
                    let mut dst = [0u8; $tbytes];
                    dst.copy_from_slice(&src[$fbytes - $tbytes..]);
                    <$to>::from_be_bytes(dst)
                }
            }
        )+
    };
}

impl_widening_cast!(U128, 16 => U256, 32; U512, 64; U1024, 128);
impl_widening_cast!(U256, 32 => U512, 64; U1024, 128);
impl_widening_cast!(U512, 64 => U1024, 128);

impl_narrowing_cast!(U1024, 128 => U512, 64; U256, 32; U128, 16);
impl_narrowing_cast!(U512, 64 => U256, 32; U128, 16);
impl_narrowing_cast!(U256, 32 => U128, 16);

// Native→wide: every native value fits in 64 bits.
macro_rules! impl_native_to_wide {
    ($($to:ty),+) => {
        $(
            impl Cast<$to> for u8 {
                #[inline]
                fn cast(self) -> $to {
                    <$to as Repr>::from_u64(u64::from(self))
                }
            }

            impl Cast<$to> for u16 {
                #[inline]
                fn cast(self) -> $to {
                    <$to as Repr>::from_u64(u64::from(self))
                }
            }

            impl Cast<$to> for u32 {
                #[inline]
                fn cast(self) -> $to {
                    <$to as Repr>::from_u64(u64::from(self))
                }
            }

            impl Cast<$to> for u64 {
                #[inline]
                fn cast(self) -> $to {
                    <$to as Repr>::from_u64(self)
                }
            }
        )+
    };
}

impl_native_to_wide!(U128, U256, U512, U1024);

// Wide→native: truncate to the low 64 bits, then narrow.
macro_rules! impl_wide_to_native {
    ($($from:ty),+) => {
        $(
            impl Cast<u8> for $from {
                #[inline]
                fn cast(self) -> u8 {
                    <$from as Repr>::low_u64(self) as u8
                }
            }

            impl Cast<u16> for $from {
                #[inline]
                fn cast(self) -> u16 {
                    <$from as Repr>::low_u64(self) as u16
                }
            }

            impl Cast<u32> for $from {
                #[inline]
                fn cast(self) -> u32 {
                    <$from as Repr>::low_u64(self) as u32
                }
            }

            impl Cast<u64> for $from {
                #[inline]
                fn cast(self) -> u64 {
                    <$from as Repr>::low_u64(self)
                }
            }
        )+
    };
}

impl_wide_to_native!(U128, U256, U512, U1024);
