// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![cfg(feature = "wide")]

//! Smoke tests for wide widths (the `wide` capability): the 128-bit bucket
//! behaves exactly like the native kinds, just bigger.

use strobe_core::{prims, Bits, RegLog, Repr, RwSet, U128, U256};

type W80 = Bits<U128, 80>;

#[test]
fn masking_holds_above_64_bits() {
    // 2^80 - 1 is the widest legal value; anything above masks away.
    let all_ones = W80::new(!<U128 as Repr>::ZERO);
    let expected = Repr::shr(!<U128 as Repr>::ZERO, 48);
    assert_eq!(all_ones.raw(), expected);
}

#[test]
fn concat_crosses_the_64_bit_boundary() {
    let hi = Bits::<u32, 20>::from_u64(0xfedcb);
    let lo = Bits::<u64, 64>::from_u64(0x0123_4567_89ab_cdef);
    let joined: Bits<U128, 84> = prims::concat(hi, lo);

    let back_lo: Bits<u64, 64> = prims::part(joined, Bits::<u8, 7>::from_u64(0));
    assert_eq!(back_lo.raw(), 0x0123_4567_89ab_cdef);
    let back_hi: Bits<u32, 20> = prims::part(joined, Bits::<u8, 7>::from_u64(64));
    assert_eq!(back_hi.raw(), 0xfedcb);
}

#[test]
fn plus_wraps_at_width_80() {
    let max = W80::new(!<U128 as Repr>::ZERO);
    let one = W80::from_u64(1);
    assert!(prims::plus(max, one).is_zero());
}

#[test]
fn zextl_into_a_bigger_bucket() {
    let v = W80::from_u64(0xdead_beef);
    let widened: Bits<U256, 200> = prims::zextl(v);
    assert_eq!(Repr::low_u64(widened.raw()), 0xdead_beef);
}

#[test]
fn display_uses_the_wide_hex_form() {
    let v = W80::from_u64(0x1234_abcd);
    assert_eq!(v.to_string(), "80'x1234abcd");
    assert_eq!(W80::zero().to_string(), "80'x0");
}

#[test]
fn the_log_is_width_agnostic() {
    let mut reg = RegLog::new(W80::zero());
    let staged = prims::lsl(W80::from_u64(0x77), Bits::<u8, 7>::from_u64(72));
    assert!(reg.write1(staged, RwSet::EMPTY));
    assert_eq!(reg.commit(), staged);

    let saved = reg.checkpoint();
    assert!(reg.write0(W80::from_u64(1), RwSet::EMPTY));
    reg.reset(saved);
    assert_eq!(reg.data0(), staged);
    assert_eq!(reg.rwset(), RwSet::EMPTY);
}
