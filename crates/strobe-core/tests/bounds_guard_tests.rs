// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::expect_used)]
#![cfg(all(debug_assertions, not(feature = "unchecked_bounds")))]

//! Bound violations are programmer errors: under debug enforcement they
//! panic with a typed payload naming the file, line, and violated
//! expression, matchable via `downcast_ref`.

use std::panic::{catch_unwind, AssertUnwindSafe};

use strobe_core::{bounds_checks_enabled, prims, Bits, BoundsViolation};

#[test]
fn enforcement_is_compiled_in_for_this_configuration() {
    assert!(bounds_checks_enabled());
}

#[test]
fn sel_with_an_index_at_the_width_panics_with_a_typed_payload() {
    let data = Bits::<u8, 4>::from_u64(0b1011);
    let idx = Bits::<u8, 3>::from_u64(4);
    let err = catch_unwind(AssertUnwindSafe(|| prims::sel(data, idx)))
        .expect_err("an out-of-range select must panic under debug enforcement");
    let violation = err
        .downcast_ref::<BoundsViolation>()
        .expect("the panic payload is a BoundsViolation");
    assert_eq!(violation.message, "sel: index out of range");
    assert!(violation.expr.contains("idx"));
    assert!(violation.file.ends_with("prims.rs"));
    assert!(violation.line > 0);
}

#[test]
fn part_checks_the_field_start_index() {
    let data = Bits::<u16, 12>::from_u64(0xabc);
    let idx = Bits::<u8, 4>::from_u64(12);
    let err = catch_unwind(AssertUnwindSafe(|| {
        prims::part::<u8, 2, u16, 12, u8, 4>(data, idx)
    }))
    .expect_err("an out-of-range field start must panic under debug enforcement");
    let violation = err
        .downcast_ref::<BoundsViolation>()
        .expect("the panic payload is a BoundsViolation");
    assert_eq!(violation.message, "part: index out of range");
}

#[test]
fn shifts_allow_the_full_width_but_not_beyond() {
    let data = Bits::<u8, 4>::from_u64(0b1011);

    // shift == width is legal and drains every bit.
    assert_eq!(prims::lsr(data, Bits::<u8, 3>::from_u64(4)).raw(), 0);

    let err = catch_unwind(AssertUnwindSafe(|| {
        prims::lsl(data, Bits::<u8, 3>::from_u64(5))
    }))
    .expect_err("a shift beyond the width must panic under debug enforcement");
    let violation = err
        .downcast_ref::<BoundsViolation>()
        .expect("the panic payload is a BoundsViolation");
    assert_eq!(violation.message, "lsl: shift exceeds width");
}
