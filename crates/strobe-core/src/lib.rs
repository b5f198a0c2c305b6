// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! strobe-core: cycle-accurate runtime primitives for compiled rule-based
//! hardware simulation.
//!
//! Code generated from a rule-based hardware description calls into this
//! crate for two things:
//!
//! 1. **Width-tagged bit-vector arithmetic**: [`Bits`] values carry a
//!    compile-time width and never exceed `2^w - 1`; the [`prims`] module
//!    provides the pure operations (select, shift, concat, wrapping add, …).
//!    Widths above 64 bits require the `wide` capability (`crypto-bigint`
//!    buckets up to 1024 bits) and fail the build, never the run, when it is
//!    absent.
//! 2. **Per-register conflict detection**: a [`RegLog`] per register
//!    buffers the cycle's accesses, reports each access's legality against
//!    the accumulated [`RwSet`] hazards, and commits or rolls back, so the
//!    scheduler can run many rules per cycle while preserving
//!    one-rule-at-a-time semantics.
//!
//! Scheduling policy, I/O, and struct (de)serialization live in the
//! generated code and its driver, not here.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self,
    clippy::cast_possible_truncation,
    clippy::cast_lossless
)]

mod bits;
pub mod bounds;
mod hazard;
/// Pure bit-vector primitives over width-tagged values.
pub mod prims;
mod reg_log;
/// Best-effort JSONL telemetry for the driving scheduler.
#[cfg(feature = "telemetry")]
pub mod telemetry;
#[cfg(feature = "wide")]
mod wide;
mod width;

// Re-exports for the stable public API.
/// Width-tagged value type and its boundary error.
pub use bits::{Bits, ValueError};
/// Debug-only bound enforcement surface.
pub use bounds::{bounds_checks_enabled, BoundsViolation};
/// Per-register hazard flags.
pub use hazard::RwSet;
/// Per-register conflict log and its rollback snapshot.
pub use reg_log::{RegCheckpoint, RegLog};
/// Backing-kind abstraction for width-tagged values.
pub use width::{Cast, Repr, Unit};

/// Wide bucket kinds, re-exported for generated code.
#[cfg(feature = "wide")]
pub use crypto_bigint::{U1024, U128, U256, U512};
