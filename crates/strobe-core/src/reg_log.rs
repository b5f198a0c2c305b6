// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Per-register conflict-detection log with transactional rollback.
//!
//! One [`RegLog`] is exclusively owned by one simulated register for the
//! register's entire lifetime. It persists across cycles, carrying the
//! committed value (`data0`) forward; the hazard flags are scoped to a
//! single cycle and cleared by [`RegLog::commit`] (or a rollback).
//!
//! Two access slots exist per cycle: slot 0 sees/establishes the pre-cycle
//! value, slot 1 sees/establishes a value already updated this cycle by a
//! higher-priority rule. Every access takes `prior`, the combined hazard
//! set of all same-register accesses already attempted this cycle by rules
//! of other priorities (see [`RwSet`]).
//!
//! # Legality vs. mutation
//!
//! Every access applies its value mutation *regardless* of the legality
//! result it returns. A rule whose access comes back not-ok has therefore
//! already dirtied the log; discarding the damage is the caller's job.
//!
//! # Caller discipline (batch atomicity)
//!
//! A rule's entire batch of register operations, across *all* registers it
//! touches, is atomic. Before running a rule, checkpoint every log it may
//! touch; if any single operation anywhere in the batch returns not-ok (or
//! the rule's guard fails), [`RegLog::reset`] every touched log to its
//! checkpoint. None of the rule's writes may survive to commit. Partial
//! application of a failed rule is never observable externally.
//!
//! Logs of different registers share no state and may be driven from
//! different threads without coordination; the log itself contains no
//! synchronization.

use crate::hazard::RwSet;

/// Saved log state for rollback: the two buffered values of one register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegCheckpoint<T> {
    data0: T,
    data1: T,
}

/// Conflict-detection log for a single register.
///
/// `T` is the register's value type, typically a [`crate::Bits`]
/// instantiation, but any `Copy` value works (the log never inspects it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegLog<T> {
    rwset: RwSet,
    data0: T,
    data1: T,
}

impl<T: Copy> RegLog<T> {
    /// Creates the log for a register whose pre-simulation value is `init`.
    ///
    /// Called once at register initialization; the log then lives exactly as
    /// long as the register.
    pub fn new(init: T) -> Self {
        Self {
            rwset: RwSet::EMPTY,
            data0: init,
            data1: init,
        }
    }

    /// Slot-0 read: stores the externally supplied `value` into `target` and
    /// reports whether a slot-0 read is still legal this cycle.
    ///
    /// The caller, not the log, supplies the pre-cycle value; `data0` is
    /// **not** read here, and no hazard flag is set. This asymmetry with
    /// [`RegLog::read1`] encodes how the surrounding scheduler distributes
    /// pre-cycle values and is part of the contract; do not "fix" it.
    ///
    /// `target` is written regardless of the result.
    #[must_use = "a not-ok access requires rolling back every log the rule touched"]
    pub fn read0(&self, target: &mut T, value: T, prior: RwSet) -> bool {
        let ok = self.rwset.may_read0(prior);
        *target = value;
        ok
    }

    /// Slot-1 read: copies `data0` into `target`, records the read, and
    /// reports legality.
    ///
    /// `target` is written and the `r1` flag is set regardless of the
    /// result.
    #[must_use = "a not-ok access requires rolling back every log the rule touched"]
    pub fn read1(&mut self, target: &mut T, prior: RwSet) -> bool {
        let ok = self.rwset.may_read1(prior);
        *target = self.data0;
        self.rwset.r1 = true;
        ok
    }

    /// Slot-0 write: stores `value` directly into `data0` and reports
    /// legality (a slot-0 write must be the register's very first access
    /// this cycle).
    ///
    /// `data0` is overwritten and the `w0` flag is set regardless of the
    /// result.
    #[must_use = "a not-ok access requires rolling back every log the rule touched"]
    pub fn write0(&mut self, value: T, prior: RwSet) -> bool {
        let ok = self.rwset.may_write0(prior);
        self.data0 = value;
        self.rwset.w0 = true;
        ok
    }

    /// Slot-1 write: stores `value` into the staged `data1` (visible only
    /// after commit) and reports legality.
    ///
    /// `data1` is overwritten and the `w1` flag is set regardless of the
    /// result.
    #[must_use = "a not-ok access requires rolling back every log the rule touched"]
    pub fn write1(&mut self, value: T, prior: RwSet) -> bool {
        let ok = self.rwset.may_write1(prior);
        self.data1 = value;
        self.rwset.w1 = true;
        ok
    }

    /// Ends the cycle for this register: promotes the staged value when a
    /// slot-1 write occurred, clears every hazard flag, and returns the
    /// register's final value.
    ///
    /// Invoked once per register per cycle, after all rules have attempted
    /// their accesses (and failed rules have been rolled back).
    pub fn commit(&mut self) -> T {
        if self.rwset.w1 {
            self.data0 = self.data1;
        }
        self.rwset.clear();
        self.data0
    }

    /// Captures the buffered values for a later [`RegLog::reset`].
    ///
    /// Taken before a rule's first access to this register.
    #[must_use]
    pub fn checkpoint(&self) -> RegCheckpoint<T> {
        RegCheckpoint {
            data0: self.data0,
            data1: self.data1,
        }
    }

    /// Rolls the log back to `checkpoint`: clears every hazard flag and
    /// restores both buffered values exactly.
    ///
    /// Used to discard the effects of a rule whose guard failed or whose
    /// later access returned not-ok.
    pub fn reset(&mut self, checkpoint: RegCheckpoint<T>) {
        self.rwset.clear();
        self.data0 = checkpoint.data0;
        self.data1 = checkpoint.data1;
    }

    /// The hazard flags accumulated so far this cycle.
    ///
    /// Callers fold these into the `prior` sets they thread into other
    /// rules' accesses.
    #[must_use]
    pub fn rwset(&self) -> RwSet {
        self.rwset
    }

    /// The committed / pre-cycle value (also the target of slot-0 writes).
    #[must_use]
    pub fn data0(&self) -> T {
        self.data0
    }

    /// The staged slot-1 value; meaningful only once `w1` is set.
    #[must_use]
    pub fn data1(&self) -> T {
        self.data1
    }
}

impl<T: Copy + Default> Default for RegLog<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
