// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Per-register hazard sets and their legality predicates.
//!
//! An [`RwSet`] records which access kinds have already touched one register
//! during the current cycle. Each legality predicate combines the log's own
//! set with `prior`: the union of the sets contributed by every
//! same-register access already attempted this cycle by rules of *other*
//! priorities. The caller computes and threads that union; nothing global is
//! stored here.
//!
//! The predicates realize a dynamic generalization of a static read/write
//! conflict matrix: legality is evaluated from accumulated state, so the
//! multi-rule, multi-access-per-rule case needs no special-casing.

use core::ops::BitOr;

/// Hazard flags accumulated on one register during one cycle.
///
/// Note the deliberate asymmetry in [`RwSet::may_read0`]: a rule's *own*
/// slot-0 write does not invalidate its own slot-0 read, so `w0` is only
/// consulted on the prior set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RwSet {
    /// A read-after-write access has occurred.
    pub r1: bool,
    /// A write-before access has occurred.
    pub w0: bool,
    /// A staged write-after access has occurred.
    pub w1: bool,
}

impl RwSet {
    /// The empty hazard set (start of cycle, or no prior accesses).
    pub const EMPTY: Self = Self {
        r1: false,
        w0: false,
        w1: false,
    };

    /// A slot-0 read must observe the true pre-cycle value, which goes stale
    /// the instant any write happens, from any priority.
    #[must_use]
    pub fn may_read0(self, prior: Self) -> bool {
        !(self.w1 || prior.w1 || prior.w0)
    }

    /// A slot-1 read observes the slot-0 value; only a prior staged write
    /// makes that unsound.
    #[must_use]
    pub fn may_read1(self, prior: Self) -> bool {
        !prior.w1
    }

    /// A slot-0 write must be the very first access to the register this
    /// cycle, from any priority.
    #[must_use]
    pub fn may_write0(self, prior: Self) -> bool {
        !(self.r1 || self.w0 || self.w1 || prior.r1 || prior.w0 || prior.w1)
    }

    /// A staged write is sound unless another staged write already exists.
    #[must_use]
    pub fn may_write1(self, prior: Self) -> bool {
        !(self.w1 || prior.w1)
    }

    /// Clears every flag (end of cycle, or rollback).
    pub fn clear(&mut self) {
        *self = Self::EMPTY;
    }

    /// Flag-wise union; used by callers to combine the sets of several
    /// already-run rules into one prior set.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            r1: self.r1 || other.r1,
            w0: self.w0 || other.w0,
            w1: self.w1 || other.w1,
        }
    }
}

impl BitOr for RwSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn set(r1: bool, w0: bool, w1: bool) -> RwSet {
        RwSet { r1, w0, w1 }
    }

    #[test]
    fn read0_goes_stale_after_any_write() {
        assert!(RwSet::EMPTY.may_read0(RwSet::EMPTY));
        assert!(!RwSet::EMPTY.may_read0(set(false, true, false)));
        assert!(!RwSet::EMPTY.may_read0(set(false, false, true)));
        assert!(!set(false, false, true).may_read0(RwSet::EMPTY));
    }

    #[test]
    fn read0_ignores_own_slot0_write() {
        // The asymmetry: a rule may read0 after its own write0.
        assert!(set(false, true, false).may_read0(RwSet::EMPTY));
    }

    #[test]
    fn read1_only_conflicts_with_prior_staged_writes() {
        assert!(set(true, true, true).may_read1(set(true, true, false)));
        assert!(!RwSet::EMPTY.may_read1(set(false, false, true)));
    }

    #[test]
    fn write0_requires_a_completely_untouched_register() {
        assert!(RwSet::EMPTY.may_write0(RwSet::EMPTY));
        for (own, prior) in [
            (set(true, false, false), RwSet::EMPTY),
            (set(false, true, false), RwSet::EMPTY),
            (set(false, false, true), RwSet::EMPTY),
            (RwSet::EMPTY, set(true, false, false)),
            (RwSet::EMPTY, set(false, true, false)),
            (RwSet::EMPTY, set(false, false, true)),
        ] {
            assert!(!own.may_write0(prior), "write0 must see no hazards at all");
        }
    }

    #[test]
    fn write1_tolerates_reads_and_slot0_writes() {
        assert!(set(true, true, false).may_write1(set(true, true, false)));
        assert!(!set(false, false, true).may_write1(RwSet::EMPTY));
        assert!(!RwSet::EMPTY.may_write1(set(false, false, true)));
    }

    #[test]
    fn union_is_flag_wise() {
        let combined = set(true, false, false) | set(false, true, false);
        assert_eq!(combined, set(true, true, false));
        assert_eq!(combined | RwSet::EMPTY, combined);
    }
}
