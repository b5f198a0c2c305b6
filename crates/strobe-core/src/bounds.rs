// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Debug-only bound enforcement for index and shift arguments.
//!
//! Out-of-range selects and shifts are **programmer errors** (a code
//! generator emitted an access the width cannot satisfy), not recoverable
//! runtime conditions. When enforcement is active, a violation is reported
//! via [`std::panic::panic_any`] with a typed [`BoundsViolation`] payload
//! carrying the file, line, violated expression text, and a fixed message,
//! matchable via `downcast_ref` in tests.
//!
//! # Cfg Gating
//!
//! Checks are active when `debug_assertions` is set (debug builds) or when
//! the `bounds_enforce_release` feature is enabled. The `unchecked_bounds`
//! feature disables all enforcement regardless; the guarded shift semantics
//! of [`crate::Repr`] then resolve out-of-range accesses to zero bits.
//!
//! This is NOT a recoverable runtime error; fix the generated access.

use core::fmt;

/// Violation payload for [`std::panic::panic_any`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsViolation {
    /// Source file of the violated check.
    pub file: &'static str,
    /// Source line of the violated check.
    pub line: u32,
    /// Source text of the violated expression.
    pub expr: &'static str,
    /// Fixed message naming the primitive and the bound.
    pub message: &'static str,
}

impl fmt::Display for BoundsViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}\nFailed bound check: {}",
            self.file, self.line, self.message, self.expr
        )
    }
}

/// Returns `true` when bound checks are compiled in.
#[must_use]
pub const fn bounds_checks_enabled() -> bool {
    cfg!(all(
        any(debug_assertions, feature = "bounds_enforce_release"),
        not(feature = "unchecked_bounds")
    ))
}

/// Reports a bound violation when enforcement is active; no-op otherwise.
macro_rules! check_bounds {
    ($cond:expr, $msg:expr) => {
        if $crate::bounds::bounds_checks_enabled() && !$cond {
            ::std::panic::panic_any($crate::bounds::BoundsViolation {
                file: file!(),
                line: line!(),
                expr: stringify!($cond),
                message: $msg,
            });
        }
    };
}

pub(crate) use check_bounds;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_file_line_and_expression() {
        let v = BoundsViolation {
            file: "prims.rs",
            line: 42,
            expr: "idx < w",
            message: "sel: index out of range",
        };
        let text = v.to_string();
        assert!(text.contains("prims.rs:42"));
        assert!(text.contains("idx < w"));
        assert!(text.contains("sel: index out of range"));
    }
}
