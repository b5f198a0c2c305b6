// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

// Telemetry helpers for JSONL logging when the `telemetry` feature is enabled.
// Manually formats JSON to avoid a serde_json dependency.

use std::io::Write as _;

fn ts_micros() -> u128 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_micros()
}

/// Emits a conflict telemetry event when a register access came back not-ok.
///
/// Logs the cycle, register name, and operation as a JSON line to stdout.
/// Best-effort: I/O errors are ignored and timestamps fall back to 0 on
/// clock errors. The driving scheduler calls this; the core never does.
pub fn conflict(cycle: u64, register: &str, op: &str) {
    let ts = ts_micros();
    let mut out = std::io::stdout().lock();
    let _ = write!(
        out,
        r#"{{"timestamp_micros":{ts},"cycle":{cycle},"event":"conflict","register":"{register}","op":"{op}"}}"#
    );
    let _ = out.write_all(b"\n");
}

/// Emits a commit telemetry event when a register's cycle value is final.
///
/// Logs the cycle and register name as a JSON line to stdout. Best-effort:
/// I/O errors are ignored and timestamps fall back to 0 on clock errors.
pub fn commit(cycle: u64, register: &str) {
    let ts = ts_micros();
    let mut out = std::io::stdout().lock();
    let _ = write!(
        out,
        r#"{{"timestamp_micros":{ts},"cycle":{cycle},"event":"commit","register":"{register}"}}"#
    );
    let _ = out.write_all(b"\n");
}
