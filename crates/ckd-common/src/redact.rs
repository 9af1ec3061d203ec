//! Redaction of patient values in log output.
//!
//! Submitted measurements count as PHI. They may only appear in logs when
//! row-level logging was switched on at startup (`--log-data`).

use std::sync::atomic::{AtomicBool, Ordering};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder used when row-level logging is disabled.
pub const REDACTED_VALUE: &str = "[REDACTED]";

pub fn set_log_data(enabled: bool) {
    LOG_DATA_ENABLED.store(enabled, Ordering::Release);
}

/// Returns true if row-level logging is explicitly enabled.
pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Acquire)
}

/// Returns the input value when PHI logging is enabled, otherwise a redacted token.
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redaction_follows_switch() {
        set_log_data(false);
        assert_eq!(redact_value("sc=25"), REDACTED_VALUE);
        set_log_data(true);
        assert_eq!(redact_value("sc=25"), "sc=25");
        set_log_data(false);
    }
}
