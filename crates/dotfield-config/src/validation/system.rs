//! Logging validation.

use crate::schema::DotfieldConfig;

use super::helpers::validate_range;

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &DotfieldConfig) {
    validate_range(
        errors,
        "logging.dedup_window_ms",
        config.logging.dedup_window_ms.min(u32::MAX as u64) as u32,
        0,
        60_000,
    );
    if config.logging.dedup_capacity == 0 {
        errors.push("logging.dedup_capacity = 0 must be > 0".into());
    }
}
