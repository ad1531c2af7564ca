//! Full configuration validation.
//!
//! Validates numeric ranges and color formats. Each domain has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod field;
mod hand;
mod helpers;
mod system;


use crate::schema::DotfieldConfig;
use dotfield_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DotfieldConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    field::validate_grid(&mut errors, config);
    field::validate_force(&mut errors, config);
    field::validate_glow(&mut errors, config);
    field::validate_background(&mut errors, config);
    field::validate_animation(&mut errors, config);
    hand::validate_hand(&mut errors, config);
    system::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
