//! Validation of the sections that make up a render session.

use dotfield_common::Color;

use crate::schema::DotfieldConfig;

use super::helpers::{validate_non_negative, validate_positive, validate_range, validate_range_f64};

/// Grid spacing, density, and dot radius.
pub(crate) fn validate_grid(errors: &mut Vec<String>, config: &DotfieldConfig) {
    validate_positive(errors, "grid.spacing", config.grid.spacing);
    validate_positive(errors, "grid.dot_size", config.grid.dot_size);
    if config.grid.density <= 0.0 || config.grid.density.is_nan() {
        errors.push(format!("grid.density = {} must be > 0", config.grid.density));
    } else {
        validate_range_f64(errors, "grid.density", config.grid.density, 0.0, 1.0);
    }
}

pub(crate) fn validate_force(errors: &mut Vec<String>, config: &DotfieldConfig) {
    validate_positive(errors, "force.max_distance", config.force.max_distance);
    validate_non_negative(errors, "force.strength", config.force.strength);
}

pub(crate) fn validate_glow(errors: &mut Vec<String>, config: &DotfieldConfig) {
    validate_non_negative(errors, "glow.intensity", config.glow.intensity);
    validate_range_f64(errors, "glow.opacity", config.glow.opacity, 0.0, 1.0);
}

/// Theme backgrounds must parse as CSS colors; the edge width must not be negative.
pub(crate) fn validate_background(errors: &mut Vec<String>, config: &DotfieldConfig) {
    for (name, value) in [
        ("background.dark", &config.background.dark),
        ("background.light", &config.background.light),
    ] {
        if Color::from_css(value).is_none() {
            errors.push(format!("{name} = {value:?} is not a valid color"));
        }
    }
    validate_non_negative(errors, "edge.gradient_size", config.edge.gradient_size);
}

pub(crate) fn validate_animation(errors: &mut Vec<String>, config: &DotfieldConfig) {
    validate_positive(
        errors,
        "animation.transition_ms",
        config.animation.transition_ms,
    );
    validate_range(
        errors,
        "animation.target_fps",
        config.animation.target_fps,
        1,
        240,
    );
}
