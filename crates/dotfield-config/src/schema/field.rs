//! Immutable per-session configuration consumed by the dot field renderer.

use dotfield_common::{Color, ConfigError, InteractionMode, Theme};

use super::PaletteConfig;

/// Everything one render session needs, with colors already parsed.
///
/// Built from a validated [`DotfieldConfig`](super::DotfieldConfig) via
/// [`DotfieldConfig::field`](super::DotfieldConfig::field), or directly in
/// tests. [`FieldConfig::validate`] rejects non-positive geometry and
/// durations instead of clamping them.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    /// Effective grid spacing (density already applied).
    pub spacing: f64,
    pub dot_size: f64,
    pub max_force_distance: f64,
    pub force_strength: f64,
    pub glow_intensity: f64,
    pub glow_opacity: f32,
    pub palette: PaletteConfig,
    pub dark_background: Color,
    pub light_background: Color,
    pub gradient_size: f64,
    pub transition_ms: f64,
    pub target_fps: f64,
}

impl FieldConfig {
    /// Gradient start/end colors for a theme and interaction mode.
    pub fn endpoints(&self, theme: Theme, mode: InteractionMode) -> (Color, Color) {
        self.palette.endpoints(theme, mode).colors()
    }

    pub fn background(&self, theme: Theme) -> Color {
        match theme {
            Theme::Dark => self.dark_background,
            Theme::Light => self.light_background,
        }
    }

    /// Minimum time between rendered frames.
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.target_fps
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();
        let positive = [
            ("spacing", self.spacing),
            ("dot_size", self.dot_size),
            ("max_force_distance", self.max_force_distance),
            ("transition_ms", self.transition_ms),
            ("target_fps", self.target_fps),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                errors.push(format!("{name} = {value} must be > 0"));
            }
        }
        let non_negative = [
            ("force_strength", self.force_strength),
            ("glow_intensity", self.glow_intensity),
            ("gradient_size", self.gradient_size),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                errors.push(format!("{name} = {value} must be >= 0"));
            }
        }
        if !(0.0..=1.0).contains(&self.glow_opacity) {
            errors.push(format!(
                "glow_opacity = {} is out of range [0, 1]",
                self.glow_opacity
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::ValidationError(errors.join("; ")))
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            spacing: 26.0 * 0.9,
            dot_size: 2.0,
            max_force_distance: 120.0,
            force_strength: 25.0,
            glow_intensity: 6.0,
            glow_opacity: 0.8,
            palette: PaletteConfig::default(),
            dark_background: Color::rgb(0.0, 0.0, 0.0),
            light_background: Color::rgb(255.0, 255.0, 255.0),
            gradient_size: 64.0,
            transition_ms: 600.0,
            target_fps: 90.0,
        }
    }
}
