//! Configuration schema types for dotfield.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod animation;
mod field;
mod grid;
mod hand;
mod palette;
mod system;
mod theme;

pub use animation::*;
pub use field::*;
pub use grid::*;
pub use hand::*;
pub use palette::*;
pub use system::*;
pub use theme::*;

use dotfield_common::{Color, ConfigError};
use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct DotfieldConfig {
    pub theme: ThemeConfig,
    pub grid: GridConfig,
    pub force: ForceConfig,
    pub glow: GlowConfig,
    pub palette: PaletteConfig,
    pub background: BackgroundConfig,
    pub edge: EdgeConfig,
    pub animation: AnimationConfig,
    pub hand: HandConfig,
    pub logging: LoggingConfig,
}

impl DotfieldConfig {
    /// Project the render-related sections into a [`FieldConfig`].
    pub fn field(&self) -> Result<FieldConfig, ConfigError> {
        let parse_bg = |name: &str, value: &str| {
            Color::from_css(value).ok_or_else(|| {
                ConfigError::ValidationError(format!(
                    "background.{name} = {value:?} is not a valid color"
                ))
            })
        };

        let field = FieldConfig {
            spacing: self.grid.effective_spacing(),
            dot_size: self.grid.dot_size,
            max_force_distance: self.force.max_distance,
            force_strength: self.force.strength,
            glow_intensity: self.glow.intensity,
            glow_opacity: self.glow.opacity as f32,
            palette: self.palette,
            dark_background: parse_bg("dark", &self.background.dark)?,
            light_background: parse_bg("light", &self.background.light)?,
            gradient_size: self.edge.gradient_size,
            transition_ms: self.animation.transition_ms,
            target_fps: self.animation.target_fps as f64,
        };
        field.validate()?;
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotfield_common::{InteractionMode, Theme};

    #[test]
    fn default_config_projects_to_default_field() {
        let field = DotfieldConfig::default().field().unwrap();
        assert_eq!(field, FieldConfig::default());
    }

    #[test]
    fn field_applies_density_to_spacing() {
        let mut config = DotfieldConfig::default();
        config.grid.spacing = 25.0;
        config.grid.density = 1.0;
        assert_eq!(config.field().unwrap().spacing, 25.0);
    }

    #[test]
    fn field_rejects_unparseable_background() {
        let mut config = DotfieldConfig::default();
        config.background.dark = "midnight".into();
        let err = config.field().unwrap_err().to_string();
        assert!(err.contains("background.dark"));
    }

    #[test]
    fn field_rejects_zero_spacing() {
        let mut config = DotfieldConfig::default();
        config.grid.spacing = 0.0;
        let err = config.field().unwrap_err().to_string();
        assert!(err.contains("spacing"));
    }

    #[test]
    fn field_config_validate_collects_every_error() {
        let field = FieldConfig {
            spacing: -1.0,
            dot_size: 0.0,
            transition_ms: f64::NAN,
            glow_opacity: 1.5,
            ..FieldConfig::default()
        };
        let err = field.validate().unwrap_err().to_string();
        assert!(err.contains("spacing"));
        assert!(err.contains("dot_size"));
        assert!(err.contains("transition_ms"));
        assert!(err.contains("glow_opacity"));
    }

    #[test]
    fn endpoints_follow_theme_and_mode() {
        let field = FieldConfig::default();
        let (start, end) = field.endpoints(Theme::Dark, InteractionMode::Pointer);
        assert_eq!(start, Color::rgb(100.0, 100.0, 255.0));
        assert_eq!(end, Color::rgb(255.0, 100.0, 100.0));
        let (start, _) = field.endpoints(Theme::Light, InteractionMode::Hand);
        assert_eq!(start, Color::rgb(20.0, 140.0, 90.0));
    }

    #[test]
    fn background_follows_theme() {
        let field = FieldConfig::default();
        assert_eq!(field.background(Theme::Dark), Color::rgb(0.0, 0.0, 0.0));
        assert_eq!(
            field.background(Theme::Light),
            Color::rgb(255.0, 255.0, 255.0)
        );
    }

    #[test]
    fn frame_interval_from_fps() {
        let field = FieldConfig::default();
        assert!((field.frame_interval_ms() - 1000.0 / 90.0).abs() < 1e-9);
    }

    #[test]
    fn partial_palette_keeps_other_defaults() {
        let config: DotfieldConfig = toml::from_str(
            r#"
[palette.light_hand]
start = [1, 2, 3]
end = [4, 5, 6]
"#,
        )
        .unwrap();
        assert_eq!(config.palette.light_hand.start, [1, 2, 3]);
        assert_eq!(
            config.palette.dark_pointer,
            PaletteConfig::default().dark_pointer
        );
    }
}
