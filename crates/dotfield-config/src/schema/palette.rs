//! Dot gradient endpoints and per-theme background fills.

use dotfield_common::{Color, InteractionMode, Theme};
use serde::{Deserialize, Serialize};

/// Top-left (`start`) and bottom-right (`end`) colors of the diagonal gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientEndpoints {
    pub start: [u8; 3],
    pub end: [u8; 3],
}

impl GradientEndpoints {
    pub fn colors(&self) -> (Color, Color) {
        (Color::from_rgb8(self.start), Color::from_rgb8(self.end))
    }
}

/// Gradient endpoints for {light, dark} x {pointer, hand}.
///
/// Each field is its own table (`[palette.dark_pointer]`) so a partial
/// override keeps the remaining defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub dark_pointer: GradientEndpoints,
    pub dark_hand: GradientEndpoints,
    pub light_pointer: GradientEndpoints,
    pub light_hand: GradientEndpoints,
}

impl PaletteConfig {
    pub fn endpoints(&self, theme: Theme, mode: InteractionMode) -> GradientEndpoints {
        match (theme, mode) {
            (Theme::Dark, InteractionMode::Pointer) => self.dark_pointer,
            (Theme::Dark, InteractionMode::Hand) => self.dark_hand,
            (Theme::Light, InteractionMode::Pointer) => self.light_pointer,
            (Theme::Light, InteractionMode::Hand) => self.light_hand,
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            dark_pointer: GradientEndpoints {
                start: [100, 100, 255],
                end: [255, 100, 100],
            },
            dark_hand: GradientEndpoints {
                start: [100, 255, 180],
                end: [255, 200, 80],
            },
            light_pointer: GradientEndpoints {
                start: [50, 50, 200],
                end: [200, 50, 50],
            },
            light_hand: GradientEndpoints {
                start: [20, 140, 90],
                end: [200, 120, 20],
            },
        }
    }
}

/// Background fill per theme, used by the edge mask.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub dark: String,
    pub light: String,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            dark: "rgb(0, 0, 0)".into(),
            light: "rgb(255, 255, 255)".into(),
        }
    }
}
