//! Dot grid geometry and force-field settings.

use serde::{Deserialize, Serialize};

/// Grid layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Base distance between dots in logical pixels.
    pub spacing: f64,
    /// Packing factor applied to `spacing` (valid range: (0, 1]).
    pub density: f64,
    /// Dot radius in logical pixels.
    pub dot_size: f64,
}

impl GridConfig {
    pub fn effective_spacing(&self) -> f64 {
        self.spacing * self.density
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            spacing: 26.0,
            density: 0.9,
            dot_size: 2.0,
        }
    }
}

/// Pointer push settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForceConfig {
    /// Radius beyond which a pointer has no effect.
    pub max_distance: f64,
    /// Displacement in logical pixels for a pointer right next to a dot.
    pub strength: f64,
}

impl Default for ForceConfig {
    fn default() -> Self {
        Self {
            max_distance: 120.0,
            strength: 25.0,
        }
    }
}

/// Per-dot glow settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowConfig {
    /// Shadow blur radius.
    pub intensity: f64,
    /// Alpha of the glow color (valid range: 0.0-1.0).
    pub opacity: f64,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            intensity: 6.0,
            opacity: 0.8,
        }
    }
}
