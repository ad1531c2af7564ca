//! Frame rate, color transition, and edge fade settings.

use serde::{Deserialize, Serialize};

/// Animation timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Duration of a full color transition in milliseconds.
    pub transition_ms: f64,
    /// Draw-rate cap (valid range: 1-240).
    pub target_fps: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            transition_ms: 600.0,
            target_fps: 90,
        }
    }
}

/// Edge fade mask.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeConfig {
    /// Width of each edge gradient in logical pixels.
    pub gradient_size: f64,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            gradient_size: 64.0,
        }
    }
}
