//! Hand tracking settings: camera constraints and detector thresholds.

use serde::{Deserialize, Serialize};

/// Keypoints in a complete hand. Detections with fewer are never used.
pub const HAND_KEYPOINTS: usize = 21;

/// Requested camera resolution bounds (front-facing camera).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConstraints {
    pub min_width: u32,
    pub ideal_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub ideal_height: u32,
    pub max_height: u32,
}

impl Default for VideoConstraints {
    fn default() -> Self {
        Self {
            min_width: 320,
            ideal_width: 640,
            max_width: 1280,
            min_height: 240,
            ideal_height: 480,
            max_height: 720,
        }
    }
}

/// Hand tracking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HandConfig {
    pub video: VideoConstraints,
    /// Detections with fewer keypoints are rejected. Never below [`HAND_KEYPOINTS`].
    pub min_keypoints: usize,
    /// Delay after the camera starts before the first detection.
    pub warmup_ms: u64,
    /// Time between detection passes.
    pub detection_interval_ms: u64,
    pub detection_confidence: f64,
    pub tracking_confidence: f64,
    pub max_hands: u32,
}

impl Default for HandConfig {
    fn default() -> Self {
        Self {
            video: VideoConstraints::default(),
            min_keypoints: HAND_KEYPOINTS,
            warmup_ms: 500,
            detection_interval_ms: 16,
            detection_confidence: 0.5,
            tracking_confidence: 0.5,
            max_hands: 1,
        }
    }
}
