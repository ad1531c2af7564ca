//! Hand-feed contract: detections in video-frame pixel space.

use async_trait::async_trait;
use dotfield_common::{DetectionError, Point};
use dotfield_config::schema::HAND_KEYPOINTS;
use serde::{Deserialize, Serialize};

use crate::camera::StreamHandle;
use crate::pointer::{to_surface_local, video_to_window, Viewport};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Keypoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            name: None,
        }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.map_or(true, f64::is_finite)
    }
}

/// One detected hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    pub keypoints: Vec<Keypoint>,
    #[serde(default)]
    pub handedness: Option<String>,
    #[serde(default)]
    pub score: f64,
}

impl Hand {
    /// Map every keypoint into surface-local coordinates.
    pub fn to_surface_points(&self, stream: &StreamHandle, viewport: &Viewport) -> Vec<Point> {
        let (vw, vh) = (stream.width as f64, stream.height as f64);
        self.keypoints
            .iter()
            .map(|kp| {
                let window = video_to_window(
                    Point::new(kp.x, kp.y),
                    vw,
                    vh,
                    viewport.window_width,
                    viewport.window_height,
                );
                to_surface_local(window, viewport.surface_origin)
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HandRejection {
    #[error("hand has {found} keypoints, need at least {required}")]
    TooFewKeypoints { found: usize, required: usize },

    #[error("keypoint {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
}

/// Reject detections that are incomplete or carry non-finite coordinates.
///
/// `min_keypoints` can only raise the bar above [`HAND_KEYPOINTS`].
pub fn validate_hand(hand: &Hand, min_keypoints: usize) -> Result<(), HandRejection> {
    let min_keypoints = min_keypoints.max(HAND_KEYPOINTS);
    if hand.keypoints.len() < min_keypoints {
        return Err(HandRejection::TooFewKeypoints {
            found: hand.keypoints.len(),
            required: min_keypoints,
        });
    }
    if let Some(index) = hand.keypoints.iter().position(|kp| !kp.is_finite()) {
        return Err(HandRejection::NonFiniteCoordinate { index });
    }
    Ok(())
}

/// Detector tuning passed once before the first estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorOptions {
    pub max_hands: u32,
    pub detection_confidence: f64,
    pub tracking_confidence: f64,
}

/// External hand-pose model.
#[async_trait]
pub trait HandDetector: Send + Sync {
    async fn initialize(&self, _options: &DetectorOptions) -> Result<(), DetectionError> {
        Ok(())
    }

    /// Zero or one hand for the stream's current frame.
    async fn estimate(&self, stream: &StreamHandle) -> Result<Option<Hand>, DetectionError>;
}
