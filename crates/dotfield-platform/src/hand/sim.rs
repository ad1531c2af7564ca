//! Simulated camera and detector for running hand mode without hardware.

use std::f64::consts::TAU;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Instant;

use async_trait::async_trait;
use dotfield_common::{DetectionError, DeviceError};
use dotfield_config::schema::VideoConstraints;

use super::types::{Hand, HandDetector, Keypoint};
use crate::camera::{CameraDevice, StreamHandle};

const FINGERS: [&str; 5] = [
    "thumb",
    "index_finger",
    "middle_finger",
    "ring_finger",
    "pinky_finger",
];
const THUMB_JOINTS: [&str; 4] = ["cmc", "mcp", "ip", "tip"];
const FINGER_JOINTS: [&str; 4] = ["mcp", "pip", "dip", "tip"];

/// A camera that always grants the ideal resolution, or fails with a fixed error.
#[derive(Debug, Default)]
pub struct SimulatedCamera {
    failure: Option<DeviceError>,
    next_id: AtomicU64,
    active: AtomicUsize,
    released: AtomicUsize,
}

impl SimulatedCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: DeviceError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Streams acquired and not yet released.
    pub fn active_streams(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    pub fn released_streams(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CameraDevice for SimulatedCamera {
    async fn acquire(&self, constraints: &VideoConstraints) -> Result<StreamHandle, DeviceError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        let width = constraints
            .ideal_width
            .clamp(constraints.min_width, constraints.max_width);
        let height = constraints
            .ideal_height
            .clamp(constraints.min_height, constraints.max_height);
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.active.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(id, width, height, "simulated camera acquired");
        Ok(StreamHandle::new(id, width, height))
    }

    fn release(&self, handle: StreamHandle) {
        self.active.fetch_sub(1, Ordering::SeqCst);
        self.released.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(id = handle.id, "simulated camera released");
    }
}

/// A single open hand circling the middle of the frame.
#[derive(Debug)]
pub struct SimulatedDetector {
    started: Instant,
    period_secs: f64,
}

impl SimulatedDetector {
    pub fn new(period_secs: f64) -> Self {
        Self {
            started: Instant::now(),
            period_secs: period_secs.max(0.1),
        }
    }

    /// The hand at `elapsed_secs` into the orbit, in the stream's pixel space.
    pub fn hand_at(&self, elapsed_secs: f64, width: f64, height: f64) -> Hand {
        let angle = elapsed_secs / self.period_secs * TAU;
        let orbit = width.min(height) * 0.25;
        let wrist_x = width * 0.5 + orbit * angle.cos();
        let wrist_y = height * 0.6 + orbit * angle.sin();
        let scale = width.min(height) * 0.06;

        let mut keypoints = Vec::with_capacity(21);
        keypoints.push(Keypoint {
            name: Some("wrist".into()),
            ..Keypoint::new(wrist_x, wrist_y)
        });
        for (finger_idx, finger) in FINGERS.iter().enumerate() {
            // Fan the fingers out from -60 to +60 degrees around straight up
            let spread = (finger_idx as f64 - 2.0) * 30f64.to_radians();
            let joints = if finger_idx == 0 {
                THUMB_JOINTS
            } else {
                FINGER_JOINTS
            };
            for (joint_idx, joint) in joints.iter().enumerate() {
                let reach = scale * (joint_idx as f64 + 1.5);
                keypoints.push(Keypoint {
                    name: Some(format!("{finger}_{joint}")),
                    ..Keypoint::new(
                        wrist_x + reach * spread.sin(),
                        wrist_y - reach * spread.cos(),
                    )
                });
            }
        }

        Hand {
            keypoints,
            handedness: Some("Right".into()),
            score: 0.99,
        }
    }
}

impl Default for SimulatedDetector {
    fn default() -> Self {
        Self::new(6.0)
    }
}

#[async_trait]
impl HandDetector for SimulatedDetector {
    async fn estimate(&self, stream: &StreamHandle) -> Result<Option<Hand>, DetectionError> {
        let elapsed = self.started.elapsed().as_secs_f64();
        Ok(Some(self.hand_at(
            elapsed,
            stream.width as f64,
            stream.height as f64,
        )))
    }
}
