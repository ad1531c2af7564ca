//! Pointer sources for the dot field.
//!
//! Two producers feed one shared [`PointerHub`]: the cursor and a hand
//! tracking feed. Only the producer selected by the hub's mode may write.

pub mod camera;
pub mod hand;
pub mod pointer;

pub use camera::{CameraDevice, StreamHandle};
pub use hand::{
    validate_hand, DetectorOptions, Hand, HandDetector, HandRejection, HandTracker,
    HandTrackerSettings, Keypoint, SimulatedCamera, SimulatedDetector, TrackerError, TrackerState,
};
pub use pointer::{to_surface_local, video_to_window, PointerHub, Viewport};
