//! Hand-feed producer.

mod sim;
mod tracker;
mod types;

pub use sim::{SimulatedCamera, SimulatedDetector};
pub use tracker::{HandTracker, HandTrackerSettings, TrackerError, TrackerState};
pub use types::{validate_hand, DetectorOptions, Hand, HandDetector, HandRejection, Keypoint};
