//! Hand mode: owns the tracker for as long as hand mode is on.

use std::sync::Arc;

use dotfield_common::InteractionMode;
use dotfield_platform::{HandTracker, HandTrackerSettings, SimulatedCamera, SimulatedDetector};

use super::core::DotfieldApp;

impl DotfieldApp {
    pub(super) fn toggle_hand_mode(&mut self) {
        match self.mode() {
            InteractionMode::Pointer => self.enable_hand_mode(),
            InteractionMode::Hand => self.disable_hand_mode(),
        }
        self.update_window_title();
    }

    /// Switch the hub to the hand feed, then start the tracker so it
    /// captures the new generation.
    fn enable_hand_mode(&mut self) {
        if !self.simulate_hand {
            tracing::warn!(
                "No camera backend available; run with --simulate-hand to drive hand mode"
            );
            return;
        }
        let Some(ref runtime) = self.tokio_runtime else {
            tracing::warn!("Async runtime is gone, hand mode unavailable");
            return;
        };

        match self.view {
            Some(ref mut view) => view.set_mode(InteractionMode::Hand),
            None => {
                self.hub.set_mode(InteractionMode::Hand);
            }
        }

        let settings = HandTrackerSettings::from_config(&self.config.hand, &self.config.logging);
        let tracker = HandTracker::start(
            runtime.handle(),
            Arc::new(SimulatedCamera::new()),
            Arc::new(SimulatedDetector::default()),
            self.hub.clone(),
            settings,
        );
        self.tracker_rx = Some(tracker.subscribe());
        self.tracker = Some(tracker);
        tracing::info!("Hand mode on");
    }

    /// Release the camera first, then hand the snapshot back to the cursor.
    pub(super) fn disable_hand_mode(&mut self) {
        if let Some(mut tracker) = self.tracker.take() {
            tracker.stop();
        }
        self.tracker_rx = None;

        match self.view {
            Some(ref mut view) => view.set_mode(InteractionMode::Pointer),
            None => {
                self.hub.set_mode(InteractionMode::Pointer);
            }
        }
        tracing::info!("Hand mode off");
    }
}
