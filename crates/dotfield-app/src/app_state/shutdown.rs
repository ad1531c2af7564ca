//! Graceful shutdown: release the camera, stop the view, stop async tasks.

use std::time::Duration;

use super::core::DotfieldApp;

impl DotfieldApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Stop hand tracking (releases the camera)
    /// 2. Tear down the field view (breaks the frame chain)
    /// 3. Drop the config reload receiver
    /// 4. Shut down the tokio runtime (watcher and tracker tasks)
    /// 5. Release GPU resources
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(mut tracker) = self.tracker.take() {
            tracker.stop();
        }
        self.tracker_rx = None;

        if let Some(ref mut view) = self.view {
            view.teardown();
        }

        self.config_rx = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        self.presenter = None;

        tracing::info!("Graceful shutdown complete");
    }
}
