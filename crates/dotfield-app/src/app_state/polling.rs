//! Non-blocking polls run once per event loop turn.

use dotfield_platform::TrackerState;

use super::core::DotfieldApp;

impl DotfieldApp {
    /// Apply a config published by the reload manager as a new render session.
    pub(super) fn poll_config(&mut self) {
        let Some(ref mut rx) = self.config_rx else {
            return;
        };
        match rx.has_changed() {
            Ok(true) => {}
            Ok(false) => return,
            Err(_) => {
                tracing::debug!("config reload channel closed");
                self.config_rx = None;
                return;
            }
        }
        let config = rx.borrow_and_update().clone();
        self.apply_config(config);
    }

    pub(super) fn apply_config(&mut self, config: dotfield_config::DotfieldConfig) {
        let field = match config.field() {
            Ok(field) => field,
            Err(e) => {
                tracing::warn!("Reloaded config ignored: {e}");
                return;
            }
        };
        if let Some(ref mut view) = self.view {
            if let Err(e) = view.replace_config(field) {
                tracing::warn!("Reloaded config ignored: {e}");
                return;
            }
        }
        self.config = config;
        tracing::info!("Config reloaded");
    }

    /// Surface hand tracker state changes in the log and the title.
    pub(super) fn poll_tracker(&mut self) {
        let Some(ref mut rx) = self.tracker_rx else {
            return;
        };
        if !rx.has_changed().unwrap_or(false) {
            return;
        }
        let state = rx.borrow_and_update().clone();
        match state {
            TrackerState::Error(ref e) => {
                tracing::error!("Hand tracking failed: {}", e.user_message());
            }
            ref other => tracing::debug!(state = ?other, "hand tracker state"),
        }
        self.update_window_title();
    }
}
