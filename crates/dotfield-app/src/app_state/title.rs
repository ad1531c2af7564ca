//! Window title management: reflects mode and hand tracker status.

use dotfield_common::InteractionMode;
use dotfield_platform::TrackerState;

use super::core::DotfieldApp;

impl DotfieldApp {
    /// Format: "Dotfield · {theme} · {status}"
    pub(super) fn window_title(&self) -> String {
        let status = match self.mode() {
            InteractionMode::Pointer => "pointer".to_string(),
            InteractionMode::Hand => match self.tracker.as_ref().map(|t| t.state()) {
                Some(TrackerState::Error(e)) => format!("hand: {}", e.user_message()),
                Some(TrackerState::Detecting) => "hand".to_string(),
                Some(TrackerState::Closed) | None => "hand (off)".to_string(),
                Some(_) => "hand (starting camera)".to_string(),
            },
        };
        format!("Dotfield · {} · {status}", self.theme)
    }

    pub(super) fn update_window_title(&self) {
        let Some(ref window) = self.window else {
            return;
        };
        window.set_title(&self.window_title());
    }
}

#[cfg(test)]
mod tests {
    use crate::app_state::core::test_app;

    #[test]
    fn update_title_without_window_does_not_panic() {
        let app = test_app(false);
        app.update_window_title();
    }

    #[test]
    fn title_names_theme_and_mode() {
        let app = test_app(false);
        assert_eq!(app.window_title(), "Dotfield · dark · pointer");
    }
}
