//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use dotfield_common::Point;
use dotfield_platform::to_surface_local;
use dotfield_renderer::FrameOutcome;

use super::core::DotfieldApp;
use super::surface::WinitSurface;

/// What a key press does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum KeyAction {
    ToggleHandMode,
    ToggleTheme,
    Quit,
}

/// Map a logical key to an app action.
pub(super) fn key_action(key: &Key) -> Option<KeyAction> {
    match key {
        Key::Named(NamedKey::Escape) => Some(KeyAction::Quit),
        Key::Character(c) => match c.to_lowercase().as_str() {
            "h" => Some(KeyAction::ToggleHandMode),
            "t" => Some(KeyAction::ToggleTheme),
            _ => None,
        },
        _ => None,
    }
}

impl ApplicationHandler for DotfieldApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.update_window_title();
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut presenter) = self.presenter {
                        presenter.resize(size.width, size.height);
                    }
                }
                if let Some(ref mut view) = self.view {
                    view.notify_resized();
                }
                self.sync_viewport();
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(ref mut view) = self.view {
                    view.notify_resized();
                }
                self.sync_viewport();
            }

            WindowEvent::CursorMoved { position, .. } => {
                let scale = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
                let logical = position.to_logical::<f64>(scale);
                self.handle_cursor_moved(Point::new(logical.x, logical.y));
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    self.shutdown();
                    event_loop.exit();
                    return;
                }
                self.render_frame();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            self.shutdown();
            event_loop.exit();
            return;
        }
        self.poll_config();
        self.poll_tracker();
        // Continuous redraw is the host frame callback; the view throttles it
        self.request_redraw();
        event_loop.set_control_flow(ControlFlow::Poll);
    }
}

impl DotfieldApp {
    /// Feed the cursor (window logical coordinates) to the pointer hub.
    pub(super) fn handle_cursor_moved(&mut self, window_point: Point) {
        let origin = self
            .view
            .as_ref()
            .map_or(Point::default(), |v| v.surface().origin());
        // Rejected while the hand feed owns the snapshot
        self.hub.submit_cursor(to_surface_local(window_point, origin));
    }

    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        match key_action(&event.logical_key) {
            Some(KeyAction::ToggleHandMode) => self.toggle_hand_mode(),
            Some(KeyAction::ToggleTheme) => self.toggle_theme(),
            Some(KeyAction::Quit) => {
                tracing::info!("Quit requested");
                self.should_exit = true;
            }
            None => {}
        }
    }

    pub(super) fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Some(ref mut view) = self.view {
            view.set_theme(self.theme);
        }
        self.update_window_title();
    }

    /// Run one host frame callback and present the result when drawn.
    fn render_frame(&mut self) {
        let Some(ref window) = self.window else {
            return;
        };
        let host = WinitSurface::from_window(window);
        let t_ms = self.now_ms();
        let Some(ref mut view) = self.view else {
            return;
        };

        match view.frame(t_ms, &host, &mut self.canvas) {
            FrameOutcome::Rendered => {
                let background = view.config().background(self.theme);
                if let Some(ref mut presenter) = self.presenter {
                    if let Err(e) = presenter.present(&self.canvas, background) {
                        tracing::error!("Render error: {e}");
                    }
                }
            }
            FrameOutcome::Skipped | FrameOutcome::NotReady | FrameOutcome::Stopped => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::core::test_app;
    use dotfield_common::{InteractionMode, Theme};

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(
            key_action(&Key::Character("h".into())),
            Some(KeyAction::ToggleHandMode)
        );
        assert_eq!(
            key_action(&Key::Character("H".into())),
            Some(KeyAction::ToggleHandMode)
        );
        assert_eq!(
            key_action(&Key::Character("t".into())),
            Some(KeyAction::ToggleTheme)
        );
        assert_eq!(
            key_action(&Key::Named(NamedKey::Escape)),
            Some(KeyAction::Quit)
        );
        assert_eq!(key_action(&Key::Character("x".into())), None);
    }

    #[test]
    fn cursor_lands_in_hub_in_pointer_mode() {
        let mut app = test_app(false);
        app.handle_cursor_moved(Point::new(40.0, 30.0));
        assert_eq!(app.hub.snapshot(), vec![Point::new(40.0, 30.0)]);
    }

    #[test]
    fn cursor_is_ignored_in_hand_mode() {
        let mut app = test_app(true);
        app.toggle_hand_mode();
        assert_eq!(app.mode(), InteractionMode::Hand);
        app.handle_cursor_moved(Point::new(40.0, 30.0));
        assert!(!app.hub.snapshot().contains(&Point::new(40.0, 30.0)));
        app.shutdown();
    }

    #[test]
    fn theme_toggle_reaches_view() {
        let mut app = test_app(false);
        app.toggle_theme();
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(app.view.as_ref().unwrap().theme(), Theme::Light);
    }
}
