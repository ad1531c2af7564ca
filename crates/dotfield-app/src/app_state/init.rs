//! Window creation and presenter initialization.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use dotfield_common::Point;
use dotfield_platform::Viewport;
use dotfield_renderer::Presenter;

use super::core::DotfieldApp;

impl DotfieldApp {
    /// Create the window and initialize the GPU presenter.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title("Dotfield")
            .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 800.0));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        match pollster::block_on(Presenter::new(window.clone())) {
            Ok(presenter) => self.presenter = Some(presenter),
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        }

        self.window = Some(window);
        self.sync_viewport();
        tracing::info!("Window created and renderer initialized");
        true
    }

    /// Publish the window's logical size for hand keypoint mapping.
    pub(super) fn sync_viewport(&self) {
        let Some(ref window) = self.window else {
            return;
        };
        let logical = window
            .inner_size()
            .to_logical::<f64>(window.scale_factor());
        let surface_origin = self
            .view
            .as_ref()
            .map_or(Point::default(), |v| v.surface().origin());
        self.hub.set_viewport(Viewport {
            window_width: logical.width,
            window_height: logical.height,
            surface_origin,
        });
    }
}
