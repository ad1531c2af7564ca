//! DotfieldApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::watch;
use winit::window::Window;

use dotfield_common::{InteractionMode, Theme};
use dotfield_config::DotfieldConfig;
use dotfield_platform::{HandTracker, PointerHub, TrackerState};
use dotfield_renderer::{FieldView, PixelCanvas, Presenter};

/// Top-level application state.
pub struct DotfieldApp {
    pub(super) config: DotfieldConfig,
    pub(super) config_rx: Option<watch::Receiver<DotfieldConfig>>,
    pub(super) theme: Theme,
    pub(super) simulate_hand: bool,

    // Pointer snapshot shared with the hand tracker
    pub(super) hub: PointerHub,
    pub(super) view: Option<FieldView>,
    pub(super) canvas: PixelCanvas,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) presenter: Option<Presenter>,

    // Hand tracking
    pub(super) tracker: Option<HandTracker>,
    pub(super) tracker_rx: Option<watch::Receiver<TrackerState>>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    pub(super) started: Instant,
    pub(super) should_exit: bool,
}

impl DotfieldApp {
    pub fn new(
        config: DotfieldConfig,
        config_rx: Option<watch::Receiver<DotfieldConfig>>,
        runtime: tokio::runtime::Runtime,
        theme: Theme,
        simulate_hand: bool,
    ) -> Self {
        let hub = PointerHub::new();
        let view = match config
            .field()
            .and_then(|field| FieldView::new(field, theme, InteractionMode::Pointer, hub.clone()))
        {
            Ok(view) => Some(view),
            Err(e) => {
                tracing::error!("Invalid field config: {e}");
                None
            }
        };
        Self {
            config,
            config_rx,
            theme,
            simulate_hand,
            hub,
            view,
            canvas: PixelCanvas::new(1, 1),
            window: None,
            presenter: None,
            tracker: None,
            tracker_rx: None,
            tokio_runtime: Some(runtime),
            started: Instant::now(),
            should_exit: false,
        }
    }

    /// Current interaction mode, as seen by the pointer hub.
    pub(super) fn mode(&self) -> InteractionMode {
        self.hub.mode()
    }

    /// Milliseconds since startup: the host frame timestamp.
    pub(super) fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

#[cfg(test)]
pub(super) fn test_app(simulate_hand: bool) -> DotfieldApp {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap();
    DotfieldApp::new(
        DotfieldConfig::default(),
        None,
        runtime,
        Theme::Dark,
        simulate_hand,
    )
}
