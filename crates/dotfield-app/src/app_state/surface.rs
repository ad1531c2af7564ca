//! The window's client area as the field's host surface.

use winit::window::Window;

use dotfield_common::LayoutBox;
use dotfield_renderer::HostSurface;

/// Snapshot of the window's inner size and scale factor.
#[derive(Debug, Clone, Copy)]
pub(super) struct WinitSurface {
    physical_width: u32,
    physical_height: u32,
    scale_factor: f64,
}

impl WinitSurface {
    pub(super) fn new(physical_width: u32, physical_height: u32, scale_factor: f64) -> Self {
        Self {
            physical_width,
            physical_height,
            scale_factor,
        }
    }

    pub(super) fn from_window(window: &Window) -> Self {
        let size = window.inner_size();
        Self::new(size.width, size.height, window.scale_factor())
    }

    fn scale(&self) -> f64 {
        if self.scale_factor.is_finite() && self.scale_factor > 0.0 {
            self.scale_factor
        } else {
            1.0
        }
    }
}

impl HostSurface for WinitSurface {
    /// The field fills the client area, so the box starts at the window origin.
    fn layout_box(&self) -> Option<LayoutBox> {
        if self.physical_width == 0 || self.physical_height == 0 {
            return None;
        }
        let scale = self.scale();
        Some(LayoutBox {
            left: 0.0,
            top: 0.0,
            width: self.physical_width as f64 / scale,
            height: self.physical_height as f64 / scale,
        })
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.scale()
    }
}
