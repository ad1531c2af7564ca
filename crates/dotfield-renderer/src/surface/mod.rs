//! CanvasSurface: device-pixel-ratio-aware sizing of the drawing surface.

use dotfield_common::{CanvasSize, LayoutBox, Point};

use crate::canvas::Canvas2d;

/// The element the field draws into. Owned by the host; only observed here.
pub trait HostSurface {
    /// Layout box in window logical pixels, or `None` while detached.
    fn layout_box(&self) -> Option<LayoutBox>;

    fn device_pixel_ratio(&self) -> f64;
}

/// Tracks the last measured size and keeps the canvas backing store in sync.
#[derive(Debug, Default)]
pub struct CanvasSurface {
    size: Option<CanvasSize>,
    origin: Point,
}

impl CanvasSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-read the host's layout and apply it to `canvas`.
    ///
    /// Returns `None` when the host has no usable layout yet; callers skip
    /// the frame. Re-applying an unchanged size is cheap.
    pub fn measure(
        &mut self,
        host: &dyn HostSurface,
        canvas: &mut dyn Canvas2d,
    ) -> Option<CanvasSize> {
        let layout = host.layout_box()?;
        if !(layout.width > 0.0 && layout.height > 0.0) {
            return None;
        }
        let dpr = host.device_pixel_ratio();
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };

        let size = CanvasSize {
            width: layout.width,
            height: layout.height,
            dpr,
        };
        let (backing_w, backing_h) = size.backing_size();
        canvas.resize_backing(backing_w, backing_h);
        canvas.set_transform(dpr);

        self.size = Some(size);
        self.origin = layout.origin();
        Some(size)
    }

    /// Size from the last successful measurement.
    pub fn size(&self) -> Option<CanvasSize> {
        self.size
    }

    /// Top-left of the surface in window coordinates.
    pub fn origin(&self) -> Point {
        self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, RecordingCanvas};

    struct FixedHost(Option<LayoutBox>, f64);

    impl HostSurface for FixedHost {
        fn layout_box(&self) -> Option<LayoutBox> {
            self.0
        }

        fn device_pixel_ratio(&self) -> f64 {
            self.1
        }
    }

    fn layout(width: f64, height: f64) -> Option<LayoutBox> {
        Some(LayoutBox {
            left: 10.0,
            top: 20.0,
            width,
            height,
        })
    }

    #[test]
    fn backing_store_rounds_up_device_pixels() {
        let mut surface = CanvasSurface::new();
        let mut canvas = RecordingCanvas::new();
        let size = surface
            .measure(&FixedHost(layout(100.5, 50.0), 1.5), &mut canvas)
            .unwrap();
        assert_eq!(size.dpr, 1.5);
        assert_eq!(canvas.backing_size(), (151, 75));
        assert_eq!(
            canvas.commands()[1],
            DrawCommand::SetTransform { scale: 1.5 }
        );
        assert_eq!(surface.origin(), Point::new(10.0, 20.0));
    }

    #[test]
    fn detached_host_measures_none() {
        let mut surface = CanvasSurface::new();
        let mut canvas = RecordingCanvas::new();
        assert!(surface.measure(&FixedHost(None, 1.0), &mut canvas).is_none());
        assert!(surface.size().is_none());
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn zero_area_measures_none() {
        let mut surface = CanvasSurface::new();
        let mut canvas = RecordingCanvas::new();
        assert!(surface
            .measure(&FixedHost(layout(0.0, 100.0), 1.0), &mut canvas)
            .is_none());
    }

    #[test]
    fn invalid_dpr_falls_back_to_one() {
        let mut surface = CanvasSurface::new();
        let mut canvas = RecordingCanvas::new();
        let size = surface
            .measure(&FixedHost(layout(10.0, 10.0), 0.0), &mut canvas)
            .unwrap();
        assert_eq!(size.dpr, 1.0);
        assert_eq!(canvas.backing_size(), (10, 10));
    }
}
