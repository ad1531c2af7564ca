//! Edge fade: erase dot opacity near the four surface borders.

use dotfield_common::{CanvasSize, Color, Point};

use crate::canvas::{Canvas2d, CompositeOp, LinearGradient, Rect};

/// Draws four `destination-out` gradients, opaque background at each edge
/// fading to transparent `gradient_size` pixels inward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeMask {
    pub gradient_size: f64,
}

impl EdgeMask {
    pub fn new(gradient_size: f64) -> Self {
        Self { gradient_size }
    }

    /// The four masks as `(rect, gradient)` pairs: top, bottom, left, right.
    pub fn gradients(&self, size: CanvasSize, background: Color) -> [(Rect, LinearGradient); 4] {
        let g = self.gradient_size;
        let (w, h) = (size.width, size.height);
        let clear = Color::TRANSPARENT;
        let fade = |start: Point, end: Point, from: Color, to: Color| {
            LinearGradient::new(start, end)
                .with_stop(0.0, from)
                .with_stop(1.0, to)
        };
        [
            (
                Rect::new(0.0, 0.0, w, g),
                fade(Point::new(0.0, 0.0), Point::new(0.0, g), background, clear),
            ),
            (
                Rect::new(0.0, h - g, w, g),
                fade(Point::new(0.0, h - g), Point::new(0.0, h), clear, background),
            ),
            (
                Rect::new(0.0, 0.0, g, h),
                fade(Point::new(0.0, 0.0), Point::new(g, 0.0), background, clear),
            ),
            (
                Rect::new(w - g, 0.0, g, h),
                fade(Point::new(w - g, 0.0), Point::new(w, 0.0), clear, background),
            ),
        ]
    }

    /// Erase near the edges, then restore normal compositing.
    pub fn apply(&self, canvas: &mut dyn Canvas2d, size: CanvasSize, background: Color) {
        if self.gradient_size <= 0.0 {
            return;
        }
        canvas.set_composite(CompositeOp::DestinationOut);
        for (rect, gradient) in self.gradients(size, background) {
            canvas.fill_rect_gradient(rect, &gradient);
        }
        canvas.set_composite(CompositeOp::SourceOver);
    }
}
