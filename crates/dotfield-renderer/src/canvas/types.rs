use dotfield_common::{Color, Point};
use serde::Serialize;

/// How newly drawn shapes combine with what is already on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompositeOp {
    /// Paint over existing pixels.
    #[default]
    SourceOver,
    /// Erase existing pixels by the source alpha. Source color is ignored.
    DestinationOut,
}

/// Glow drawn beneath every filled shape while set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shadow {
    pub color: Color,
    /// Blur radius in device pixels; not scaled by the transform.
    pub blur: f64,
}

/// Axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

/// Linear gradient between two points in logical pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            stops: Vec::new(),
        }
    }

    /// Add a stop. Stops must be added in increasing offset order.
    pub fn with_stop(mut self, offset: f64, color: Color) -> Self {
        self.stops.push(GradientStop {
            offset: offset.clamp(0.0, 1.0),
            color,
        });
        self
    }

    /// Color at parameter `t` along the gradient axis.
    pub fn color_at(&self, t: f64) -> Color {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Color::TRANSPARENT,
        };
        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                if span <= 0.0 {
                    return b.color;
                }
                return a.color.lerp(b.color, ((t - a.offset) / span) as f32);
            }
        }
        last.color
    }

    /// Color at a point, projected onto the gradient axis.
    pub fn sample(&self, point: Point) -> Color {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let len_sq = dx * dx + dy * dy;
        if len_sq <= 0.0 {
            return self.color_at(0.0);
        }
        let t = ((point.x - self.start.x) * dx + (point.y - self.start.y) * dy) / len_sq;
        self.color_at(t)
    }
}

/// The subset of a 2D canvas context the dot field draws with.
///
/// Geometry is in logical pixels; [`Canvas2d::set_transform`] maps it onto
/// the device-pixel backing store.
pub trait Canvas2d {
    /// Resize the backing store in device pixels. Resizing to the current
    /// size keeps the contents.
    fn resize_backing(&mut self, width: u32, height: u32);

    /// Replace the current transform with a uniform scale.
    fn set_transform(&mut self, scale: f64);

    /// Reset a logical `width` x `height` area at the origin to transparent.
    fn clear(&mut self, width: f64, height: f64);

    fn set_composite(&mut self, op: CompositeOp);

    fn set_shadow(&mut self, shadow: Option<Shadow>);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    fn fill_rect_gradient(&mut self, rect: Rect, gradient: &LinearGradient);
}
