//! Software canvas over a premultiplied RGBA backing store.

use dotfield_common::{Color, Point};

use super::types::{Canvas2d, CompositeOp, LinearGradient, Rect, Shadow};

/// CPU rasterizer implementing [`Canvas2d`].
///
/// Pixels are premultiplied RGBA in `0.0..=1.0`. Circles get a one-pixel
/// anti-aliased edge. Shadow blur is approximated by a Gaussian falloff
/// around the disc rather than a real blur pass; shadows apply to circles
/// only.
pub struct PixelCanvas {
    width: u32,
    height: u32,
    scale: f64,
    composite: CompositeOp,
    shadow: Option<Shadow>,
    pixels: Vec<[f32; 4]>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            scale: 1.0,
            composite: CompositeOp::SourceOver,
            shadow: None,
            pixels: vec![[0.0; 4]; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Premultiplied RGBA at a device pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn alpha_at(&self, x: u32, y: u32) -> f32 {
        self.pixel(x, y).map_or(0.0, |p| p[3])
    }

    /// Copy the backing store into `out` as premultiplied RGBA8.
    pub fn write_rgba8(&self, out: &mut Vec<u8>) {
        out.clear();
        out.reserve(self.pixels.len() * 4);
        for px in &self.pixels {
            for c in px {
                out.push((c.clamp(0.0, 1.0) * 255.0).round() as u8);
            }
        }
    }

    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.write_rgba8(&mut out);
        out
    }

    fn blend(&mut self, index: usize, color: Color, coverage: f32) {
        let alpha = (color.a * coverage).clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let Some(px) = self.pixels.get_mut(index) else {
            return;
        };
        let inv = 1.0 - alpha;
        match self.composite {
            CompositeOp::SourceOver => {
                px[0] = color.r / 255.0 * alpha + px[0] * inv;
                px[1] = color.g / 255.0 * alpha + px[1] * inv;
                px[2] = color.b / 255.0 * alpha + px[2] * inv;
                px[3] = alpha + px[3] * inv;
            }
            CompositeOp::DestinationOut => {
                for c in px.iter_mut() {
                    *c *= inv;
                }
            }
        }
    }

    /// Device-pixel span `[lo, hi)` covering `lo_f..hi_f`, clipped to `limit`.
    fn span(lo_f: f64, hi_f: f64, limit: u32) -> (usize, usize) {
        let lo = lo_f.floor().max(0.0) as usize;
        let hi = (hi_f.ceil().max(0.0) as usize).min(limit as usize);
        (lo, hi)
    }

    /// Blend `color` around a device-space center, weighting each pixel by
    /// `coverage(distance from center)`.
    fn raster_disc(
        &mut self,
        cx: f64,
        cy: f64,
        extent: f64,
        color: Color,
        coverage: impl Fn(f64) -> f64,
    ) {
        let (x0, x1) = Self::span(cx - extent, cx + extent, self.width);
        let (y0, y1) = Self::span(cy - extent, cy + extent, self.height);
        let stride = self.width as usize;
        for y in y0..y1 {
            let py = y as f64 + 0.5;
            for x in x0..x1 {
                let px = x as f64 + 0.5;
                let d = (px - cx).hypot(py - cy);
                let cov = coverage(d);
                if cov > 0.0 {
                    self.blend(y * stride + x, color, cov as f32);
                }
            }
        }
    }
}

/// Falloff of a blurred disc of radius `r`: 0.5 at the edge, Gaussian tails.
fn shadow_coverage(d: f64, r: f64, sigma: f64) -> f64 {
    let edge = d - r;
    let tail = 0.5 * (-(edge * edge) / (2.0 * sigma * sigma)).exp();
    if edge >= 0.0 {
        tail
    } else {
        1.0 - tail
    }
}

impl Canvas2d for PixelCanvas {
    fn resize_backing(&mut self, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels = vec![[0.0; 4]; width as usize * height as usize];
    }

    fn set_transform(&mut self, scale: f64) {
        self.scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
    }

    fn clear(&mut self, width: f64, height: f64) {
        let (_, x1) = Self::span(0.0, width * self.scale, self.width);
        let (_, y1) = Self::span(0.0, height * self.scale, self.height);
        let stride = self.width as usize;
        for y in 0..y1 {
            self.pixels[y * stride..y * stride + x1].fill([0.0; 4]);
        }
    }

    fn set_composite(&mut self, op: CompositeOp) {
        self.composite = op;
    }

    fn set_shadow(&mut self, shadow: Option<Shadow>) {
        self.shadow = shadow;
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        let cx = center.x * self.scale;
        let cy = center.y * self.scale;
        let r = radius * self.scale;

        if let Some(shadow) = self.shadow.filter(|s| s.color.a > 0.0 && s.blur > 0.0) {
            let sigma = shadow.blur / 2.0;
            self.raster_disc(cx, cy, r + 3.0 * sigma, shadow.color, |d| {
                shadow_coverage(d, r, sigma)
            });
        }
        self.raster_disc(cx, cy, r + 1.0, color, |d| (r + 0.5 - d).clamp(0.0, 1.0));
    }

    fn fill_rect_gradient(&mut self, rect: Rect, gradient: &LinearGradient) {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let s = self.scale;
        let (x0, x1) = (
            (rect.x * s).round().max(0.0) as usize,
            (((rect.x + rect.width) * s).round().max(0.0) as usize).min(self.width as usize),
        );
        let (y0, y1) = (
            (rect.y * s).round().max(0.0) as usize,
            (((rect.y + rect.height) * s).round().max(0.0) as usize).min(self.height as usize),
        );
        let stride = self.width as usize;
        for y in y0..y1 {
            let ly = (y as f64 + 0.5) / s;
            for x in x0..x1 {
                let lx = (x as f64 + 0.5) / s;
                let color = gradient.sample(Point::new(lx, ly));
                self.blend(y * stride + x, color, 1.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn opaque_circle_covers_center() {
        let mut canvas = PixelCanvas::new(20, 20);
        canvas.fill_circle(Point::new(10.0, 10.0), 3.0, Color::rgb(255.0, 0.0, 0.0));
        let px = canvas.pixel(10, 10).unwrap();
        assert!(approx(px[0], 1.0));
        assert!(approx(px[3], 1.0));
        assert_eq!(canvas.alpha_at(0, 0), 0.0);
    }

    #[test]
    fn transform_scales_geometry() {
        let mut canvas = PixelCanvas::new(40, 40);
        canvas.set_transform(2.0);
        canvas.fill_circle(Point::new(10.0, 10.0), 2.0, Color::rgb(0.0, 0.0, 255.0));
        assert!(approx(canvas.alpha_at(20, 20), 1.0));
        assert_eq!(canvas.alpha_at(10, 10), 0.0);
    }

    #[test]
    fn invalid_transform_falls_back_to_identity() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.set_transform(0.0);
        assert_eq!(canvas.scale(), 1.0);
        canvas.set_transform(f64::NAN);
        assert_eq!(canvas.scale(), 1.0);
    }

    #[test]
    fn destination_out_erases_by_source_alpha() {
        let mut canvas = PixelCanvas::new(10, 10);
        canvas.fill_circle(Point::new(5.0, 5.0), 4.0, Color::rgb(255.0, 255.0, 255.0));
        canvas.set_composite(CompositeOp::DestinationOut);

        let half = LinearGradient::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0))
            .with_stop(0.0, Color::rgb(0.0, 0.0, 0.0).with_alpha(0.5))
            .with_stop(1.0, Color::rgb(0.0, 0.0, 0.0).with_alpha(0.5));
        canvas.fill_rect_gradient(Rect::new(0.0, 0.0, 10.0, 10.0), &half);
        assert!(approx(canvas.alpha_at(5, 5), 0.5));

        let full = LinearGradient::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0))
            .with_stop(0.0, Color::rgb(0.0, 0.0, 0.0))
            .with_stop(1.0, Color::rgb(0.0, 0.0, 0.0));
        canvas.fill_rect_gradient(Rect::new(0.0, 0.0, 10.0, 10.0), &full);
        assert_eq!(canvas.alpha_at(5, 5), 0.0);
    }

    #[test]
    fn destination_out_ignores_source_color() {
        let mut a = PixelCanvas::new(4, 4);
        let mut b = PixelCanvas::new(4, 4);
        for canvas in [&mut a, &mut b] {
            canvas.fill_circle(Point::new(2.0, 2.0), 3.0, Color::rgb(10.0, 200.0, 30.0));
            canvas.set_composite(CompositeOp::DestinationOut);
        }
        let red = LinearGradient::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0))
            .with_stop(0.0, Color::rgb(255.0, 0.0, 0.0).with_alpha(0.3));
        let blue = LinearGradient::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0))
            .with_stop(0.0, Color::rgb(0.0, 0.0, 255.0).with_alpha(0.3));
        a.fill_rect_gradient(Rect::new(0.0, 0.0, 4.0, 4.0), &red);
        b.fill_rect_gradient(Rect::new(0.0, 0.0, 4.0, 4.0), &blue);
        assert_eq!(a.to_rgba8(), b.to_rgba8());
    }

    #[test]
    fn shadow_draws_glow_beyond_radius() {
        let mut plain = PixelCanvas::new(30, 30);
        plain.fill_circle(Point::new(15.0, 15.0), 2.0, Color::rgb(255.0, 255.0, 255.0));
        assert_eq!(plain.alpha_at(15, 19), 0.0);

        let mut glowing = PixelCanvas::new(30, 30);
        glowing.set_shadow(Some(Shadow {
            color: Color::rgb(255.0, 255.0, 255.0).with_alpha(0.8),
            blur: 6.0,
        }));
        glowing.fill_circle(Point::new(15.0, 15.0), 2.0, Color::rgb(255.0, 255.0, 255.0));
        assert!(glowing.alpha_at(15, 19) > 0.0);
    }

    #[test]
    fn transparent_shadow_draws_nothing_extra() {
        let mut canvas = PixelCanvas::new(30, 30);
        canvas.set_shadow(Some(Shadow {
            color: Color::TRANSPARENT,
            blur: 6.0,
        }));
        canvas.fill_circle(Point::new(15.0, 15.0), 2.0, Color::rgb(255.0, 255.0, 255.0));
        assert_eq!(canvas.alpha_at(15, 19), 0.0);
    }

    #[test]
    fn clear_resets_logical_area() {
        let mut canvas = PixelCanvas::new(8, 8);
        canvas.set_transform(2.0);
        canvas.fill_circle(Point::new(2.0, 2.0), 2.0, Color::rgb(255.0, 0.0, 0.0));
        canvas.clear(4.0, 4.0);
        assert!(canvas.to_rgba8().iter().all(|&b| b == 0));
    }

    #[test]
    fn resize_to_same_size_keeps_contents() {
        let mut canvas = PixelCanvas::new(8, 8);
        canvas.fill_circle(Point::new(4.0, 4.0), 2.0, Color::rgb(255.0, 0.0, 0.0));
        canvas.resize_backing(8, 8);
        assert!(canvas.alpha_at(4, 4) > 0.0);
        canvas.resize_backing(9, 8);
        assert_eq!(canvas.width(), 9);
        assert_eq!(canvas.alpha_at(4, 4), 0.0);
    }

    #[test]
    fn circles_are_clipped_to_backing_store() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.fill_circle(Point::new(-1.0, -1.0), 2.0, Color::rgb(255.0, 0.0, 0.0));
        canvas.fill_circle(Point::new(100.0, 100.0), 2.0, Color::rgb(255.0, 0.0, 0.0));
        assert!(canvas.alpha_at(0, 0) > 0.0);
    }

    #[test]
    fn rgba8_output_is_premultiplied() {
        let mut canvas = PixelCanvas::new(1, 1);
        let gradient = LinearGradient::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0))
            .with_stop(0.0, Color::rgb(255.0, 255.0, 255.0).with_alpha(0.5));
        canvas.fill_rect_gradient(Rect::new(0.0, 0.0, 1.0, 1.0), &gradient);
        assert_eq!(canvas.to_rgba8(), vec![128, 128, 128, 128]);
    }
}
