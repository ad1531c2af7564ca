//! DotField: grid state, color transitions and force-displaced drawing.

use dotfield_common::{CanvasSize, Color, InteractionMode, Point, Theme};
use dotfield_config::FieldConfig;

use super::physics::{blend_factor, displaced_position, gradient_color};
use super::types::{Dot, GridDims};
use crate::canvas::{Canvas2d, Shadow};

pub struct DotField {
    config: FieldConfig,
    dots: Vec<Dot>,
    dims: GridDims,
    size: Option<CanvasSize>,
    theme: Theme,
    mode: InteractionMode,
}

impl DotField {
    /// An empty field; call [`DotField::initialize`] once the surface is measured.
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            dots: Vec::new(),
            dims: GridDims::default(),
            size: None,
            theme: Theme::default(),
            mode: InteractionMode::default(),
        }
    }

    /// Rebuild the grid for `size`, settled at the colors of `(theme, mode)`.
    ///
    /// Dots are laid out column by column, `i * spacing` apart, with
    /// `ceil(extent / spacing)` cells per axis.
    pub fn initialize(&mut self, size: CanvasSize, theme: Theme, mode: InteractionMode) {
        let spacing = self.config.spacing;
        let cols = (size.width / spacing).ceil().max(0.0) as usize;
        let rows = (size.height / spacing).ceil().max(0.0) as usize;
        let (start, end) = self.config.endpoints(theme, mode);
        let glow_opacity = self.config.glow_opacity;

        self.dots.clear();
        self.dots.reserve(cols * rows);
        for i in 0..cols {
            for j in 0..rows {
                let position = Point::new(i as f64 * spacing, j as f64 * spacing);
                let t = blend_factor(position, size.width, size.height);
                let color = gradient_color(start, end, t);
                self.dots.push(Dot::settled(position, color, color.with_alpha(glow_opacity)));
            }
        }

        self.dims = GridDims { cols, rows };
        self.size = Some(size);
        self.theme = theme;
        self.mode = mode;
        tracing::debug!(cols, rows, %theme, %mode, "dot grid initialized");
    }

    /// Retarget every dot at `mode`'s colors and restart the transition.
    /// Positions are kept.
    pub fn set_mode(&mut self, mode: InteractionMode) {
        self.mode = mode;
        let Some(size) = self.size else {
            return;
        };
        let (start, end) = self.config.endpoints(self.theme, mode);
        let glow_opacity = self.config.glow_opacity;
        for dot in &mut self.dots {
            let t = blend_factor(dot.position, size.width, size.height);
            let color = gradient_color(start, end, t);
            dot.retarget(color, color.with_alpha(glow_opacity));
        }
    }

    /// Move every unsettled dot `delta_ms` further along its transition.
    pub fn advance(&mut self, delta_ms: f64) {
        if delta_ms.is_nan() || delta_ms <= 0.0 {
            return;
        }
        let transition_ms = self.config.transition_ms;
        for dot in &mut self.dots {
            dot.advance(delta_ms, transition_ms);
        }
    }

    /// Draw every dot, displaced by the strongest of `pointers`.
    ///
    /// Each dot sets the glow shadow, fills its circle and clears the
    /// shadow again.
    pub fn render(&self, canvas: &mut dyn Canvas2d, pointers: &[Point]) {
        let max_distance = self.config.max_force_distance;
        let strength = self.config.force_strength;
        let blur = self.config.glow_intensity;
        let radius = self.config.dot_size;

        for dot in &self.dots {
            let at = displaced_position(dot.position, pointers, max_distance, strength);
            canvas.set_shadow(Some(Shadow {
                color: dot.current_glow,
                blur,
            }));
            canvas.fill_circle(at, radius, dot.current_color);
            canvas.set_shadow(None);
        }
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    pub fn size(&self) -> Option<CanvasSize> {
        self.size
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn is_transitioning(&self) -> bool {
        self.dots.iter().any(|d| !d.is_settled())
    }

    /// Color of the dot at grid cell `(col, row)`.
    pub fn color_at(&self, col: usize, row: usize) -> Option<Color> {
        if col >= self.dims.cols || row >= self.dims.rows {
            return None;
        }
        self.dots
            .get(col * self.dims.rows + row)
            .map(|d| d.current_color)
    }
}
