use dotfield_common::{Color, Point};

/// One cell of the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    /// Rest position in surface-local logical pixels. Fixed for the life of the grid.
    pub position: Point,
    pub current_color: Color,
    pub current_glow: Color,
    pub target_color: Color,
    pub target_glow: Color,
    /// Fraction of the transition elapsed; `1.0` means current equals target.
    pub progress: f64,
    /// Milliseconds since the last retarget. `progress` is derived from it.
    pub elapsed_ms: f64,
}

impl Dot {
    /// A settled dot showing `color` with `glow`.
    pub fn settled(position: Point, color: Color, glow: Color) -> Self {
        Self {
            position,
            current_color: color,
            current_glow: glow,
            target_color: color,
            target_glow: glow,
            progress: 1.0,
            elapsed_ms: 0.0,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.progress >= 1.0
    }

    /// Point the dot at a new target and restart its transition.
    pub fn retarget(&mut self, color: Color, glow: Color) {
        self.target_color = color;
        self.target_glow = glow;
        self.progress = 0.0;
        self.elapsed_ms = 0.0;
    }

    /// Advance by `delta_ms` of a `transition_ms` transition and move the
    /// current colors toward the target.
    ///
    /// Progress is recomputed from the total elapsed time, so it is exactly
    /// `1.0` once that total reaches `transition_ms`.
    pub fn advance(&mut self, delta_ms: f64, transition_ms: f64) {
        if self.is_settled() {
            return;
        }
        self.elapsed_ms += delta_ms;
        self.progress = if transition_ms > 0.0 {
            (self.elapsed_ms / transition_ms).min(1.0)
        } else {
            1.0
        };
        if self.is_settled() {
            self.current_color = self.target_color;
            self.current_glow = self.target_glow;
            return;
        }
        let t = self.progress as f32;
        self.current_color = self.current_color.lerp(self.target_color, t);
        self.current_glow = self.current_glow.lerp(self.target_glow, t);
    }
}

/// Grid dimensions of an initialized field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridDims {
    pub cols: usize,
    pub rows: usize,
}
