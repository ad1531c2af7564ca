//! FieldView: one interactive dot field bound to a host surface.
//!
//! Each host frame callback goes through [`FieldView::frame`]:
//! scheduler gate, measure, rebuild if the surface changed, advance color
//! transitions, draw displaced dots, fade the edges.

use dotfield_common::{ConfigError, InteractionMode, Theme};
use dotfield_config::FieldConfig;
use dotfield_platform::PointerHub;

use crate::canvas::{Canvas2d, CompositeOp};
use crate::dots::DotField;
use crate::edge_mask::EdgeMask;
use crate::perf::FrameTimer;
use crate::scheduler::{AnimationScheduler, FrameDecision};
use crate::surface::{CanvasSurface, HostSurface};

/// Result of one host frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Throttled by the frame-rate cap.
    Skipped,
    /// The host surface has no layout yet.
    NotReady,
    Rendered,
    /// The view was torn down; stop scheduling callbacks.
    Stopped,
}

pub struct FieldView {
    config: FieldConfig,
    theme: Theme,
    mode: InteractionMode,
    hub: PointerHub,
    surface: CanvasSurface,
    field: DotField,
    scheduler: AnimationScheduler,
    edge: EdgeMask,
    timer: FrameTimer,
    needs_rebuild: bool,
    alive: bool,
}

impl FieldView {
    /// Validate `config` and bind a view to `hub`, switching the hub to `mode`.
    pub fn new(
        config: FieldConfig,
        theme: Theme,
        mode: InteractionMode,
        hub: PointerHub,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        hub.set_mode(mode);
        Ok(Self {
            scheduler: AnimationScheduler::new(config.target_fps),
            edge: EdgeMask::new(config.gradient_size),
            field: DotField::new(config.clone()),
            config,
            theme,
            mode,
            hub,
            surface: CanvasSurface::new(),
            timer: FrameTimer::new(),
            needs_rebuild: true,
            alive: true,
        })
    }

    /// Handle one host frame callback fired at `t_ms`.
    pub fn frame(
        &mut self,
        t_ms: f64,
        host: &dyn HostSurface,
        canvas: &mut dyn Canvas2d,
    ) -> FrameOutcome {
        if !self.alive {
            return FrameOutcome::Stopped;
        }
        let delta_ms = match self.scheduler.on_frame(t_ms) {
            FrameDecision::Cancelled => return FrameOutcome::Stopped,
            FrameDecision::Skip => {
                self.timer.record_skipped();
                return FrameOutcome::Skipped;
            }
            FrameDecision::Render { delta_ms } => delta_ms,
        };

        let previous = self.surface.size();
        let Some(size) = self.surface.measure(host, canvas) else {
            return FrameOutcome::NotReady;
        };
        let resized =
            previous.map_or(true, |p| p.width != size.width || p.height != size.height);
        if self.needs_rebuild || resized {
            self.field.initialize(size, self.theme, self.mode);
            self.needs_rebuild = false;
        }

        self.field.advance(delta_ms);

        let pointers = self.hub.snapshot();
        canvas.clear(size.width, size.height);
        canvas.set_composite(CompositeOp::SourceOver);
        self.field.render(canvas, &pointers);
        self.edge
            .apply(canvas, size, self.config.background(self.theme));

        self.timer.record_rendered(t_ms);
        FrameOutcome::Rendered
    }

    /// The host reported a size change. The grid is rebuilt before the next render.
    pub fn notify_resized(&mut self) {
        if self.alive {
            self.needs_rebuild = true;
        }
    }

    /// Switch theme. Rebuilds the grid settled at the new theme's colors.
    pub fn set_theme(&mut self, theme: Theme) {
        if !self.alive || theme == self.theme {
            return;
        }
        tracing::info!(%theme, "theme changed");
        self.theme = theme;
        self.rebuild_now();
    }

    /// Switch interaction mode: hands the pointer snapshot to the new
    /// producer and animates the dots toward the new palette.
    pub fn set_mode(&mut self, mode: InteractionMode) {
        if !self.alive || mode == self.mode {
            return;
        }
        tracing::info!(%mode, "interaction mode changed");
        self.mode = mode;
        self.hub.set_mode(mode);
        self.field.set_mode(mode);
    }

    /// Start a new render session with `config`. An invalid config is
    /// rejected and the current one kept.
    pub fn replace_config(&mut self, config: FieldConfig) -> Result<(), ConfigError> {
        if !self.alive {
            return Ok(());
        }
        config.validate()?;
        self.scheduler.set_target_fps(config.target_fps);
        self.edge = EdgeMask::new(config.gradient_size);
        self.field = DotField::new(config.clone());
        self.config = config;
        self.rebuild_now();
        tracing::info!("field config replaced");
        Ok(())
    }

    /// Stop the view. Every later call is a no-op and `frame` reports `Stopped`.
    pub fn teardown(&mut self) {
        if !self.alive {
            return;
        }
        self.alive = false;
        self.scheduler.cancel();
        tracing::info!(
            rendered = self.timer.rendered(),
            skipped = self.timer.skipped(),
            "field view torn down"
        );
    }

    fn rebuild_now(&mut self) {
        match self.surface.size() {
            Some(size) => {
                self.field.initialize(size, self.theme, self.mode);
                self.needs_rebuild = false;
            }
            None => self.needs_rebuild = true,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
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

    pub fn field(&self) -> &DotField {
        &self.field
    }

    pub fn surface(&self) -> &CanvasSurface {
        &self.surface
    }

    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }

    pub fn hub(&self) -> &PointerHub {
        &self.hub
    }
}

impl Drop for FieldView {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests;
