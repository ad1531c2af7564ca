//! Headless canvas that records draw calls.

use dotfield_common::{Color, Point};
use serde::Serialize;

use super::types::{Canvas2d, CompositeOp, LinearGradient, Rect, Shadow};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum DrawCommand {
    ResizeBacking { width: u32, height: u32 },
    SetTransform { scale: f64 },
    Clear { width: f64, height: f64 },
    SetComposite { op: CompositeOp },
    SetShadow { shadow: Option<Shadow> },
    FillCircle { center: Point, radius: f64, color: Color },
    FillRectGradient { rect: Rect, gradient: LinearGradient },
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    backing: (u32, u32),
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the log, keeping the canvas state.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn backing_size(&self) -> (u32, u32) {
        self.backing
    }

    /// Every `FillCircle` in order.
    pub fn circles(&self) -> impl Iterator<Item = (Point, f64, Color)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }
}

impl Canvas2d for RecordingCanvas {
    fn resize_backing(&mut self, width: u32, height: u32) {
        self.backing = (width, height);
        self.commands.push(DrawCommand::ResizeBacking { width, height });
    }

    fn set_transform(&mut self, scale: f64) {
        self.commands.push(DrawCommand::SetTransform { scale });
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn set_composite(&mut self, op: CompositeOp) {
        self.commands.push(DrawCommand::SetComposite { op });
    }

    fn set_shadow(&mut self, shadow: Option<Shadow>) {
        self.commands.push(DrawCommand::SetShadow { shadow });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect_gradient(&mut self, rect: Rect, gradient: &LinearGradient) {
        self.commands.push(DrawCommand::FillRectGradient {
            rect,
            gradient: gradient.clone(),
        });
    }
}
