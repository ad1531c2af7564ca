pub mod canvas;
pub mod dots;
pub mod edge_mask;
pub mod field_view;
pub mod perf;
pub mod present;
pub mod scheduler;
pub mod surface;

pub use canvas::{Canvas2d, CompositeOp, PixelCanvas, RecordingCanvas};
pub use dots::{Dot, DotField, GridDims};
pub use edge_mask::EdgeMask;
pub use field_view::{FieldView, FrameOutcome};
pub use perf::FrameTimer;
pub use present::{GpuContext, Presenter, RendererError};
pub use scheduler::{AnimationScheduler, FrameDecision};
pub use surface::{CanvasSurface, HostSurface};
