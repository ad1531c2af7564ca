pub mod debug_log;
pub mod errors;
pub mod types;

pub use debug_log::DebugLog;
pub use errors::{ConfigError, DetectionError, DeviceError, DotfieldError};
pub use types::{CanvasSize, Color, InteractionMode, LayoutBox, Point, Theme};

pub type Result<T> = std::result::Result<T, DotfieldError>;
