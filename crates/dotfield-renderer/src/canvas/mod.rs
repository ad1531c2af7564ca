//! 2D drawing contract and its backends.
//!
//! [`PixelCanvas`] rasterizes on the CPU for presentation; [`RecordingCanvas`]
//! logs calls for headless checks.

mod pixel;
mod recording;
mod types;

pub use pixel::*;
pub use recording::*;
pub use types::*;
