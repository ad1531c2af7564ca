//! The dot grid and its per-frame behavior.

mod field;
mod physics;
mod types;

pub use field::*;
pub use physics::*;
pub use types::*;
