//! PointerSource: the cursor and hand-feed producers share one [`PointerHub`].

mod coords;
mod hub;

pub use coords::{to_surface_local, video_to_window};
pub use hub::{PointerHub, Viewport};
