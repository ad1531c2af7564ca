//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config reload, the field view, hand tracking
//! and presentation.

mod core;
mod event_handler;
mod hand;
mod init;
mod polling;
mod shutdown;
mod surface;
mod title;

pub use self::core::DotfieldApp;
