//! File watcher for live config reload.
//!
//! Uses the `notify` crate to watch the config file for changes,
//! with a debounce window to coalesce editor save bursts.

mod config_watcher;


pub use config_watcher::{ConfigWatcher, DEFAULT_DEBOUNCE};
