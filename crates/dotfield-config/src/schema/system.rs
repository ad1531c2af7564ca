//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Default `EnvFilter` directive for this level.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "dotfield=trace",
            LogLevel::Debug => "dotfield=debug",
            LogLevel::Info => "dotfield=info",
            LogLevel::Warn => "dotfield=warn",
            LogLevel::Error => "dotfield=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Suppression window for repeated debug messages.
    pub dedup_window_ms: u64,
    /// Maximum number of distinct messages tracked for suppression.
    pub dedup_capacity: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            dedup_window_ms: 100,
            dedup_capacity: 256,
        }
    }
}
