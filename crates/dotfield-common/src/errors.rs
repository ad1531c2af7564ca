use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

/// Classified failures of the camera collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    #[error("camera permission denied")]
    PermissionDenied,

    #[error("no camera device found")]
    NotFound,

    #[error("camera is busy")]
    Busy,

    #[error("camera not supported: {0}")]
    Unsupported(String),

    #[error("camera error: {0}")]
    Unknown(String),
}

impl DeviceError {
    /// Message suitable for showing next to the hand-mode toggle.
    pub fn user_message(&self) -> String {
        match self {
            DeviceError::PermissionDenied => {
                "Camera access denied. Please enable camera access in your system settings.".into()
            }
            DeviceError::NotFound => "No camera found on your device".into(),
            DeviceError::Busy => {
                "Camera is in use or not available. Please close other applications using the camera.".into()
            }
            DeviceError::Unsupported(reason) => reason.clone(),
            DeviceError::Unknown(msg) => format!("Error accessing camera: {msg}"),
        }
    }
}

/// A single failed hand estimate. Never fatal; the previous snapshot is kept.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("hand detection error: {0}")]
pub struct DetectionError(pub String);

#[derive(Debug, thiserror::Error)]
pub enum DotfieldError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("{0}")]
    Other(String),
}
