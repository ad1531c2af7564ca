//! Camera acquisition collaborator.
//!
//! The platform camera is external; the hand tracker only needs to acquire
//! a stream, learn its frame size, and release it again.

use async_trait::async_trait;
use dotfield_common::DeviceError;
use dotfield_config::schema::VideoConstraints;

/// An acquired video stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamHandle {
    pub id: u64,
    /// Frame width in video pixels. Zero until the first frame arrives.
    pub width: u32,
    pub height: u32,
}

impl StreamHandle {
    pub fn new(id: u64, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }

    /// A stream is usable once it reports non-zero frame dimensions.
    pub fn is_ready(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn with_size(&self, width: u32, height: u32) -> Self {
        Self {
            id: self.id,
            width,
            height,
        }
    }
}

#[async_trait]
pub trait CameraDevice: Send + Sync {
    /// Whether the host allows camera access at all.
    fn is_secure_context(&self) -> bool {
        true
    }

    async fn acquire(&self, constraints: &VideoConstraints) -> Result<StreamHandle, DeviceError>;

    /// Current frame size of an acquired stream. Cameras that learn their
    /// resolution after acquisition override this.
    fn frame_size(&self, stream: &StreamHandle) -> (u32, u32) {
        (stream.width, stream.height)
    }

    /// Stop the stream. Must not block; called from teardown paths.
    fn release(&self, handle: StreamHandle);
}
