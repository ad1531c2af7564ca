//! Hand-feed producer: camera acquisition and the detection loop.
//!
//! State machine:
//!
//! ```text
//! Idle -> Acquiring -> Ready -> Detecting
//!            |           |
//!            +-> Error <-+        any state --stop()--> Closed
//! ```
//!
//! One [`CancellationToken`] covers acquisition, warmup and detection.
//! Every state publish, camera hand-off and pointer write re-checks the
//! token under the same lock that [`HandTracker::stop`] takes, so nothing
//! the background task does can land after `stop` returns.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use dotfield_common::{DebugLog, DetectionError, DeviceError, Point};
use dotfield_config::schema::{HandConfig, LoggingConfig, VideoConstraints};
use serde_json::{json, Value};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::types::{validate_hand, DetectorOptions, HandDetector};
use crate::camera::{CameraDevice, StreamHandle};
use crate::pointer::PointerHub;

const INSECURE_CONTEXT: &str = "Hand pose detection requires a secure context";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrackerError {
    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error(transparent)]
    Detector(#[from] DetectionError),
}

impl TrackerError {
    pub fn user_message(&self) -> String {
        match self {
            TrackerError::Device(e) => e.user_message(),
            TrackerError::Detector(e) => format!("Failed to initialize hand detection: {}", e.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TrackerState {
    #[default]
    Idle,
    Acquiring,
    Ready,
    Detecting,
    Error(TrackerError),
    Closed,
}

impl TrackerState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TrackerState::Error(_) | TrackerState::Closed)
    }

    pub fn error(&self) -> Option<&TrackerError> {
        match self {
            TrackerState::Error(e) => Some(e),
            _ => None,
        }
    }
}

/// Runtime knobs for one tracker, resolved from the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct HandTrackerSettings {
    pub constraints: VideoConstraints,
    pub min_keypoints: usize,
    pub warmup: Duration,
    pub interval: Duration,
    pub detector: DetectorOptions,
    pub dedup_window: Duration,
    pub dedup_capacity: usize,
}

impl HandTrackerSettings {
    pub fn from_config(hand: &HandConfig, logging: &LoggingConfig) -> Self {
        Self {
            constraints: hand.video,
            min_keypoints: hand.min_keypoints,
            warmup: Duration::from_millis(hand.warmup_ms),
            interval: Duration::from_millis(hand.detection_interval_ms.max(1)),
            detector: DetectorOptions {
                max_hands: hand.max_hands,
                detection_confidence: hand.detection_confidence,
                tracking_confidence: hand.tracking_confidence,
            },
            dedup_window: Duration::from_millis(logging.dedup_window_ms),
            dedup_capacity: logging.dedup_capacity,
        }
    }
}

impl Default for HandTrackerSettings {
    fn default() -> Self {
        Self::from_config(&HandConfig::default(), &LoggingConfig::default())
    }
}

struct Shared {
    camera: Arc<dyn CameraDevice>,
    cancel: CancellationToken,
    held: Mutex<Option<StreamHandle>>,
    state_tx: watch::Sender<TrackerState>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Option<StreamHandle>> {
        self.held.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn publish(&self, state: TrackerState) -> bool {
        let _held = self.lock();
        if self.cancel.is_cancelled() {
            return false;
        }
        tracing::debug!(?state, "hand tracker state");
        self.state_tx.send_replace(state);
        true
    }

    /// Keep `stream` until stop. A stream that arrives after stop is
    /// released on the spot.
    fn hold(&self, stream: StreamHandle) -> bool {
        let mut held = self.lock();
        if self.cancel.is_cancelled() {
            drop(held);
            self.camera.release(stream);
            return false;
        }
        *held = Some(stream);
        true
    }

    fn fail(&self, error: TrackerError) {
        let stream = {
            let mut held = self.lock();
            if self.cancel.is_cancelled() {
                return;
            }
            tracing::warn!(%error, "hand tracking unavailable");
            self.state_tx.send_replace(TrackerState::Error(error));
            held.take()
        };
        if let Some(stream) = stream {
            self.camera.release(stream);
        }
    }

    fn submit(&self, hub: &PointerHub, generation: u64, points: Vec<Point>) -> bool {
        let _held = self.lock();
        !self.cancel.is_cancelled() && hub.submit_hand(generation, points)
    }
}

/// Owns the camera for as long as hand mode is on.
pub struct HandTracker {
    shared: Arc<Shared>,
    state_rx: watch::Receiver<TrackerState>,
    task: Option<JoinHandle<()>>,
}

impl HandTracker {
    /// Spawn acquisition and detection on `runtime`.
    ///
    /// Writes go to `hub` tagged with its generation at this moment; switch
    /// the hub to hand mode before starting.
    pub fn start(
        runtime: &tokio::runtime::Handle,
        camera: Arc<dyn CameraDevice>,
        detector: Arc<dyn HandDetector>,
        hub: PointerHub,
        settings: HandTrackerSettings,
    ) -> Self {
        let (state_tx, state_rx) = watch::channel(TrackerState::Idle);
        let shared = Arc::new(Shared {
            camera,
            cancel: CancellationToken::new(),
            held: Mutex::new(None),
            state_tx,
        });
        let generation = hub.generation();
        let task = runtime.spawn(run(shared.clone(), detector, hub, generation, settings));
        Self {
            shared,
            state_rx,
            task: Some(task),
        }
    }

    pub fn state(&self) -> TrackerState {
        self.state_rx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<TrackerState> {
        self.state_rx.clone()
    }

    /// Cancel both loops and release the camera before returning.
    pub fn stop(&mut self) {
        let stream = {
            let mut held = self.shared.lock();
            if self.shared.cancel.is_cancelled() {
                return;
            }
            self.shared.cancel.cancel();
            self.shared.state_tx.send_replace(TrackerState::Closed);
            held.take()
        };
        if let Some(stream) = stream {
            tracing::debug!(stream = stream.id, "releasing camera");
            self.shared.camera.release(stream);
        }
        tracing::info!("Hand tracking stopped");
    }

    /// Stop, then wait for the background task to exit.
    pub async fn shutdown(mut self) {
        self.stop();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!(error = %e, "hand tracker task ended abnormally");
            }
        }
    }
}

impl Drop for HandTracker {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run(
    shared: Arc<Shared>,
    detector: Arc<dyn HandDetector>,
    hub: PointerHub,
    generation: u64,
    settings: HandTrackerSettings,
) {
    let cancel = shared.cancel.clone();
    let mut log = DebugLog::new(
        "HandposeDetector",
        settings.dedup_window,
        settings.dedup_capacity,
    );

    if !shared.camera.is_secure_context() {
        shared.fail(DeviceError::Unsupported(INSECURE_CONTEXT.into()).into());
        return;
    }

    if !shared.publish(TrackerState::Acquiring) {
        return;
    }
    log.debug("Setting up camera", json!(settings.constraints.ideal_width));
    let acquired = tokio::select! {
        _ = cancel.cancelled() => return,
        result = shared.camera.acquire(&settings.constraints) => result,
    };
    let stream = match acquired {
        Ok(stream) => stream,
        Err(e) => {
            log.debug("Camera setup error", json!(e.to_string()));
            shared.fail(e.into());
            return;
        }
    };
    if !shared.hold(stream.clone()) {
        return;
    }
    log.debug(
        "Video loaded",
        json!({ "width": stream.width, "height": stream.height }),
    );

    tokio::select! {
        _ = cancel.cancelled() => return,
        _ = tokio::time::sleep(settings.warmup) => {}
    }

    let initialized = tokio::select! {
        _ = cancel.cancelled() => return,
        result = detector.initialize(&settings.detector) => result,
    };
    if let Err(e) = initialized {
        shared.fail(e.into());
        return;
    }

    if !shared.publish(TrackerState::Ready) || !shared.publish(TrackerState::Detecting) {
        return;
    }
    tracing::info!(
        width = stream.width,
        height = stream.height,
        "Hand tracking started"
    );

    let mut ticker = tokio::time::interval(settings.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let (width, height) = shared.camera.frame_size(&stream);
        let frame = stream.with_size(width, height);
        if !frame.is_ready() {
            log.debug("Video not ready", Value::Null);
            continue;
        }

        let estimate = tokio::select! {
            _ = cancel.cancelled() => break,
            result = detector.estimate(&frame) => result,
        };
        // Rejected, absent and failed detections leave the last snapshot in place
        let points = match estimate {
            Ok(Some(hand)) => match validate_hand(&hand, settings.min_keypoints) {
                Ok(()) => hand.to_surface_points(&frame, &hub.viewport()),
                Err(rejection) => {
                    log.debug("Invalid hand data", json!(rejection.to_string()));
                    continue;
                }
            },
            Ok(None) => continue,
            Err(e) => {
                log.debug("Error detecting hands", json!(e.0));
                continue;
            }
        };

        if !shared.submit(&hub, generation, points) {
            tracing::debug!(generation, "hand producer no longer current");
            break;
        }
    }
}
