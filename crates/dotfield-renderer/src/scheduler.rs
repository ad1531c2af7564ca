//! Frame-rate cap over the host's native frame callback.

/// What to do with one host frame callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameDecision {
    /// Too soon since the last accepted frame; keep the callback chain alive.
    Skip,
    /// Render, advancing animations by `delta_ms`.
    Render { delta_ms: f64 },
    /// The scheduler has been cancelled.
    Cancelled,
}

/// Throttles a continuously rescheduled callback down to a target rate.
///
/// Accepted frames move `last_frame` forward by a whole number of
/// intervals, keeping the render cadence phase-locked to the interval.
#[derive(Debug, Clone)]
pub struct AnimationScheduler {
    interval_ms: f64,
    last_frame_ms: f64,
    last_accepted_ms: Option<f64>,
    cancelled: bool,
}

impl AnimationScheduler {
    pub fn new(target_fps: f64) -> Self {
        Self {
            interval_ms: 1000.0 / target_fps,
            last_frame_ms: 0.0,
            last_accepted_ms: None,
            cancelled: false,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn last_frame_ms(&self) -> f64 {
        self.last_frame_ms
    }

    /// Decide about the callback fired at `t_ms`.
    ///
    /// `delta_ms` is the time since the previous accepted frame, or zero for
    /// the first one.
    pub fn on_frame(&mut self, t_ms: f64) -> FrameDecision {
        if self.cancelled {
            return FrameDecision::Cancelled;
        }
        let elapsed = t_ms - self.last_frame_ms;
        if elapsed < self.interval_ms {
            return FrameDecision::Skip;
        }
        self.last_frame_ms = t_ms - elapsed % self.interval_ms;

        let delta_ms = self
            .last_accepted_ms
            .map_or(0.0, |prev| (t_ms - prev).max(0.0));
        self.last_accepted_ms = Some(t_ms);
        FrameDecision::Render { delta_ms }
    }

    /// Change the target rate without losing the current phase.
    pub fn set_target_fps(&mut self, target_fps: f64) {
        self.interval_ms = 1000.0 / target_fps;
    }

    /// Break the callback chain. Permanent.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
