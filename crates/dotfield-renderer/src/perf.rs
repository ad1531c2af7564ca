//! Frame timing for the rendered (not merely scheduled) frames.

use std::collections::VecDeque;

const REPORT_EVERY_MS: f64 = 5000.0;

/// Rolling frame statistics keyed on host frame timestamps.
pub struct FrameTimer {
    frame_times: VecDeque<f64>,
    last_frame_ms: Option<f64>,
    last_report_ms: f64,
    max_samples: usize,
    rendered: u64,
    skipped: u64,
}

impl FrameTimer {
    /// Create a new frame timer with a default 120-sample rolling window.
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::new(),
            last_frame_ms: None,
            last_report_ms: 0.0,
            max_samples: 120,
            rendered: 0,
            skipped: 0,
        }
    }

    /// Record a rendered frame at host time `t_ms`.
    pub fn record_rendered(&mut self, t_ms: f64) {
        self.rendered += 1;
        if let Some(last) = self.last_frame_ms.replace(t_ms) {
            self.frame_times.push_back((t_ms - last).max(0.0));
            if self.frame_times.len() > self.max_samples {
                self.frame_times.pop_front();
            }
        }
        if t_ms - self.last_report_ms >= REPORT_EVERY_MS {
            self.last_report_ms = t_ms;
            tracing::debug!(
                fps = format_args!("{:.1}", self.fps()),
                frame_ms = format_args!("{:.2}", self.frame_time_ms()),
                rendered = self.rendered,
                skipped = self.skipped,
                "frame stats"
            );
        }
    }

    /// Record a callback the scheduler declined.
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Average rendered frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        let total: f64 = self.frame_times.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 * 1000.0 / total
    }

    /// Average time between rendered frames in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f64>() / self.frame_times.len() as f64
    }

    /// Number of frame samples currently stored.
    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }

    pub fn rendered(&self) -> u64 {
        self.rendered
    }

    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
