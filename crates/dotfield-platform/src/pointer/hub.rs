//! Shared pointer snapshot with a producer gate.

use std::sync::{Arc, Mutex, MutexGuard};

use dotfield_common::{InteractionMode, Point};

/// Window size and surface placement used to map hand keypoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub window_width: f64,
    pub window_height: f64,
    pub surface_origin: Point,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            window_width: 0.0,
            window_height: 0.0,
            surface_origin: Point::default(),
        }
    }
}

#[derive(Debug, Default)]
struct HubState {
    mode: InteractionMode,
    generation: u64,
    points: Vec<Point>,
    viewport: Viewport,
}

/// The single hand-off point between pointer producers and the render loop.
///
/// Every write checks the active producer under the same lock that stores
/// the points, so a producer that has been switched off can never land a
/// write. Switching producers bumps a generation counter; hand producers
/// present the generation they were started with.
#[derive(Debug, Clone, Default)]
pub struct PointerHub {
    inner: Arc<Mutex<HubState>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, HubState> {
        // A panic while holding the lock cannot leave the points half-written.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn mode(&self) -> InteractionMode {
        self.state().mode
    }

    pub fn generation(&self) -> u64 {
        self.state().generation
    }

    /// Hand the snapshot to another producer.
    ///
    /// Clears the snapshot and returns the new generation. Setting the
    /// current mode again changes nothing.
    pub fn set_mode(&self, mode: InteractionMode) -> u64 {
        let mut state = self.state();
        if state.mode != mode {
            state.mode = mode;
            state.generation += 1;
            state.points.clear();
            tracing::debug!(%mode, generation = state.generation, "pointer producer switched");
        }
        state.generation
    }

    /// Replace the snapshot with a single cursor point. Ignored in hand mode.
    pub fn submit_cursor(&self, point: Point) -> bool {
        let mut state = self.state();
        if state.mode != InteractionMode::Pointer {
            return false;
        }
        state.points.clear();
        state.points.push(point);
        true
    }

    /// Replace the snapshot with hand points. Ignored unless the hub is in
    /// hand mode and `generation` is still current.
    pub fn submit_hand(&self, generation: u64, points: Vec<Point>) -> bool {
        let mut state = self.state();
        if state.mode != InteractionMode::Hand || state.generation != generation {
            return false;
        }
        state.points = points;
        true
    }

    /// Copy of the current snapshot.
    pub fn snapshot(&self) -> Vec<Point> {
        self.state().points.clone()
    }

    /// Read the snapshot in place for the duration of `f`.
    pub fn with_snapshot<R>(&self, f: impl FnOnce(&[Point]) -> R) -> R {
        f(&self.state().points)
    }

    pub fn set_viewport(&self, viewport: Viewport) {
        self.state().viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.state().viewport
    }
}
