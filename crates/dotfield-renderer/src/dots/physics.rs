//! Color blend and pointer force helpers.

use dotfield_common::{Color, Point};

/// Diagonal blend factor: 0 at the top-left corner, 1 at the bottom-right.
pub fn blend_factor(position: Point, width: f64, height: f64) -> f64 {
    (position.x / width + position.y / height) / 2.0
}

/// Channel-wise blend between two endpoints, rounded to whole channel values.
pub fn gradient_color(start: Color, end: Color, t: f64) -> Color {
    start.with_alpha(1.0).lerp(end.with_alpha(1.0), t as f32).rounded()
}

/// The single strongest push on `dot` among `pointers`.
///
/// Returns the force magnitude and the vector from the dot to the pointer
/// that produced it. Pointers exactly on the dot or at/after
/// `max_distance` push nothing. On equal forces the earlier pointer wins.
pub fn strongest_force(
    dot: Point,
    pointers: &[Point],
    max_distance: f64,
    strength: f64,
) -> Option<(f64, f64, f64)> {
    let mut best: Option<(f64, f64, f64)> = None;
    let mut max_force = 0.0;
    for pointer in pointers {
        let dx = pointer.x - dot.x;
        let dy = pointer.y - dot.y;
        let distance = dx.hypot(dy);
        if distance <= 0.0 || distance >= max_distance {
            continue;
        }
        let force = (1.0 - distance / max_distance) * strength;
        if force > max_force {
            max_force = force;
            best = Some((force, dx, dy));
        }
    }
    best
}

/// Where to draw `dot` this frame: pushed away from the strongest pointer.
pub fn displaced_position(
    dot: Point,
    pointers: &[Point],
    max_distance: f64,
    strength: f64,
) -> Point {
    match strongest_force(dot, pointers, max_distance, strength) {
        Some((force, dx, dy)) => {
            let distance = dx.hypot(dy);
            Point::new(
                dot.x - dx / distance * force,
                dot.y - dy / distance * force,
            )
        }
        None => dot,
    }
}
