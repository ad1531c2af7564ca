//! Coordinate translation for pointer producers.

use dotfield_common::Point;

/// Translate a window-space point into surface-local coordinates.
pub fn to_surface_local(window_point: Point, surface_origin: Point) -> Point {
    Point::new(
        window_point.x - surface_origin.x,
        window_point.y - surface_origin.y,
    )
}

/// Map a point in video-frame pixels to window coordinates.
///
/// X is mirrored so that moving a hand right in front of a front-facing
/// camera moves the pointer right on screen.
pub fn video_to_window(
    video_point: Point,
    video_width: f64,
    video_height: f64,
    window_width: f64,
    window_height: f64,
) -> Point {
    Point::new(
        (video_width - video_point.x) / video_width * window_width,
        video_point.y / video_height * window_height,
    )
}
