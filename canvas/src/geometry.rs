//! Pure geometry helpers: grid snapping, point rotation, and angle math.
//!
//! All angles are in degrees. Screen space is y-down, so a positive angle
//! rotates clockwise as seen on the canvas.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::{ROTATE_SNAP_STEP_DEG, ROTATE_SNAP_THRESHOLD_DEG};

/// A point in canvas or client space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point { x: self.x + other.x, y: self.y + other.y }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }
}

/// Round `value` to the nearest multiple of `grid_size`.
///
/// Ties round away from zero. A non-positive or non-finite grid size leaves
/// the value untouched.
#[must_use]
pub fn snap_to_grid(value: f64, grid_size: f64) -> f64 {
    if !(grid_size.is_finite() && grid_size > 0.0) {
        return value;
    }
    (value / grid_size).round() * grid_size
}

/// Rotate `(x, y)` about `(center_x, center_y)` by `angle_deg`, clockwise in
/// y-down screen coordinates.
#[must_use]
pub fn rotate_point(x: f64, y: f64, center_x: f64, center_y: f64, angle_deg: f64) -> Point {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let dx = x - center_x;
    let dy = y - center_y;
    Point {
        x: center_x + dx * cos - dy * sin,
        y: center_y + dx * sin + dy * cos,
    }
}

/// Wrap an angle into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Angle in degrees of the vector from `center` to `point`, in `(-180, 180]`.
#[must_use]
pub fn angle_between(point: Point, center: Point) -> f64 {
    (point.y - center.y).atan2(point.x - center.x).to_degrees()
}

/// Smallest absolute angular distance between two angles, in `[0, 180]`.
#[must_use]
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let delta = (a - b).abs().rem_euclid(360.0);
    delta.min(360.0 - delta)
}

/// Soft-snap an angle to the nearest compass direction.
///
/// The angle snaps to a multiple of 45° only when it lies within 10° of it;
/// otherwise it is returned normalized but otherwise unchanged.
#[must_use]
pub fn soft_snap_angle(deg: f64) -> f64 {
    let deg = normalize_degrees(deg);
    let target = (deg / ROTATE_SNAP_STEP_DEG).round() * ROTATE_SNAP_STEP_DEG;
    if angular_distance(deg, target) <= ROTATE_SNAP_THRESHOLD_DEG {
        normalize_degrees(target)
    } else {
        deg
    }
}
