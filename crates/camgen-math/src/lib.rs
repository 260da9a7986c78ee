#![warn(missing_docs)]

//! Math types for camgen.
//!
//! Thin wrappers around nalgebra providing the planar types used by the
//! cam synthesis crates: points, vectors, polar coordinates and
//! degree-based angle helpers.

use nalgebra::Vector2;

/// A point in the cam plane.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in the cam plane.
pub type Vec2 = Vector2<f64>;

/// Number of degrees in a full turn.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Map an angle in degrees onto `[0, 360)`.
///
/// Only negative angles are shifted by one turn, matching the output range
/// of `atan2` converted to degrees.
#[inline]
pub fn wrap_atan2_deg(deg: f64) -> f64 {
    if deg < 0.0 {
        deg + FULL_TURN_DEG
    } else {
        deg
    }
}

/// A point expressed in polar form about the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    /// Angle in degrees, in `[0, 360)`.
    pub theta_deg: f64,
    /// Distance from the origin.
    pub radius: f64,
}

impl Polar {
    /// Polar form of a Cartesian point.
    pub fn from_point(p: &Point2) -> Self {
        Self {
            theta_deg: wrap_atan2_deg(rad_to_deg(p.y.atan2(p.x))),
            radius: p.coords.norm(),
        }
    }

    /// Cartesian form of this polar coordinate.
    pub fn to_point(&self) -> Point2 {
        polar_point(self.radius, self.theta_deg)
    }
}

/// Cartesian point at `radius` along direction `theta_deg` (degrees).
#[inline]
pub fn polar_point(radius: f64, theta_deg: f64) -> Point2 {
    let (s, c) = deg_to_rad(theta_deg).sin_cos();
    Point2::new(radius * c, radius * s)
}

/// `count` points evenly spaced on a circle, starting at angle zero and
/// stepping `360 / count` degrees counter-clockwise.
pub fn circle_points(center: &Point2, radius: f64, count: usize) -> Vec<Point2> {
    let step = FULL_TURN_DEG / count as f64;
    (0..count)
        .map(|i| center + polar_point(radius, i as f64 * step).coords)
        .collect()
}

/// Evenly spaced samples `start, start + step, ...` strictly below `end`.
///
/// Each sample is computed as `start + i * step` so that long ranges do
/// not accumulate rounding error.
pub fn arange(start: f64, end: f64, step: f64) -> Vec<f64> {
    if step.is_nan() || step <= 0.0 || end.is_nan() || end <= start {
        return Vec::new();
    }
    let count = ((end - start) / step).ceil() as usize;
    (0..count)
        .map(|i| start + i as f64 * step)
        .filter(|v| *v < end)
        .collect()
}
