//! Normalized motion laws.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// A normalized displacement law.
///
/// Maps the fractional position `z` in a segment (`0..=1`) to the
/// fractional follower height (`0..=1`). Every rise law satisfies
/// `shape(0) = 0` and `shape(1) = 1`; the dwells are constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionLaw {
    /// Constant velocity, `z`.
    Uniform,
    /// Simple harmonic, `(1 - cos(pi z)) / 2`.
    Harmonic,
    /// 3-4-5 polynomial.
    Poly345,
    /// 4-5-6-7 polynomial.
    Poly4567,
    /// Cycloidal, `z - sin(2 pi z) / (2 pi)`.
    Cycloidal,
    /// Symmetric double parabola (constant acceleration).
    Parabolic,
    /// Follower held at the bottom, constant 0.
    BottomDwell,
    /// Follower held at the top, constant 1.
    TopDwell,
}

impl MotionLaw {
    /// All laws, in declaration order.
    pub const ALL: [MotionLaw; 8] = [
        MotionLaw::Uniform,
        MotionLaw::Harmonic,
        MotionLaw::Poly345,
        MotionLaw::Poly4567,
        MotionLaw::Cycloidal,
        MotionLaw::Parabolic,
        MotionLaw::BottomDwell,
        MotionLaw::TopDwell,
    ];

    /// Fractional height at fractional position `z`.
    pub fn shape(&self, z: f64) -> f64 {
        match self {
            MotionLaw::Uniform => z,
            MotionLaw::Harmonic => 0.5 * (1.0 - (PI * z).cos()),
            MotionLaw::Poly345 => {
                let z3 = z * z * z;
                z3 * (10.0 - 15.0 * z + 6.0 * z * z)
            }
            MotionLaw::Poly4567 => {
                let z4 = z * z * z * z;
                z4 * (35.0 - 84.0 * z + 70.0 * z * z - 20.0 * z * z * z)
            }
            MotionLaw::Cycloidal => z - (2.0 * PI * z).sin() / (2.0 * PI),
            MotionLaw::Parabolic => {
                if z < 0.5 {
                    2.0 * z * z
                } else {
                    let w = 1.0 - z;
                    1.0 - 2.0 * w * w
                }
            }
            MotionLaw::BottomDwell => 0.0,
            MotionLaw::TopDwell => 1.0,
        }
    }

    /// Element-wise [`shape`](Self::shape) over a slice of positions.
    pub fn shape_batch(&self, zs: &[f64]) -> Vec<f64> {
        zs.iter().map(|&z| self.shape(z)).collect()
    }

    /// First derivative of the shape with respect to `z`.
    pub fn velocity(&self, z: f64) -> f64 {
        match self {
            MotionLaw::Uniform => 1.0,
            MotionLaw::Harmonic => 0.5 * PI * (PI * z).sin(),
            MotionLaw::Poly345 => 30.0 * z * z * (1.0 - z) * (1.0 - z),
            MotionLaw::Poly4567 => 140.0 * z * z * z * (1.0 - z).powi(3),
            MotionLaw::Cycloidal => 1.0 - (2.0 * PI * z).cos(),
            MotionLaw::Parabolic => {
                if z < 0.5 {
                    4.0 * z
                } else {
                    4.0 * (1.0 - z)
                }
            }
            MotionLaw::BottomDwell | MotionLaw::TopDwell => 0.0,
        }
    }

    /// Second derivative of the shape with respect to `z`.
    pub fn acceleration(&self, z: f64) -> f64 {
        match self {
            MotionLaw::Uniform => 0.0,
            MotionLaw::Harmonic => 0.5 * PI * PI * (PI * z).cos(),
            MotionLaw::Poly345 => 60.0 * z * (1.0 - z) * (1.0 - 2.0 * z),
            MotionLaw::Poly4567 => 420.0 * z * z * (1.0 - z).powi(2) * (1.0 - 2.0 * z),
            MotionLaw::Cycloidal => 2.0 * PI * (2.0 * PI * z).sin(),
            MotionLaw::Parabolic => {
                if z < 0.5 {
                    4.0
                } else {
                    -4.0
                }
            }
            MotionLaw::BottomDwell | MotionLaw::TopDwell => 0.0,
        }
    }

    /// Whether the law holds the follower still.
    pub fn is_dwell(&self) -> bool {
        matches!(self, MotionLaw::BottomDwell | MotionLaw::TopDwell)
    }
}
