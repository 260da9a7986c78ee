//! Motion segments: a law bound to an angular interval.

use camgen_math::arange;
use serde::{Deserialize, Serialize};

use crate::error::{MotionError, Result};
use crate::law::MotionLaw;

/// One piece of a motion program.
///
/// Covers the half-open interval `[angle_start, angle_end)` in degrees.
/// The follower height at an angle is
/// `height_start + y * height_end`, where `y` is the law's shape at the
/// normalized position (or `1 - shape` for a return), so `height_end` is
/// the displacement span of the segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SegmentSpec", into = "SegmentSpec")]
pub struct MotionSegment {
    law: MotionLaw,
    angle_start: f64,
    angle_end: f64,
    height_start: f64,
    height_end: f64,
    is_return: bool,
}

impl MotionSegment {
    /// Create a segment, rejecting empty or non-finite intervals.
    pub fn new(
        law: MotionLaw,
        angle_start: f64,
        angle_end: f64,
        height_start: f64,
        height_end: f64,
        is_return: bool,
    ) -> Result<Self> {
        let values = [angle_start, angle_end, height_start, height_end];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(MotionError::InvalidSegment(format!(
                "non-finite parameter in {values:?}"
            )));
        }
        if angle_start >= angle_end {
            return Err(MotionError::InvalidSegment(format!(
                "angle_start {angle_start} must be below angle_end {angle_end}"
            )));
        }
        Ok(Self {
            law,
            angle_start,
            angle_end,
            height_start,
            height_end,
            is_return,
        })
    }

    /// Rise from height 0 by `lift` over `[start, end)`.
    pub fn rise(law: MotionLaw, start: f64, end: f64, lift: f64) -> Result<Self> {
        Self::new(law, start, end, 0.0, lift, false)
    }

    /// Fall from height `lift` back to 0 over `[start, end)`.
    pub fn fall(law: MotionLaw, start: f64, end: f64, lift: f64) -> Result<Self> {
        Self::new(law, start, end, 0.0, lift, true)
    }

    /// Hold the follower at `height` over `[start, end)`.
    pub fn dwell(start: f64, end: f64, height: f64) -> Result<Self> {
        Self::new(MotionLaw::BottomDwell, start, end, height, 0.0, false)
    }

    /// The motion law.
    pub fn law(&self) -> MotionLaw {
        self.law
    }

    /// Interval start in degrees (inclusive).
    pub fn angle_start(&self) -> f64 {
        self.angle_start
    }

    /// Interval end in degrees (exclusive).
    pub fn angle_end(&self) -> f64 {
        self.angle_end
    }

    /// Height offset.
    pub fn height_start(&self) -> f64 {
        self.height_start
    }

    /// Height span.
    pub fn height_end(&self) -> f64 {
        self.height_end
    }

    /// Whether the shape runs backwards (a fall).
    pub fn is_return(&self) -> bool {
        self.is_return
    }

    /// Angular width of the interval in degrees.
    pub fn span(&self) -> f64 {
        self.angle_end - self.angle_start
    }

    /// Whether `angle` lies in `[angle_start, angle_end)`.
    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.angle_start && angle < self.angle_end
    }

    /// Fractional position of `angle` within the interval.
    ///
    /// Not range-checked: angles outside the interval map outside `[0, 1)`.
    pub fn normalize(&self, angle: f64) -> f64 {
        (angle - self.angle_start) / self.span()
    }

    /// Follower height at `angle`.
    pub fn evaluate(&self, angle: f64) -> Result<f64> {
        if !self.contains(angle) {
            return Err(MotionError::AngleOutOfRange {
                angle,
                start: self.angle_start,
                end: self.angle_end,
            });
        }
        Ok(self.height_unchecked(angle))
    }

    /// Element-wise [`evaluate`](Self::evaluate), failing on the first
    /// angle outside the interval.
    pub fn evaluate_batch(&self, angles: &[f64]) -> Result<Vec<f64>> {
        angles.iter().map(|&a| self.evaluate(a)).collect()
    }

    /// `(angle, height)` samples every `step` degrees across the interval.
    pub fn sample(&self, step: f64) -> Vec<(f64, f64)> {
        arange(self.angle_start, self.angle_end, step)
            .into_iter()
            .map(|a| (a, self.height_unchecked(a)))
            .collect()
    }

    fn height_unchecked(&self, angle: f64) -> f64 {
        let y = self.law.shape(self.normalize(angle));
        let y = if self.is_return { 1.0 - y } else { y };
        self.height_start + y * self.height_end
    }
}

/// Serialized form of a [`MotionSegment`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SegmentSpec {
    law: MotionLaw,
    angle_start: f64,
    angle_end: f64,
    #[serde(default)]
    height_start: f64,
    #[serde(default = "default_height_end")]
    height_end: f64,
    #[serde(default)]
    is_return: bool,
}

fn default_height_end() -> f64 {
    1.0
}

impl TryFrom<SegmentSpec> for MotionSegment {
    type Error = MotionError;

    fn try_from(spec: SegmentSpec) -> Result<Self> {
        MotionSegment::new(
            spec.law,
            spec.angle_start,
            spec.angle_end,
            spec.height_start,
            spec.height_end,
            spec.is_return,
        )
    }
}

impl From<MotionSegment> for SegmentSpec {
    fn from(seg: MotionSegment) -> Self {
        Self {
            law: seg.law,
            angle_start: seg.angle_start,
            angle_end: seg.angle_end,
            height_start: seg.height_start,
            height_end: seg.height_end,
            is_return: seg.is_return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rejects_empty_interval() {
        assert!(MotionSegment::rise(MotionLaw::Uniform, 90.0, 90.0, 1.0).is_err());
        assert!(MotionSegment::rise(MotionLaw::Uniform, 90.0, 10.0, 1.0).is_err());
        assert!(MotionSegment::rise(MotionLaw::Uniform, 0.0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_uniform_rise() {
        let seg = MotionSegment::rise(MotionLaw::Uniform, 0.0, 180.0, 5.0).unwrap();
        assert_abs_diff_eq!(seg.evaluate(0.0).unwrap(), 0.0);
        assert_abs_diff_eq!(seg.evaluate(90.0).unwrap(), 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(seg.evaluate(179.0).unwrap(), 5.0 * 179.0 / 180.0, epsilon = 1e-12);
    }

    #[test]
    fn test_return_formula() {
        let seg = MotionSegment::new(MotionLaw::Harmonic, 100.0, 200.0, 2.0, 3.0, true).unwrap();
        for angle in [100.0, 125.0, 150.0, 199.5] {
            let z = seg.normalize(angle);
            let expected = 2.0 + (1.0 - MotionLaw::Harmonic.shape(z)) * 3.0;
            assert_abs_diff_eq!(seg.evaluate(angle).unwrap(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_fall_ends_near_zero() {
        let seg = MotionSegment::fall(MotionLaw::Cycloidal, 180.0, 360.0, 5.0).unwrap();
        assert_abs_diff_eq!(seg.evaluate(180.0).unwrap(), 5.0, epsilon = 1e-12);
        assert!(seg.evaluate(359.9).unwrap() < 1e-6);
    }

    #[test]
    fn test_dwell_holds_height() {
        let seg = MotionSegment::dwell(10.0, 20.0, 4.0).unwrap();
        assert_eq!(seg.evaluate(10.0).unwrap(), 4.0);
        assert_eq!(seg.evaluate(19.99).unwrap(), 4.0);

        let top = MotionSegment::new(MotionLaw::TopDwell, 0.0, 10.0, 1.0, 2.0, false).unwrap();
        assert_eq!(top.evaluate(5.0).unwrap(), 3.0);
    }

    #[test]
    fn test_half_open_interval() {
        let seg = MotionSegment::rise(MotionLaw::Poly345, 30.0, 60.0, 1.0).unwrap();
        assert!(seg.evaluate(30.0).is_ok());
        assert!(seg.evaluate(59.999).is_ok());
        let err = seg.evaluate(60.0).unwrap_err();
        assert_eq!(
            err,
            MotionError::AngleOutOfRange {
                angle: 60.0,
                start: 30.0,
                end: 60.0
            }
        );
        assert!(seg.evaluate(29.0).is_err());
    }

    #[test]
    fn test_evaluate_batch() {
        let seg = MotionSegment::rise(MotionLaw::Parabolic, 0.0, 100.0, 10.0).unwrap();
        let heights = seg.evaluate_batch(&[0.0, 25.0, 50.0, 75.0]).unwrap();
        assert_abs_diff_eq!(heights[0], 0.0);
        assert_abs_diff_eq!(heights[1], 1.25, epsilon = 1e-12);
        assert_abs_diff_eq!(heights[2], 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(heights[3], 8.75, epsilon = 1e-12);

        assert!(seg.evaluate_batch(&[10.0, 100.0]).is_err());
    }

    #[test]
    fn test_sample() {
        let seg = MotionSegment::rise(MotionLaw::Uniform, 10.0, 20.0, 1.0).unwrap();
        let pts = seg.sample(1.0);
        assert_eq!(pts.len(), 10);
        assert_eq!(pts[0], (10.0, 0.0));
        assert_abs_diff_eq!(pts[9].1, 0.9, epsilon = 1e-12);
    }

    #[test]
    fn test_segment_serialization() {
        let seg = MotionSegment::fall(MotionLaw::Poly345, 90.0, 180.0, 3.0).unwrap();
        let json = serde_json::to_string(&seg).unwrap();
        let parsed: MotionSegment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, seg);
    }

    #[test]
    fn test_segment_deserialization_defaults_and_validation() {
        let seg: MotionSegment =
            serde_json::from_str(r#"{"law":"uniform","angle_start":0,"angle_end":90}"#).unwrap();
        assert_eq!(seg.height_start(), 0.0);
        assert_eq!(seg.height_end(), 1.0);
        assert!(!seg.is_return());

        let bad = serde_json::from_str::<MotionSegment>(
            r#"{"law":"uniform","angle_start":90,"angle_end":0}"#,
        );
        assert!(bad.is_err());
    }
}
