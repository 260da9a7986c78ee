//! Ordered motion programs covering a full cam revolution.

use camgen_math::{arange, FULL_TURN_DEG};
use serde::{Deserialize, Serialize};

use crate::error::{MotionError, Result};
use crate::segment::MotionSegment;

/// An ordered list of segments describing one revolution of the cam.
///
/// Coverage of `[0, 360)` is not enforced on construction. Looking up an
/// angle no segment covers fails with [`MotionError::Uncovered`]; call
/// [`validate_coverage`](Self::validate_coverage) to check the whole turn
/// up front.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MotionProgram {
    segments: Vec<MotionSegment>,
}

impl MotionProgram {
    /// Create a program from segments in lookup order.
    pub fn new(segments: Vec<MotionSegment>) -> Self {
        Self { segments }
    }

    /// The segments in lookup order.
    pub fn segments(&self) -> &[MotionSegment] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the program has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// First segment whose interval contains `angle`.
    pub fn segment_at(&self, angle: f64) -> Result<&MotionSegment> {
        self.segments
            .iter()
            .find(|seg| seg.contains(angle))
            .ok_or(MotionError::Uncovered { angle })
    }

    /// Follower height at `angle`.
    pub fn height_at(&self, angle: f64) -> Result<f64> {
        self.segment_at(angle)?.evaluate(angle)
    }

    /// Element-wise [`height_at`](Self::height_at).
    pub fn height_batch(&self, angles: &[f64]) -> Result<Vec<f64>> {
        angles.iter().map(|&a| self.height_at(a)).collect()
    }

    /// `(angle, height)` samples every `step` degrees over the whole turn.
    pub fn sample(&self, step: f64) -> Result<Vec<(f64, f64)>> {
        arange(0.0, FULL_TURN_DEG, step)
            .into_iter()
            .map(|a| self.height_at(a).map(|h| (a, h)))
            .collect()
    }

    /// Check that the segments tile `[0, 360)` with no gap or overlap.
    ///
    /// Segment order does not matter here; intervals are compared sorted by
    /// start angle and must meet exactly.
    pub fn validate_coverage(&self) -> Result<()> {
        if self.segments.is_empty() {
            return Err(MotionError::EmptyProgram);
        }

        let mut sorted: Vec<&MotionSegment> = self.segments.iter().collect();
        sorted.sort_by(|a, b| a.angle_start().total_cmp(&b.angle_start()));

        let mut covered_to = 0.0;
        for seg in sorted {
            if seg.angle_start() > covered_to {
                return Err(MotionError::CoverageGap {
                    from: covered_to,
                    to: seg.angle_start(),
                });
            }
            if seg.angle_start() < covered_to {
                return Err(MotionError::Overlap {
                    at: seg.angle_start(),
                });
            }
            covered_to = seg.angle_end();
        }

        if covered_to < FULL_TURN_DEG {
            return Err(MotionError::CoverageGap {
                from: covered_to,
                to: FULL_TURN_DEG,
            });
        }
        if covered_to > FULL_TURN_DEG {
            return Err(MotionError::Overlap { at: FULL_TURN_DEG });
        }
        Ok(())
    }

    /// Largest and smallest height over the program, sampled every `step`
    /// degrees.
    pub fn height_range(&self, step: f64) -> Result<(f64, f64)> {
        let samples = self.sample(step)?;
        let min = samples.iter().map(|s| s.1).fold(f64::INFINITY, f64::min);
        let max = samples.iter().map(|s| s.1).fold(f64::NEG_INFINITY, f64::max);
        Ok((min, max))
    }
}

impl From<Vec<MotionSegment>> for MotionProgram {
    fn from(segments: Vec<MotionSegment>) -> Self {
        Self::new(segments)
    }
}

impl FromIterator<MotionSegment> for MotionProgram {
    fn from_iter<I: IntoIterator<Item = MotionSegment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
