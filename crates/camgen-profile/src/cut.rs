//! Blank cutting simulation.
//!
//! The cam turns against the follower one degree at a time. At each step
//! the follower circle is placed in the cam frame and every point of its
//! outline trims the grid radius nearest to it in angle, leaving the
//! envelope of all follower positions as the cam surface.

use camgen_math::{circle_points, Polar};
use tracing::{debug, trace};

use crate::error::Result;
use crate::generator::{CamProfileGenerator, ProfileState, FOLLOWER_SAMPLES};

/// Cutting passes per revolution, one per whole degree.
pub const CUT_PASSES: u32 = 360;

/// Index of the grid angle closest to `theta`.
///
/// `grid` must be sorted ascending and non-empty. Distance is the plain
/// absolute difference (no wrap-around at 360); on a tie the lower index
/// wins.
pub fn nearest_grid_index(grid: &[f64], theta: f64) -> usize {
    let upper = grid.partition_point(|&g| g < theta);
    if upper == 0 {
        return 0;
    }
    if upper == grid.len() {
        return grid.len() - 1;
    }
    let lower = upper - 1;
    if (theta - grid[lower]).abs() <= (grid[upper] - theta).abs() {
        lower
    } else {
        upper
    }
}

impl CamProfileGenerator {
    /// `(grid index, radius)` pairs the follower outline reaches with the
    /// cam at `angle`.
    fn cut_samples(&self, angle: f64) -> Result<Vec<(usize, f64)>> {
        let center = self.follower_center(angle)?;
        let samples = circle_points(&center, self.settings.follower_radius, FOLLOWER_SAMPLES)
            .iter()
            .map(|p| {
                let polar = Polar::from_point(p);
                (
                    nearest_grid_index(&self.angle_grid, polar.theta_deg),
                    polar.radius,
                )
            })
            .collect();
        Ok(samples)
    }

    /// Remove the material the follower occupies with the cam at `angle`.
    ///
    /// Radii only ever decrease.
    pub fn cut_at(&mut self, angle: f64) -> Result<()> {
        let samples = self.cut_samples(angle)?;
        trace!(angle, samples = samples.len(), "cut pass");
        for (idx, dist) in samples {
            let r = &mut self.radius_profile[idx];
            if dist < *r {
                *r = dist;
            }
        }
        self.state = ProfileState::Cut;
        Ok(())
    }

    /// Cut one full revolution, one pass per whole degree in ascending order.
    ///
    /// Stops at the first angle the motion program does not cover; passes
    /// before it stay applied. Call [`reset`](Self::reset) first to cut a
    /// fresh blank.
    pub fn synthesize_profile(&mut self) -> Result<()> {
        debug!(
            passes = CUT_PASSES,
            grid = self.angle_grid.len(),
            blank_radius = self.blank_radius,
            "synthesizing cam profile"
        );
        for deg in 0..CUT_PASSES {
            self.cut_at(f64::from(deg))?;
        }
        let stats = self.stats();
        debug!(
            min_radius = stats.min_radius,
            max_radius = stats.max_radius,
            "cam profile synthesized"
        );
        Ok(())
    }

    /// Parallel form of [`synthesize_profile`](Self::synthesize_profile).
    ///
    /// Every pass is computed against the same profile and the results are
    /// merged with an element-wise minimum, which yields the same radii as
    /// the sequential sweep. On error the profile is left untouched.
    #[cfg(feature = "parallel")]
    pub fn synthesize_profile_parallel(&mut self) -> Result<()> {
        use rayon::prelude::*;

        debug!(
            passes = CUT_PASSES,
            grid = self.angle_grid.len(),
            "synthesizing cam profile in parallel"
        );
        let n = self.radius_profile.len();
        let floor = (0..CUT_PASSES)
            .into_par_iter()
            .try_fold(
                || vec![f64::INFINITY; n],
                |mut acc, deg| -> Result<Vec<f64>> {
                    for (idx, dist) in self.cut_samples(f64::from(deg))? {
                        if dist < acc[idx] {
                            acc[idx] = dist;
                        }
                    }
                    Ok(acc)
                },
            )
            .try_reduce(
                || vec![f64::INFINITY; n],
                |mut a, b| {
                    for (x, y) in a.iter_mut().zip(b) {
                        if y < *x {
                            *x = y;
                        }
                    }
                    Ok(a)
                },
            )?;

        for (r, f) in self.radius_profile.iter_mut().zip(floor) {
            if f < *r {
                *r = f;
            }
        }
        self.state = ProfileState::Cut;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeneratorSettings, ProfileError};
    use approx::assert_abs_diff_eq;
    use camgen_motion::{MotionError, MotionLaw, MotionProgram, MotionSegment};

    fn settings() -> GeneratorSettings {
        GeneratorSettings {
            base_circle_radius: 10.0,
            follower_radius: 2.0,
            eccentricity: 0.0,
            resolution_degrees: 1.0,
            blank_radius: 20.0,
        }
    }

    fn rise_fall() -> MotionProgram {
        MotionProgram::new(vec![
            MotionSegment::rise(MotionLaw::Uniform, 0.0, 180.0, 5.0).unwrap(),
            MotionSegment::fall(MotionLaw::Uniform, 180.0, 360.0, 5.0).unwrap(),
        ])
    }

    fn dwell_rise_dwell_fall() -> MotionProgram {
        MotionProgram::new(vec![
            MotionSegment::dwell(0.0, 60.0, 0.0).unwrap(),
            MotionSegment::rise(MotionLaw::Cycloidal, 60.0, 150.0, 4.0).unwrap(),
            MotionSegment::new(MotionLaw::TopDwell, 150.0, 210.0, 0.0, 4.0, false).unwrap(),
            MotionSegment::fall(MotionLaw::Poly345, 210.0, 300.0, 4.0).unwrap(),
            MotionSegment::dwell(300.0, 360.0, 0.0).unwrap(),
        ])
    }

    #[test]
    fn test_nearest_grid_index() {
        let grid: Vec<f64> = (0..360).map(f64::from).collect();
        assert_eq!(nearest_grid_index(&grid, 0.0), 0);
        assert_eq!(nearest_grid_index(&grid, 10.2), 10);
        assert_eq!(nearest_grid_index(&grid, 10.7), 11);
        assert_eq!(nearest_grid_index(&grid, 11.0), 11);
        // Ties go to the lower index
        assert_eq!(nearest_grid_index(&grid, 10.5), 10);
        // No wrap-around past the last sample
        assert_eq!(nearest_grid_index(&grid, 359.9), 359);
        assert_eq!(nearest_grid_index(&grid, -1.0), 0);
    }

    #[test]
    fn test_nearest_grid_index_coarse() {
        let grid = [0.0, 90.0, 180.0, 270.0];
        assert_eq!(nearest_grid_index(&grid, 44.0), 0);
        assert_eq!(nearest_grid_index(&grid, 45.0), 0);
        assert_eq!(nearest_grid_index(&grid, 46.0), 1);
        assert_eq!(nearest_grid_index(&grid, 350.0), 3);
    }

    #[test]
    fn test_cut_at_trims_near_follower() {
        let mut cam = CamProfileGenerator::new(settings(), rise_fall()).unwrap();
        cam.cut_at(0.0).unwrap();
        let profile = cam.radius_profile();
        // Closest follower point sits at radius 10 - 2
        assert_abs_diff_eq!(profile[0], 8.0, epsilon = 1e-9);
        // Far side of the cam is untouched
        assert_eq!(profile[180], 20.0);
        assert_eq!(cam.state(), ProfileState::Cut);
    }

    #[test]
    fn test_cut_only_removes_material() {
        let mut cam = CamProfileGenerator::new(settings(), dwell_rise_dwell_fall()).unwrap();
        let mut before = cam.radius_profile().to_vec();
        for angle in [0.0, 33.0, 90.0, 91.0, 180.0, 250.0, 359.0] {
            cam.cut_at(angle).unwrap();
            let after = cam.radius_profile().to_vec();
            for (a, b) in after.iter().zip(&before) {
                assert!(a <= b);
                assert!(*a <= 20.0);
            }
            before = after;
        }
    }

    #[test]
    fn test_cut_at_uncovered_angle() {
        let partial = MotionProgram::new(vec![
            MotionSegment::rise(MotionLaw::Uniform, 0.0, 350.0, 5.0).unwrap(),
        ]);
        let mut cam = CamProfileGenerator::new(settings(), partial).unwrap();
        assert_eq!(
            cam.cut_at(355.0).unwrap_err(),
            ProfileError::Motion(MotionError::Uncovered { angle: 355.0 })
        );
        assert!(cam.synthesize_profile().is_err());
        // Passes before the gap were applied
        assert!(cam.radius_profile()[0] < 20.0);
    }

    #[test]
    fn test_synthesis_is_deterministic_after_reset() {
        let mut cam = CamProfileGenerator::new(settings(), dwell_rise_dwell_fall()).unwrap();
        cam.reset(20.0);
        cam.synthesize_profile().unwrap();
        let first = cam.radius_profile().to_vec();

        cam.reset(20.0);
        cam.synthesize_profile().unwrap();
        assert_eq!(cam.radius_profile(), first.as_slice());
    }

    #[test]
    fn test_repeated_synthesis_never_grows() {
        let mut cam = CamProfileGenerator::new(settings(), dwell_rise_dwell_fall()).unwrap();
        cam.synthesize_profile().unwrap();
        let first = cam.radius_profile().to_vec();
        cam.synthesize_profile().unwrap();
        for (a, b) in cam.radius_profile().iter().zip(&first) {
            assert!(a <= b);
        }
    }

    #[test]
    fn test_dwell_profile_is_circular() {
        let mut cam = CamProfileGenerator::new(settings(), dwell_rise_dwell_fall()).unwrap();
        cam.synthesize_profile().unwrap();
        let profile = cam.radius_profile();
        // Inside the bottom dwell away from the flanks: base circle minus roller
        for deg in 320..360 {
            assert_abs_diff_eq!(profile[deg], 8.0, epsilon = 0.02);
        }
        // Inside the top dwell: lifted by the full stroke
        for deg in 170..190 {
            assert_abs_diff_eq!(profile[deg], 12.0, epsilon = 0.02);
        }
        let stats = cam.stats();
        assert_abs_diff_eq!(stats.stroke, 4.0, epsilon = 0.05);
    }

    #[test]
    fn test_knife_edge_follower_traces_pitch_curve() {
        let knife = GeneratorSettings {
            follower_radius: 0.0,
            ..settings()
        };
        let mut cam = CamProfileGenerator::new(knife, rise_fall()).unwrap();
        cam.synthesize_profile().unwrap();
        for deg in [0usize, 45, 90, 135, 180, 270] {
            let expected = 10.0 + cam.program().height_at(deg as f64).unwrap();
            assert_abs_diff_eq!(cam.radius_profile()[deg], expected, epsilon = 1e-9);
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let mut seq = CamProfileGenerator::new(settings(), dwell_rise_dwell_fall()).unwrap();
        seq.synthesize_profile().unwrap();

        let mut par = CamProfileGenerator::new(settings(), dwell_rise_dwell_fall()).unwrap();
        par.synthesize_profile_parallel().unwrap();

        assert_eq!(seq.radius_profile(), par.radius_profile());
        assert_eq!(par.state(), ProfileState::Cut);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_error_leaves_blank() {
        let partial = MotionProgram::new(vec![
            MotionSegment::rise(MotionLaw::Uniform, 0.0, 350.0, 5.0).unwrap(),
        ]);
        let mut cam = CamProfileGenerator::new(settings(), partial).unwrap();
        assert!(cam.synthesize_profile_parallel().is_err());
        assert!(cam.radius_profile().iter().all(|&r| r == 20.0));
        assert_eq!(cam.state(), ProfileState::Blank);
    }
}
