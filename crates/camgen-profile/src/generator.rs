//! Cam profile generator state and boundary export.

use camgen_math::{arange, circle_points, deg_to_rad, polar_point, Point2, FULL_TURN_DEG};
use camgen_motion::MotionProgram;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::settings::GeneratorSettings;

/// Points used to discretize the follower circle (one per degree).
pub const FOLLOWER_SAMPLES: usize = 360;

/// Lifecycle of the radial profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileState {
    /// Uniform uncut blank.
    Blank,
    /// At least one cutting pass has removed material.
    Cut,
}

/// Summary of the current radial profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    /// Smallest surviving radius.
    pub min_radius: f64,
    /// Grid angle of the smallest radius (degrees).
    pub min_angle: f64,
    /// Largest surviving radius.
    pub max_radius: f64,
    /// Grid angle of the largest radius (degrees).
    pub max_angle: f64,
    /// `max_radius - min_radius`.
    pub stroke: f64,
}

/// Disk cam generator for a cylindrical roller follower.
///
/// Holds an angular grid and, for every grid angle, the smallest radius
/// left on the blank so far. Cutting passes (see
/// [`cut_at`](Self::cut_at) and
/// [`synthesize_profile`](Self::synthesize_profile)) only ever lower these
/// radii.
#[derive(Debug, Clone)]
pub struct CamProfileGenerator {
    pub(crate) settings: GeneratorSettings,
    pub(crate) program: MotionProgram,
    pub(crate) angle_grid: Vec<f64>,
    pub(crate) radius_profile: Vec<f64>,
    pub(crate) blank_radius: f64,
    pub(crate) state: ProfileState,
}

impl CamProfileGenerator {
    /// Create a generator with a blank of `settings.blank_radius`.
    ///
    /// The program's coverage of the full turn is not checked here; an
    /// uncovered angle surfaces when it is first evaluated.
    pub fn new(settings: GeneratorSettings, program: impl Into<MotionProgram>) -> Result<Self> {
        settings.validate()?;
        let angle_grid = arange(0.0, FULL_TURN_DEG, settings.resolution_degrees);
        let blank_radius = settings.blank_radius;
        let radius_profile = vec![blank_radius; angle_grid.len()];
        Ok(Self {
            settings,
            program: program.into(),
            angle_grid,
            radius_profile,
            blank_radius,
            state: ProfileState::Blank,
        })
    }

    /// Restore a uniform blank disk of `blank_radius`.
    pub fn reset(&mut self, blank_radius: f64) {
        self.blank_radius = blank_radius;
        self.radius_profile.fill(blank_radius);
        self.state = ProfileState::Blank;
    }

    /// Generator settings.
    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// The motion program driving the follower.
    pub fn program(&self) -> &MotionProgram {
        &self.program
    }

    /// Sample angles of the profile, in degrees.
    pub fn angle_grid(&self) -> &[f64] {
        &self.angle_grid
    }

    /// Surviving radius at each grid angle.
    pub fn radius_profile(&self) -> &[f64] {
        &self.radius_profile
    }

    /// Radius of the blank the profile was last reset to.
    pub fn blank_radius(&self) -> f64 {
        self.blank_radius
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ProfileState {
        self.state
    }

    /// Angular offset of the follower center caused by eccentricity (radians).
    fn eccentric_angle(&self) -> f64 {
        self.settings
            .eccentricity
            .atan2(self.settings.base_circle_radius)
    }

    /// Follower center in the cam frame when the cam is at `angle` degrees.
    pub fn follower_center(&self, angle: f64) -> Result<Point2> {
        let h = self.program.height_at(angle)?;
        let rp = self.settings.base_circle_radius;
        let a = deg_to_rad(angle);
        let ae = a + self.eccentric_angle();
        Ok(Point2::new(
            rp * ae.cos() + h * a.cos(),
            rp * ae.sin() + h * a.sin(),
        ))
    }

    /// Cam outline as Cartesian points, one per grid angle.
    ///
    /// The outline is turned clockwise by `rotation_offset` degrees, which
    /// places it as seen by a follower drawn with
    /// [`follower_boundary`](Self::follower_boundary) at the same angle.
    pub fn cam_boundary(&self, rotation_offset: f64) -> Vec<Point2> {
        self.angle_grid
            .iter()
            .zip(&self.radius_profile)
            .map(|(&theta, &r)| polar_point(r, theta - rotation_offset))
            .collect()
    }

    /// Follower outline in the fixed frame when the cam is at `angle`.
    ///
    /// The follower travels parallel to the x axis. Its center is
    /// [`follower_center`](Self::follower_center) turned back by `angle`, so
    /// the outline sits on `cam_boundary(angle)`.
    pub fn follower_boundary(&self, angle: f64) -> Result<Vec<Point2>> {
        let h = self.program.height_at(angle)?;
        let rp = self.settings.base_circle_radius;
        let ae = self.eccentric_angle();
        let center = Point2::new(rp * ae.cos() + h, rp * ae.sin());
        Ok(circle_points(
            &center,
            self.settings.follower_radius,
            FOLLOWER_SAMPLES,
        ))
    }

    /// Extremes of the current profile.
    pub fn stats(&self) -> ProfileStats {
        let mut min = (0, f64::INFINITY);
        let mut max = (0, f64::NEG_INFINITY);
        for (i, &r) in self.radius_profile.iter().enumerate() {
            if r < min.1 {
                min = (i, r);
            }
            if r > max.1 {
                max = (i, r);
            }
        }
        ProfileStats {
            min_radius: min.1,
            min_angle: self.angle_grid[min.0],
            max_radius: max.1,
            max_angle: self.angle_grid[max.0],
            stroke: max.1 - min.1,
        }
    }
}
