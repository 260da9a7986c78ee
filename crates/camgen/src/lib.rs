#![warn(missing_docs)]

//! camgen — disk cam profiles from follower motion programs.
//!
//! Describe the follower motion as angular segments (rise, dwell, fall with
//! a chosen motion law), pick the base circle and roller sizes, and cut a
//! blank to obtain the cam outline.
//!
//! # Example
//!
//! ```
//! use camgen::{CamDesign, GeneratorSettings, MotionLaw, MotionSegment};
//!
//! let segments = vec![
//!     MotionSegment::rise(MotionLaw::Cycloidal, 0.0, 120.0, 6.0).unwrap(),
//!     MotionSegment::new(MotionLaw::TopDwell, 120.0, 180.0, 0.0, 6.0, false).unwrap(),
//!     MotionSegment::fall(MotionLaw::Cycloidal, 180.0, 300.0, 6.0).unwrap(),
//!     MotionSegment::dwell(300.0, 360.0, 0.0).unwrap(),
//! ];
//! let settings = GeneratorSettings {
//!     base_circle_radius: 15.0,
//!     follower_radius: 3.0,
//!     blank_radius: 30.0,
//!     ..Default::default()
//! };
//!
//! let cam = CamDesign::new("indexer", settings, segments).synthesize().unwrap();
//! let cam_outline = cam.cam_boundary(45.0);
//! let roller_outline = cam.follower_boundary(45.0).unwrap();
//! assert_eq!(cam_outline.len(), 360);
//! assert_eq!(roller_outline.len(), 360);
//! ```

mod design;

pub use camgen_math::{Point2, Polar, Vec2};
pub use camgen_motion::{MotionError, MotionLaw, MotionProgram, MotionSegment};
pub use camgen_profile::{
    CamProfileGenerator, GeneratorSettings, ProfileError, ProfileState, ProfileStats,
};
pub use design::CamDesign;

use thiserror::Error;

/// Errors from building or synthesizing a cam design.
#[derive(Error, Debug)]
pub enum CamgenError {
    /// Profile synthesis failed.
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// Motion program is malformed.
    #[error(transparent)]
    Motion(#[from] MotionError),

    /// Design document could not be parsed or written.
    #[error("design JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for camgen operations.
pub type Result<T> = std::result::Result<T, CamgenError>;
