#![warn(missing_docs)]

//! Disk cam profile synthesis for camgen.
//!
//! A [`CamProfileGenerator`] starts from a circular blank and turns it
//! against a cylindrical roller follower that moves according to a
//! [`MotionProgram`](camgen_motion::MotionProgram). Every position of the
//! follower cuts away the blank material it overlaps; what survives a full
//! revolution is the cam surface.
//!
//! # Features
//!
//! - Polar profile on a configurable angular grid
//! - Eccentric (offset) follower travel lines
//! - Cartesian export of the cam and follower outlines
//! - Optional parallel synthesis (`parallel` feature)
//!
//! # Example
//!
//! ```
//! use camgen_motion::{MotionLaw, MotionProgram, MotionSegment};
//! use camgen_profile::{CamProfileGenerator, GeneratorSettings};
//!
//! let program = MotionProgram::new(vec![
//!     MotionSegment::rise(MotionLaw::Harmonic, 0.0, 180.0, 5.0).unwrap(),
//!     MotionSegment::fall(MotionLaw::Harmonic, 180.0, 360.0, 5.0).unwrap(),
//! ]);
//! let settings = GeneratorSettings {
//!     base_circle_radius: 10.0,
//!     follower_radius: 2.0,
//!     blank_radius: 20.0,
//!     ..Default::default()
//! };
//!
//! let mut cam = CamProfileGenerator::new(settings, program).unwrap();
//! cam.synthesize_profile().unwrap();
//!
//! let outline = cam.cam_boundary(0.0);
//! assert_eq!(outline.len(), 360);
//! ```

mod cut;
mod error;
mod generator;
mod settings;

pub use cut::{nearest_grid_index, CUT_PASSES};
pub use error::{ProfileError, Result};
pub use generator::{CamProfileGenerator, ProfileState, ProfileStats, FOLLOWER_SAMPLES};
pub use settings::GeneratorSettings;
