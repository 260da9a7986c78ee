#![warn(missing_docs)]

//! Follower motion laws for camgen.
//!
//! A cam's follower motion is programmed as a sequence of angular segments,
//! each applying a normalized motion law (uniform, harmonic, polynomial,
//! cycloidal, parabolic or a dwell) over its interval.
//!
//! # Example
//!
//! ```
//! use camgen_motion::{MotionLaw, MotionProgram, MotionSegment};
//!
//! let program = MotionProgram::new(vec![
//!     MotionSegment::rise(MotionLaw::Poly345, 0.0, 150.0, 6.0).unwrap(),
//!     MotionSegment::dwell(150.0, 210.0, 6.0).unwrap(),
//!     MotionSegment::fall(MotionLaw::Poly345, 210.0, 360.0, 6.0).unwrap(),
//! ]);
//! program.validate_coverage().unwrap();
//!
//! let h = program.height_at(180.0).unwrap();
//! assert!((h - 6.0).abs() < 1e-12);
//! ```

mod error;
mod law;
mod program;
mod segment;

pub use error::{MotionError, Result};
pub use law::MotionLaw;
pub use program::MotionProgram;
pub use segment::MotionSegment;
