//! Error types for motion programs.

use thiserror::Error;

/// Errors raised while building or evaluating motion segments.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    /// Segment parameters are malformed.
    #[error("invalid segment: {0}")]
    InvalidSegment(String),

    /// Angle lies outside a segment's half-open interval.
    #[error("angle {angle} is outside segment [{start}, {end})")]
    AngleOutOfRange {
        /// Requested angle in degrees.
        angle: f64,
        /// Segment start in degrees.
        start: f64,
        /// Segment end in degrees.
        end: f64,
    },

    /// No segment of the program covers the angle.
    #[error("motion program does not cover angle {angle}")]
    Uncovered {
        /// Requested angle in degrees.
        angle: f64,
    },

    /// Segments leave part of the turn uncovered.
    #[error("motion program has a gap from {from} to {to} degrees")]
    CoverageGap {
        /// Start of the uncovered range.
        from: f64,
        /// End of the uncovered range.
        to: f64,
    },

    /// Two segments claim the same angle.
    #[error("motion program segments overlap at {at} degrees")]
    Overlap {
        /// First angle claimed twice.
        at: f64,
    },

    /// Program has no segments.
    #[error("motion program is empty")]
    EmptyProgram,
}

/// Result type for motion operations.
pub type Result<T> = std::result::Result<T, MotionError>;
