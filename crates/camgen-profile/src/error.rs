//! Error types for profile synthesis.

use camgen_motion::MotionError;
use thiserror::Error;

/// Errors that can occur while building or cutting a cam profile.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// Generator settings are out of range.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// The motion program could not be evaluated.
    #[error(transparent)]
    Motion(#[from] MotionError),
}

/// Result type for profile operations.
pub type Result<T> = std::result::Result<T, ProfileError>;
