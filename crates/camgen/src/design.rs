//! Serializable cam design documents.

use camgen_motion::MotionProgram;
use camgen_profile::{CamProfileGenerator, GeneratorSettings};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;

/// A complete cam description: generator settings plus motion program.
///
/// ```json
/// {
///   "name": "feeder",
///   "settings": { "base_circle_radius": 10.0, "follower_radius": 2.0 },
///   "segments": [
///     { "law": "harmonic", "angle_start": 0, "angle_end": 180, "height_end": 5 },
///     { "law": "harmonic", "angle_start": 180, "angle_end": 360, "height_end": 5, "is_return": true }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CamDesign {
    /// Design name.
    pub name: String,
    /// Generator geometry and sampling.
    #[serde(default)]
    pub settings: GeneratorSettings,
    /// Follower motion over one revolution.
    pub segments: MotionProgram,
    /// Reject programs that do not tile the full turn before building.
    #[serde(default = "default_check_coverage")]
    pub check_coverage: bool,
}

fn default_check_coverage() -> bool {
    true
}

impl CamDesign {
    /// Create a design with coverage checking enabled.
    pub fn new(
        name: impl Into<String>,
        settings: GeneratorSettings,
        segments: impl Into<MotionProgram>,
    ) -> Self {
        Self {
            name: name.into(),
            settings,
            segments: segments.into(),
            check_coverage: true,
        }
    }

    /// Parse a design from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the design as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build a blank generator for this design.
    pub fn generator(&self) -> Result<CamProfileGenerator> {
        if self.check_coverage {
            self.segments.validate_coverage()?;
        }
        debug!(
            name = %self.name,
            segments = self.segments.len(),
            "building cam generator"
        );
        Ok(CamProfileGenerator::new(
            self.settings.clone(),
            self.segments.clone(),
        )?)
    }

    /// Build a generator and cut the full profile.
    pub fn synthesize(&self) -> Result<CamProfileGenerator> {
        let mut cam = self.generator()?;
        cam.synthesize_profile()?;
        Ok(cam)
    }

    /// Like [`synthesize`](Self::synthesize), cutting passes in parallel.
    #[cfg(feature = "parallel")]
    pub fn synthesize_parallel(&self) -> Result<CamProfileGenerator> {
        let mut cam = self.generator()?;
        cam.synthesize_profile_parallel()?;
        Ok(cam)
    }
}
