//! Generator parameters.

use camgen_math::FULL_TURN_DEG;
use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, Result};

/// Geometry and sampling parameters of a cam generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Prime circle radius: cam center to follower center at zero lift.
    pub base_circle_radius: f64,
    /// Radius of the cylindrical roller follower.
    pub follower_radius: f64,
    /// Offset of the follower travel line from the cam center.
    pub eccentricity: f64,
    /// Angular step of the profile grid (degrees).
    pub resolution_degrees: f64,
    /// Radius of the uncut blank disk.
    pub blank_radius: f64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            base_circle_radius: 5.0,
            follower_radius: 1.0,
            eccentricity: 0.0,
            resolution_degrees: 1.0,
            blank_radius: 10.0,
        }
    }
}

impl GeneratorSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if !(self.base_circle_radius.is_finite() && self.base_circle_radius > 0.0) {
            return Err(ProfileError::InvalidSettings(
                "base_circle_radius must be positive".into(),
            ));
        }
        if !(self.follower_radius.is_finite() && self.follower_radius >= 0.0) {
            return Err(ProfileError::InvalidSettings(
                "follower_radius must be zero or positive".into(),
            ));
        }
        if !self.eccentricity.is_finite() {
            return Err(ProfileError::InvalidSettings(
                "eccentricity must be finite".into(),
            ));
        }
        if !(self.resolution_degrees > 0.0 && self.resolution_degrees <= FULL_TURN_DEG) {
            return Err(ProfileError::InvalidSettings(
                "resolution_degrees must be in (0, 360]".into(),
            ));
        }
        if !(self.blank_radius.is_finite() && self.blank_radius > 0.0) {
            return Err(ProfileError::InvalidSettings(
                "blank_radius must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(GeneratorSettings::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_settings() {
        let cases = [
            GeneratorSettings {
                base_circle_radius: 0.0,
                ..Default::default()
            },
            GeneratorSettings {
                follower_radius: -1.0,
                ..Default::default()
            },
            GeneratorSettings {
                eccentricity: f64::NAN,
                ..Default::default()
            },
            GeneratorSettings {
                resolution_degrees: 0.0,
                ..Default::default()
            },
            GeneratorSettings {
                resolution_degrees: 400.0,
                ..Default::default()
            },
            GeneratorSettings {
                blank_radius: f64::INFINITY,
                ..Default::default()
            },
        ];
        for settings in cases {
            assert!(settings.validate().is_err(), "{settings:?}");
        }
    }

    #[test]
    fn test_knife_edge_follower_allowed() {
        let settings = GeneratorSettings {
            follower_radius: 0.0,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_serialization() {
        let settings = GeneratorSettings {
            eccentricity: 1.5,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: GeneratorSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);

        let partial: GeneratorSettings =
            serde_json::from_str(r#"{"base_circle_radius": 12.0}"#).unwrap();
        assert_eq!(partial.base_circle_radius, 12.0);
        assert_eq!(partial.resolution_degrees, 1.0);
    }
}
