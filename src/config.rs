use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tunable parameters of the recommender.
///
/// Defaults reproduce the reference behavior: keep styles scoring above
/// 0.40 after the symmetry adjustment `0.8 + symmetry * 0.2`, at most 5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Styles must score strictly above this confidence.
    pub min_confidence: f32,
    /// Length of the returned list.
    pub max_recommendations: usize,
    /// Symmetry factor for a fully asymmetric face.
    pub symmetry_floor: f32,
    /// Added to the floor in proportion to the symmetry score.
    pub symmetry_weight: f32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.40,
            max_recommendations: 5,
            symmetry_floor: 0.8,
            symmetry_weight: 0.2,
        }
    }
}

impl ScoringConfig {
    /// Load from a JSON file; missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(Error::InvalidConfig(format!(
                "min_confidence {} outside [0, 1]",
                self.min_confidence
            )));
        }
        if self.max_recommendations == 0 {
            return Err(Error::InvalidConfig("max_recommendations must be positive".into()));
        }
        if self.symmetry_floor <= 0.0 || self.symmetry_weight < 0.0 {
            return Err(Error::InvalidConfig(
                "symmetry factor must be positive and non-decreasing".into(),
            ));
        }
        if self.symmetry_floor + self.symmetry_weight > 1.0 + f32::EPSILON {
            return Err(Error::InvalidConfig(format!(
                "symmetry factor range tops out at {}, above 1",
                self.symmetry_floor + self.symmetry_weight
            )));
        }
        Ok(())
    }

    /// Multiplier applied to the rule confidence for a given symmetry score.
    pub fn symmetry_factor(&self, symmetry_score: f32) -> f32 {
        self.symmetry_floor + symmetry_score * self.symmetry_weight
    }
}
