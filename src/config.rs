use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::Difficulty;

/// Largest noise amplitude or line bonus accepted.
pub const MAX_ADJUSTMENT: i32 = 1000;

/// Tunables of the move-selection heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThinkConfig {
    /// Noise amplitude per difficulty; each square gets a value in `[-v, v]`.
    pub easy_noise: i32,
    pub medium_noise: i32,
    pub hard_noise: i32,
    /// Added to an empty edge square whose remaining edge line is ours.
    pub line_bonus: i32,
    /// Own stones required on the six squares past the scan start.
    pub line_bonus_threshold: usize,
}

impl Default for ThinkConfig {
    fn default() -> Self {
        Self {
            easy_noise: 25,
            medium_noise: 15,
            hard_noise: 5,
            line_bonus: 90,
            line_bonus_threshold: 6,
        }
    }
}

impl ThinkConfig {
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every score adjustment lies within `0..=MAX_ADJUSTMENT`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("easy_noise", self.easy_noise),
            ("medium_noise", self.medium_noise),
            ("hard_noise", self.hard_noise),
            ("line_bonus", self.line_bonus),
        ] {
            if !(0..=MAX_ADJUSTMENT).contains(&value) {
                return Err(ConfigError::OutOfRange {
                    field,
                    value,
                    max: MAX_ADJUSTMENT,
                });
            }
        }
        Ok(())
    }

    pub fn noise_for(&self, difficulty: Difficulty) -> i32 {
        match difficulty {
            Difficulty::Easy => self.easy_noise,
            Difficulty::Medium => self.medium_noise,
            Difficulty::Hard => self.hard_noise,
        }
    }

    /// Same bonus settings with noise disabled at every level.
    pub fn without_noise(self) -> Self {
        Self {
            easy_noise: 0,
            medium_noise: 0,
            hard_noise: 0,
            ..self
        }
    }
}
