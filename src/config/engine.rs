//! Engine configuration

use serde::Deserialize;

use crate::domain::ahp::{
    AhpSettings, RandomIndexTable, DEFAULT_MAX_MATRIX_SIZE, DEFAULT_MIN_MATRIX_SIZE,
    DEFAULT_RANDOM_INDEX_FALLBACK, DEFAULT_RECIPROCAL_PRECISION,
};

use super::error::ValidationError;

/// Largest supported reciprocal precision.
pub const MAX_RECIPROCAL_PRECISION: u32 = 10;

/// Numeric knobs of the AHP engine
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Decimals kept when a reciprocal is stored
    #[serde(default = "default_precision")]
    pub reciprocal_precision: u32,

    #[serde(default = "default_min_size")]
    pub min_matrix_size: usize,

    /// 12 for hierarchies, 20 for the standalone criteria tool
    #[serde(default = "default_max_size")]
    pub max_matrix_size: usize,

    /// RI used for sizes outside the built-in table
    #[serde(default = "default_fallback")]
    pub random_index_fallback: f64,
}

impl EngineConfig {
    /// Converts into the settings value the domain consumes
    pub fn settings(&self) -> AhpSettings {
        AhpSettings {
            reciprocal_precision: self.reciprocal_precision,
            min_matrix_size: self.min_matrix_size,
            max_matrix_size: self.max_matrix_size,
            random_index: RandomIndexTable::with_fallback(self.random_index_fallback),
        }
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.reciprocal_precision > MAX_RECIPROCAL_PRECISION {
            return Err(ValidationError::InvalidPrecision {
                max: MAX_RECIPROCAL_PRECISION,
                actual: self.reciprocal_precision,
            });
        }
        if self.min_matrix_size == 0 {
            return Err(ValidationError::MinSizeTooSmall);
        }
        if self.min_matrix_size > self.max_matrix_size {
            return Err(ValidationError::InvertedSizeBounds {
                min: self.min_matrix_size,
                max: self.max_matrix_size,
            });
        }
        if !self.random_index_fallback.is_finite() || self.random_index_fallback <= 0.0 {
            return Err(ValidationError::InvalidRandomIndexFallback);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reciprocal_precision: default_precision(),
            min_matrix_size: default_min_size(),
            max_matrix_size: default_max_size(),
            random_index_fallback: default_fallback(),
        }
    }
}

fn default_precision() -> u32 {
    DEFAULT_RECIPROCAL_PRECISION
}

fn default_min_size() -> usize {
    DEFAULT_MIN_MATRIX_SIZE
}

fn default_max_size() -> usize {
    DEFAULT_MAX_MATRIX_SIZE
}

fn default_fallback() -> f64 {
    DEFAULT_RANDOM_INDEX_FALLBACK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults_match_domain() {
        let config = EngineConfig::default();
        assert_eq!(config.settings(), AhpSettings::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_widened_size_cap() {
        let config = EngineConfig {
            max_matrix_size: 20,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert!(config.settings().allows_size(20));
    }

    #[test]
    fn test_rejects_excessive_precision() {
        let config = EngineConfig {
            reciprocal_precision: 11,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidPrecision { max: 10, actual: 11 })
        );
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let config = EngineConfig {
            min_matrix_size: 5,
            max_matrix_size: 4,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvertedSizeBounds { min: 5, max: 4 })
        );
    }

    #[test]
    fn test_rejects_zero_min_size() {
        let config = EngineConfig {
            min_matrix_size: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::MinSizeTooSmall));
    }

    #[test]
    fn test_rejects_bad_fallback() {
        for fallback in [0.0, -1.0, f64::NAN] {
            let config = EngineConfig {
                random_index_fallback: fallback,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidRandomIndexFallback));
        }
    }
}
