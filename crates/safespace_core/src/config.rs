//! Board configuration.
//!
//! # Responsibility
//! - Hold canvas geometry and clustering thresholds in one value.
//! - Parse host-supplied JSON and reject values that would break clamping.
//!
//! # Invariants
//! - A validated config has finite, positive canvas and footprint sizes.
//! - The distance threshold and boundary side are finite and positive.
//! - At least one shared token is required for tiles to cluster.

use crate::model::geometry::{BoardGeometry, CanvasBounds, TileFootprint};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default distance below which two tiles are considered near.
pub const DEFAULT_DISTANCE_THRESHOLD: f64 = 200.0;
/// Default minimum number of shared tokens (the heuristic's "more than two").
pub const DEFAULT_MIN_COMMON_TOKENS: usize = 3;
/// Default side length of the square cluster overlay.
pub const DEFAULT_BOUNDARY_SIDE: f64 = 300.0;

/// Clustering heuristic thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClusterConfig {
    /// Strict upper bound on seed-to-candidate distance.
    pub distance_threshold: f64,
    /// Inclusive lower bound on shared token count.
    pub min_common_tokens: usize,
    pub boundary_side: f64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            distance_threshold: DEFAULT_DISTANCE_THRESHOLD,
            min_common_tokens: DEFAULT_MIN_COMMON_TOKENS,
            boundary_side: DEFAULT_BOUNDARY_SIDE,
        }
    }
}

/// Full board configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    pub canvas: CanvasBounds,
    pub footprint: TileFootprint,
    pub cluster: ClusterConfig,
}

impl BoardConfig {
    /// Parses a JSON document and validates it. Missing fields take defaults.
    ///
    /// # Errors
    /// - `ConfigError::Parse` for malformed JSON.
    /// - Any error returned by [`BoardConfig::validate`].
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry::new(self.canvas, self.footprint)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_canvas(self.canvas)?;
        if !is_positive(self.footprint.width) || !is_positive(self.footprint.height) {
            return Err(ConfigError::InvalidFootprint {
                width: self.footprint.width,
                height: self.footprint.height,
            });
        }
        if !is_positive(self.cluster.distance_threshold) {
            return Err(ConfigError::InvalidDistanceThreshold(
                self.cluster.distance_threshold,
            ));
        }
        if self.cluster.min_common_tokens == 0 {
            return Err(ConfigError::InvalidMinCommonTokens);
        }
        if !is_positive(self.cluster.boundary_side) {
            return Err(ConfigError::InvalidBoundarySide(self.cluster.boundary_side));
        }
        Ok(())
    }
}

/// Rejects canvas sizes that are zero, negative or non-finite.
pub fn validate_canvas(canvas: CanvasBounds) -> Result<(), ConfigError> {
    if is_positive(canvas.width) && is_positive(canvas.height) {
        Ok(())
    } else {
        Err(ConfigError::InvalidCanvas {
            width: canvas.width,
            height: canvas.height,
        })
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Configuration parse/validation errors.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    InvalidCanvas { width: f64, height: f64 },
    InvalidFootprint { width: f64, height: f64 },
    InvalidDistanceThreshold(f64),
    /// Zero would let any two nearby tiles cluster without shared words.
    InvalidMinCommonTokens,
    InvalidBoundarySide(f64),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid board config: {err}"),
            Self::InvalidCanvas { width, height } => {
                write!(f, "canvas must be finite and positive, got {width}x{height}")
            }
            Self::InvalidFootprint { width, height } => {
                write!(f, "tile footprint must be finite and positive, got {width}x{height}")
            }
            Self::InvalidDistanceThreshold(value) => {
                write!(f, "cluster distance threshold must be positive, got {value}")
            }
            Self::InvalidMinCommonTokens => {
                write!(f, "cluster min common tokens must be at least 1, got 0")
            }
            Self::InvalidBoundarySide(value) => {
                write!(f, "cluster boundary side must be positive, got {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardConfig, ConfigError};

    #[test]
    fn default_config_is_valid() {
        BoardConfig::default()
            .validate()
            .expect("default config should validate");
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = BoardConfig::from_json_str(r#"{"canvas":{"width":1000,"height":700}}"#)
            .expect("partial config should parse");
        assert_eq!(config.canvas.width, 1000.0);
        assert_eq!(config.footprint.width, 240.0);
        assert_eq!(config.cluster.min_common_tokens, 3);
    }

    #[test]
    fn rejects_zero_canvas() {
        let err = BoardConfig::from_json_str(r#"{"canvas":{"width":0,"height":700}}"#)
            .expect_err("zero width must fail");
        assert!(matches!(err, ConfigError::InvalidCanvas { .. }));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = BoardConfig::from_json_str("{").expect_err("malformed json must fail");
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid board config"));
    }

    #[test]
    fn rejects_non_positive_distance_threshold() {
        let mut config = BoardConfig::default();
        config.cluster.distance_threshold = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDistanceThreshold(_))
        ));
    }

    #[test]
    fn rejects_zero_min_common_tokens() {
        let mut config = BoardConfig::default();
        config.cluster.min_common_tokens = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMinCommonTokens)
        ));

        let err = BoardConfig::from_json_str(r#"{"cluster":{"minCommonTokens":0}}"#)
            .expect_err("zero token threshold must fail");
        assert!(matches!(err, ConfigError::InvalidMinCommonTokens));
    }

    #[test]
    fn rejects_negative_footprint() {
        let err = BoardConfig::from_json_str(r#"{"footprint":{"width":-240,"height":120}}"#)
            .expect_err("negative footprint must fail");
        assert!(matches!(err, ConfigError::InvalidFootprint { .. }));
    }
}
