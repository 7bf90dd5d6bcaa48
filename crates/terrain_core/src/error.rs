//! Error taxonomy for terrain generation.
//!
//! Generation is pure computation, so every failure is local and reported
//! synchronously. Nothing is retried and nothing is clamped into range.

use thiserror::Error;

/// Errors produced by noise generation, smoothing and mesh building.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerrainError {
  /// A parameter is outside its valid domain (non-positive scale, zero
  /// octaves, zero-sized grid, even kernel size, ...).
  #[error("invalid parameter `{name}`: {reason}")]
  InvalidParameter { name: &'static str, reason: String },

  /// Every sample in a field has the same value, so min-max normalization
  /// has a zero range.
  #[error("degenerate field: all {samples} samples equal {value}")]
  DegenerateField { samples: usize, value: f32 },
}

impl TerrainError {
  pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
    TerrainError::InvalidParameter {
      name,
      reason: reason.into(),
    }
  }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TerrainError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn invalid_parameter_message_names_the_parameter() {
    let err = TerrainError::invalid("octaves", "must be at least 1");
    assert_eq!(
      err.to_string(),
      "invalid parameter `octaves`: must be at least 1"
    );
  }

  #[test]
  fn degenerate_field_message_reports_value() {
    let err = TerrainError::DegenerateField {
      samples: 16,
      value: 0.5,
    };
    assert_eq!(err.to_string(), "degenerate field: all 16 samples equal 0.5");
  }
}
