//! Multi-octave fractal summation of Perlin noise.

use serde::{Deserialize, Serialize};

use super::perlin;
use crate::constants::{
  DEFAULT_GRID_NOISE_SCALE, DEFAULT_OCTAVES, DEFAULT_PERSISTENCE, MAX_OCTAVES,
};
use crate::error::{Result, TerrainError};

/// Parameters for fractal noise summation.
///
/// Octave `i` is sampled at frequency `2^i` with amplitude `persistence^i`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalParameters {
  /// Coordinate multiplier applied before the first octave. Must be > 0.
  pub scale: f32,
  /// Number of octaves summed, in `1..=MAX_OCTAVES`.
  pub octaves: u32,
  /// Amplitude decay per octave, in (0, 1].
  pub persistence: f32,
}

impl Default for FractalParameters {
  fn default() -> Self {
    Self {
      scale: DEFAULT_GRID_NOISE_SCALE,
      octaves: DEFAULT_OCTAVES,
      persistence: DEFAULT_PERSISTENCE,
    }
  }
}

impl FractalParameters {
  /// Create validated parameters.
  pub fn new(scale: f32, octaves: u32, persistence: f32) -> Result<Self> {
    let params = Self {
      scale,
      octaves,
      persistence,
    };
    params.validate()?;
    Ok(params)
  }

  pub fn with_scale(mut self, scale: f32) -> Self {
    self.scale = scale;
    self
  }

  pub fn with_octaves(mut self, octaves: u32) -> Self {
    self.octaves = octaves;
    self
  }

  pub fn with_persistence(mut self, persistence: f32) -> Self {
    self.persistence = persistence;
    self
  }

  /// Reject out-of-domain values instead of clamping them.
  pub fn validate(&self) -> Result<()> {
    if !self.scale.is_finite() || self.scale <= 0.0 {
      return Err(TerrainError::invalid(
        "scale",
        format!("must be finite and > 0, got {}", self.scale),
      ));
    }
    if self.octaves == 0 {
      return Err(TerrainError::invalid("octaves", "must be at least 1"));
    }
    if self.octaves > MAX_OCTAVES {
      return Err(TerrainError::invalid(
        "octaves",
        format!("must be at most {}, got {}", MAX_OCTAVES, self.octaves),
      ));
    }
    if !self.max_frequency().is_finite() {
      return Err(TerrainError::invalid(
        "octaves",
        format!(
          "{} octaves at scale {} overflow the sample coordinates",
          self.octaves, self.scale
        ),
      ));
    }
    if !self.persistence.is_finite() || self.persistence <= 0.0 || self.persistence > 1.0 {
      return Err(TerrainError::invalid(
        "persistence",
        format!("must be in (0, 1], got {}", self.persistence),
      ));
    }
    Ok(())
  }

  /// Coordinate multiplier of the last octave, `scale * 2^(octaves - 1)`.
  pub fn max_frequency(&self) -> f32 {
    self.scale * 2f32.powi(self.octaves.saturating_sub(1) as i32)
  }

  /// Sum of all octave amplitudes (the analytic bound of the raw sum).
  pub fn amplitude_sum(&self) -> f32 {
    let mut amplitude = 1.0;
    let mut sum = 0.0;
    for _ in 0..self.octaves {
      sum += amplitude;
      amplitude *= self.persistence;
    }
    sum
  }
}

/// Amplitude-weighted octave sum at `(x, y)`, divided by the amplitude sum.
///
/// Result is roughly in [-1, 1]. Zero octaves yield 0.
pub fn fractal_sum(x: f32, y: f32, octaves: u32, persistence: f32) -> f32 {
  let mut total = 0.0;
  let mut amplitude = 1.0;
  let mut frequency = 1.0;
  let mut max_amplitude = 0.0;

  for _ in 0..octaves {
    total += perlin::sample(x * frequency, y * frequency) * amplitude;
    max_amplitude += amplitude;
    amplitude *= persistence;
    frequency *= 2.0;
  }

  if max_amplitude > 0.0 {
    total / max_amplitude
  } else {
    0.0
  }
}

/// Fractal noise at world position `(x, z)` remapped to [0, 1] via `(v + 1) / 2`.
///
/// Coordinates are multiplied by `params.scale` before the first octave.
/// Callers are expected to have validated `params`.
#[inline]
pub fn fractal_sample(x: f32, z: f32, params: &FractalParameters) -> f32 {
  let v = fractal_sum(
    x * params.scale,
    z * params.scale,
    params.octaves,
    params.persistence,
  );
  (v + 1.0) * 0.5
}
