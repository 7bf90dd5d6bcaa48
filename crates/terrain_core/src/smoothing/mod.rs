//! Smoothing Filter: convolution blur applied to normalized noise fields.
//!
//! ```text
//! Binomial 3×3 (÷16)        Gaussian k×k (Σ = 1)
//! ┌───┬───┬───┐             w(i, j) = exp(-(i² + j²) / 2σ²)
//! │ 1 │ 2 │ 1 │
//! ├───┼───┼───┤             i, j ∈ [-k/2, k/2]
//! │ 2 │ 4 │ 2 │
//! ├───┼───┼───┤
//! │ 1 │ 2 │ 1 │
//! └───┴───┴───┘
//! ```
//!
//! Cells within `k/2` of any edge are copied through unfiltered, so borders
//! stay bit-identical to the input. Fields narrower than the kernel come back
//! unchanged.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TerrainError};
use crate::noise::NoiseField;

/// Binomial 3×3 weights (sum 16).
pub const BINOMIAL_3X3: [f32; 9] = [1.0, 2.0, 1.0, 2.0, 4.0, 2.0, 1.0, 2.0, 1.0];

/// Blur kernel selection.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SmoothingKernel {
  /// Fixed `{1,2,1; 2,4,2; 1,2,1} / 16` kernel.
  Binomial3x3,

  /// Normalized Gaussian of odd `kernel_size` and standard deviation `sigma`.
  Gaussian { kernel_size: usize, sigma: f32 },
}

impl Default for SmoothingKernel {
  fn default() -> Self {
    SmoothingKernel::Binomial3x3
  }
}

impl SmoothingKernel {
  /// Side length of the kernel.
  pub fn size(&self) -> usize {
    match *self {
      SmoothingKernel::Binomial3x3 => 3,
      SmoothingKernel::Gaussian { kernel_size, .. } => kernel_size,
    }
  }

  /// Width of the unfiltered border.
  pub fn radius(&self) -> usize {
    self.size() / 2
  }

  pub fn validate(&self) -> Result<()> {
    match *self {
      SmoothingKernel::Binomial3x3 => Ok(()),
      SmoothingKernel::Gaussian { kernel_size, sigma } => {
        validate_gaussian(kernel_size, sigma)
      }
    }
  }

  /// Row-major kernel weights, normalized to sum 1.
  pub fn weights(&self) -> Result<Vec<f32>> {
    match *self {
      SmoothingKernel::Binomial3x3 => Ok(BINOMIAL_3X3.iter().map(|w| w / 16.0).collect()),
      SmoothingKernel::Gaussian { kernel_size, sigma } => gaussian_kernel(kernel_size, sigma),
    }
  }

  /// Blur `field`, returning a new field.
  pub fn apply(&self, field: &NoiseField) -> Result<NoiseField> {
    let weights = self.weights()?;
    Ok(convolve(field, &weights, self.size()))
  }
}

fn validate_gaussian(kernel_size: usize, sigma: f32) -> Result<()> {
  if kernel_size == 0 || kernel_size % 2 == 0 {
    return Err(TerrainError::invalid(
      "kernel_size",
      format!("must be odd and >= 1, got {}", kernel_size),
    ));
  }
  if !sigma.is_finite() || sigma <= 0.0 {
    return Err(TerrainError::invalid(
      "sigma",
      format!("must be finite and > 0, got {}", sigma),
    ));
  }
  Ok(())
}

/// Build a normalized `kernel_size × kernel_size` Gaussian kernel.
pub fn gaussian_kernel(kernel_size: usize, sigma: f32) -> Result<Vec<f32>> {
  validate_gaussian(kernel_size, sigma)?;

  let radius = (kernel_size / 2) as i32;
  let two_sigma_sq = 2.0 * sigma * sigma;
  let mut weights = Vec::with_capacity(kernel_size * kernel_size);
  for j in -radius..=radius {
    for i in -radius..=radius {
      let d2 = (i * i + j * j) as f32;
      weights.push((-d2 / two_sigma_sq).exp());
    }
  }

  let sum: f32 = weights.iter().sum();
  for w in &mut weights {
    *w /= sum;
  }
  Ok(weights)
}

/// Blur with the fixed binomial 3×3 kernel.
pub fn blur(field: &NoiseField) -> NoiseField {
  let weights: Vec<f32> = BINOMIAL_3X3.iter().map(|w| w / 16.0).collect();
  convolve(field, &weights, 3)
}

/// Blur with a Gaussian kernel of odd `kernel_size` and `sigma`.
pub fn gaussian_blur(field: &NoiseField, kernel_size: usize, sigma: f32) -> Result<NoiseField> {
  SmoothingKernel::Gaussian { kernel_size, sigma }.apply(field)
}

fn convolve(field: &NoiseField, weights: &[f32], size: usize) -> NoiseField {
  debug_assert_eq!(weights.len(), size * size);

  let mut out = field.clone();
  let (width, height) = (field.width(), field.height());
  if width < size || height < size {
    return out;
  }

  let radius = size / 2;
  for y in radius..height - radius {
    for x in radius..width - radius {
      let mut acc = 0.0;
      for ky in 0..size {
        let row = y + ky - radius;
        for kx in 0..size {
          acc += weights[ky * size + kx] * field.get(x + kx - radius, row);
        }
      }
      out.set(x, y, acc);
    }
  }

  out
}
