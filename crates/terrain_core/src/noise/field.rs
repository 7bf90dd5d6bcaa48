//! Dense row-major noise fields and grid generation.
//!
//! ```text
//! generate_grid(width, height, params)
//!   │
//!   ├─ pass 1: accumulate   field[y*width + x] = fractal_sample(x/width, y/height)
//!   │                       (tracks min / max of the accumulated values)
//!   │
//!   └─ pass 2: normalize    v' = (v - min) / (max - min)   → exactly [0, 1]
//!                           min == max → constant 0 field
//! ```
//!
//! The analytic `(v + 1) / 2` remap alone does not reach the ends of [0, 1]
//! once several octaves are summed, which is why the second pass exists.

use tracing::{debug, warn};

use super::fractal::{fractal_sample, FractalParameters};
use crate::constants::MAX_GRID_SAMPLES;
use crate::error::{Result, TerrainError};

/// Row-major grid of `f32` samples. `data.len() == width * height` always holds.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseField {
  width: usize,
  height: usize,
  data: Vec<f32>,
}

/// Validate grid dimensions for fields that will be meshed with `u32` indices.
pub fn validate_dimensions(width: usize, height: usize) -> Result<usize> {
  if width == 0 {
    return Err(TerrainError::invalid("width", "must be at least 1"));
  }
  if height == 0 {
    return Err(TerrainError::invalid("height", "must be at least 1"));
  }
  match width.checked_mul(height) {
    Some(len) if len <= MAX_GRID_SAMPLES => Ok(len),
    _ => Err(TerrainError::invalid(
      "width",
      format!("{}x{} grid exceeds u32 vertex indexing", width, height),
    )),
  }
}

impl NoiseField {
  /// Zero-filled field.
  pub fn new(width: usize, height: usize) -> Result<Self> {
    Self::filled(width, height, 0.0)
  }

  /// Field with every sample set to `value`.
  pub fn filled(width: usize, height: usize, value: f32) -> Result<Self> {
    let len = validate_dimensions(width, height)?;
    Ok(Self {
      width,
      height,
      data: vec![value; len],
    })
  }

  /// Wrap an existing row-major buffer.
  pub fn from_vec(width: usize, height: usize, data: Vec<f32>) -> Result<Self> {
    let len = validate_dimensions(width, height)?;
    if data.len() != len {
      return Err(TerrainError::invalid(
        "data",
        format!(
          "buffer length {} does not match {}x{}",
          data.len(),
          width,
          height
        ),
      ));
    }
    Ok(Self {
      width,
      height,
      data,
    })
  }

  /// Generate a normalized fractal noise grid. See [`generate_grid`].
  pub fn generate(
    width: usize,
    height: usize,
    scale: f32,
    octaves: u32,
    persistence: f32,
  ) -> Result<Self> {
    generate_grid(width, height, scale, octaves, persistence)
  }

  #[inline]
  pub fn width(&self) -> usize {
    self.width
  }

  #[inline]
  pub fn height(&self) -> usize {
    self.height
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.data.len()
  }

  /// Always false; fields have at least one sample.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  /// Linear index of `(x, y)`: `y * width + x`.
  #[inline(always)]
  pub fn index(&self, x: usize, y: usize) -> usize {
    debug_assert!(x < self.width && y < self.height);
    y * self.width + x
  }

  #[inline]
  pub fn get(&self, x: usize, y: usize) -> f32 {
    self.data[self.index(x, y)]
  }

  #[inline]
  pub fn set(&mut self, x: usize, y: usize, value: f32) {
    let idx = self.index(x, y);
    self.data[idx] = value;
  }

  pub fn as_slice(&self) -> &[f32] {
    &self.data
  }

  pub fn as_mut_slice(&mut self) -> &mut [f32] {
    &mut self.data
  }

  pub fn into_vec(self) -> Vec<f32> {
    self.data
  }

  /// Smallest and largest sample.
  pub fn min_max(&self) -> (f32, f32) {
    self
      .data
      .iter()
      .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &v| {
        (min.min(v), max.max(v))
      })
  }

  /// Remap samples linearly so the minimum becomes 0 and the maximum 1.
  ///
  /// Returns [`TerrainError::DegenerateField`] and leaves the field untouched
  /// when all samples are equal (or the range is not finite).
  pub fn normalize(&mut self) -> Result<()> {
    let (min, max) = self.min_max();
    let range = max - min;
    if !range.is_finite() || range <= 0.0 {
      return Err(TerrainError::DegenerateField {
        samples: self.data.len(),
        value: min,
      });
    }
    for v in &mut self.data {
      *v = (*v - min) / range;
    }
    Ok(())
  }
}

/// Generate a `width × height` fractal noise grid normalized to [0, 1].
///
/// Cell `(x, y)` is sampled at `(x / width * scale, y / height * scale)`.
/// A degenerate grid (every sample equal) becomes a constant 0 field.
pub fn generate_grid(
  width: usize,
  height: usize,
  scale: f32,
  octaves: u32,
  persistence: f32,
) -> Result<NoiseField> {
  let params = FractalParameters::new(scale, octaves, persistence)?;
  generate_grid_with(width, height, &params)
}

/// [`generate_grid`] taking prebuilt parameters.
#[tracing::instrument(skip_all, name = "noise::generate_grid", fields(width = width, height = height))]
pub fn generate_grid_with(
  width: usize,
  height: usize,
  params: &FractalParameters,
) -> Result<NoiseField> {
  params.validate()?;
  let len = validate_dimensions(width, height)?;

  let mut data = Vec::with_capacity(len);
  for y in 0..height {
    for x in 0..width {
      let nx = x as f32 / width as f32;
      let ny = y as f32 / height as f32;
      data.push(fractal_sample(nx, ny, params));
    }
  }

  let mut field = NoiseField {
    width,
    height,
    data,
  };

  match field.normalize() {
    Ok(()) => debug!(
      octaves = params.octaves,
      scale = params.scale,
      "generated normalized noise grid"
    ),
    Err(TerrainError::DegenerateField { samples, value }) => {
      warn!(
        samples = samples,
        value = value,
        "noise grid is constant, emitting flat field"
      );
      field.data.fill(0.0);
    }
    Err(err) => return Err(err),
  }

  Ok(field)
}
