//! Two-biome height blend driven by a low-frequency mask.
//!
//! ```text
//! mask(wx, wz) = clamp((sample(((wx, wz) + offset) · freq) + 1) / 2)^sharpness
//!
//!   primary ─┬──────────────────────────────┐
//!            │                              ▼
//!            └─► × field_amplitude ─► flat ─► lerp(flat, primary, mask)
//! ```
//!
//! A high `sharpness` keeps most of the world flat and raises hills only where
//! the mask approaches 1.

use serde::{Deserialize, Serialize};

use crate::constants::{
  DEFAULT_BIOME_FIELD_AMPLITUDE, DEFAULT_BIOME_MASK_FREQUENCY, DEFAULT_BIOME_MASK_OFFSET,
  DEFAULT_BIOME_SHARPNESS,
};
use crate::error::{Result, TerrainError};
use crate::noise::{perlin, NoiseField};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiomeBlend {
  /// Mask sampling frequency in lattice cells per world unit.
  pub mask_frequency: f32,
  /// Height multiplier of the flat biome, in [0, 1].
  pub field_amplitude: f32,
  /// Exponent applied to the [0, 1] mask.
  pub sharpness: f32,
  /// World-space offset of the mask lattice.
  pub mask_offset: [f32; 2],
}

impl Default for BiomeBlend {
  fn default() -> Self {
    Self {
      mask_frequency: DEFAULT_BIOME_MASK_FREQUENCY,
      field_amplitude: DEFAULT_BIOME_FIELD_AMPLITUDE,
      sharpness: DEFAULT_BIOME_SHARPNESS,
      mask_offset: DEFAULT_BIOME_MASK_OFFSET,
    }
  }
}

impl BiomeBlend {
  pub fn with_mask_frequency(mut self, mask_frequency: f32) -> Self {
    self.mask_frequency = mask_frequency;
    self
  }

  pub fn with_field_amplitude(mut self, field_amplitude: f32) -> Self {
    self.field_amplitude = field_amplitude;
    self
  }

  pub fn with_sharpness(mut self, sharpness: f32) -> Self {
    self.sharpness = sharpness;
    self
  }

  pub fn with_mask_offset(mut self, mask_offset: [f32; 2]) -> Self {
    self.mask_offset = mask_offset;
    self
  }

  pub fn validate(&self) -> Result<()> {
    if !self.mask_frequency.is_finite() || self.mask_frequency <= 0.0 {
      return Err(TerrainError::invalid(
        "mask_frequency",
        format!("must be finite and > 0, got {}", self.mask_frequency),
      ));
    }
    if !(0.0..=1.0).contains(&self.field_amplitude) {
      return Err(TerrainError::invalid(
        "field_amplitude",
        format!("must be in [0, 1], got {}", self.field_amplitude),
      ));
    }
    if !self.sharpness.is_finite() || self.sharpness <= 0.0 {
      return Err(TerrainError::invalid(
        "sharpness",
        format!("must be finite and > 0, got {}", self.sharpness),
      ));
    }
    if !self.mask_offset.iter().all(|v| v.is_finite()) {
      return Err(TerrainError::invalid("mask_offset", "must be finite"));
    }
    Ok(())
  }

  /// Mask value at world position `(world_x, world_z)`, in [0, 1].
  #[inline]
  pub fn mask_value(&self, world_x: f32, world_z: f32) -> f32 {
    let raw = perlin::sample(
      (world_x + self.mask_offset[0]) * self.mask_frequency,
      (world_z + self.mask_offset[1]) * self.mask_frequency,
    );
    ((raw + 1.0) * 0.5).clamp(0.0, 1.0).powf(self.sharpness)
  }

  /// Mix a primary height between the flat and hill biome by `mask`.
  #[inline]
  pub fn blend_height(&self, primary: f32, mask: f32) -> f32 {
    let flat = primary * self.field_amplitude;
    flat + (primary - flat) * mask
  }

  /// Sample the mask over a grid whose cell `(x, z)` sits at
  /// `origin + (x, z) * spacing` in world space.
  pub fn sample_mask(
    &self,
    width: usize,
    height: usize,
    origin: [f32; 2],
    spacing: f32,
  ) -> Result<NoiseField> {
    self.validate()?;
    let mut mask = NoiseField::new(width, height)?;
    for z in 0..height {
      for x in 0..width {
        let wx = origin[0] + x as f32 * spacing;
        let wz = origin[1] + z as f32 * spacing;
        mask.set(x, z, self.mask_value(wx, wz));
      }
    }
    Ok(mask)
  }

  /// Blend `field` in place and return the mask used, for coloring.
  #[tracing::instrument(skip_all, name = "heightfield::biome_blend", fields(width = field.width(), height = field.height()))]
  pub fn apply(&self, field: &mut NoiseField, origin: [f32; 2], spacing: f32) -> Result<NoiseField> {
    let mask = self.sample_mask(field.width(), field.height(), origin, spacing)?;
    for (h, &m) in field.as_mut_slice().iter_mut().zip(mask.as_slice()) {
      *h = self.blend_height(*h, m);
    }
    Ok(mask)
  }
}

#[cfg(test)]
#[path = "biome_test.rs"]
mod biome_test;
