//! Chunk grid configuration.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{
  DEFAULT_CHUNK_DISPLACEMENT, DEFAULT_CHUNK_NOISE_SCALE, DEFAULT_CHUNK_SIZE, DEFAULT_OCTAVES,
  DEFAULT_PERSISTENCE, DEFAULT_RENDER_DISTANCE, MAX_CHUNK_GRID_EXTENT, MAX_GRID_SAMPLES,
};
use crate::error::{Result, TerrainError};
use crate::heightfield::{BiomeBlend, BiomePalette};
use crate::noise::FractalParameters;

/// Integer chunk coordinate on the XZ plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoord {
  pub x: i32,
  pub z: i32,
}

impl ChunkCoord {
  pub const fn new(x: i32, z: i32) -> Self {
    Self { x, z }
  }

  /// World position of the chunk's minimum corner.
  #[inline]
  pub fn world_origin(&self, chunk_size: u32) -> Vec3 {
    let size = chunk_size as f32;
    Vec3::new(self.x as f32 * size, 0.0, self.z as f32 * size)
  }
}

/// Settings for chunked terrain generation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkConfig {
  /// Chunk side length in world units. Each chunk has `chunk_size + 1`
  /// vertices per side.
  pub chunk_size: u32,
  /// Activation radius, and the half-extent of the chunk grid.
  pub render_distance: f32,
  /// Height multiplier.
  pub displacement: f32,
  /// Noise frequency in lattice cells per world unit.
  pub frequency: f32,
  pub octaves: u32,
  pub persistence: f32,
  pub biome: Option<BiomeBlend>,
  pub palette: BiomePalette,
}

impl Default for ChunkConfig {
  fn default() -> Self {
    Self {
      chunk_size: DEFAULT_CHUNK_SIZE,
      render_distance: DEFAULT_RENDER_DISTANCE,
      displacement: DEFAULT_CHUNK_DISPLACEMENT,
      frequency: DEFAULT_CHUNK_NOISE_SCALE,
      octaves: DEFAULT_OCTAVES,
      persistence: DEFAULT_PERSISTENCE,
      biome: None,
      palette: BiomePalette::default(),
    }
  }
}

impl ChunkConfig {
  pub fn new(
    chunk_size: u32,
    render_distance: f32,
    displacement: f32,
    octaves: u32,
    persistence: f32,
  ) -> Self {
    Self {
      chunk_size,
      render_distance,
      displacement,
      octaves,
      persistence,
      ..Default::default()
    }
  }

  pub fn with_frequency(mut self, frequency: f32) -> Self {
    self.frequency = frequency;
    self
  }

  pub fn with_biome(mut self, biome: BiomeBlend) -> Self {
    self.biome = Some(biome);
    self
  }

  pub fn with_palette(mut self, palette: BiomePalette) -> Self {
    self.palette = palette;
    self
  }

  /// World-space fractal parameters (`scale` is the frequency).
  pub fn noise(&self) -> FractalParameters {
    FractalParameters {
      scale: self.frequency,
      octaves: self.octaves,
      persistence: self.persistence,
    }
  }

  /// Vertices per chunk side.
  #[inline]
  pub fn samples_per_side(&self) -> usize {
    self.chunk_size as usize + 1
  }

  pub fn validate(&self) -> Result<()> {
    if self.chunk_size == 0 {
      return Err(TerrainError::invalid("chunk_size", "must be at least 1"));
    }
    let side = self.samples_per_side();
    if side.checked_mul(side).map_or(true, |n| n > MAX_GRID_SAMPLES) {
      return Err(TerrainError::invalid(
        "chunk_size",
        format!("{} exceeds u32 vertex indexing", self.chunk_size),
      ));
    }
    if !self.render_distance.is_finite() || self.render_distance <= 0.0 {
      return Err(TerrainError::invalid(
        "render_distance",
        format!("must be finite and > 0, got {}", self.render_distance),
      ));
    }
    if self.grid_extent() > MAX_CHUNK_GRID_EXTENT {
      return Err(TerrainError::invalid(
        "render_distance",
        format!(
          "{} spans more than {} chunks of size {} each way",
          self.render_distance, MAX_CHUNK_GRID_EXTENT, self.chunk_size
        ),
      ));
    }
    if !self.displacement.is_finite() {
      return Err(TerrainError::invalid(
        "displacement",
        format!("must be finite, got {}", self.displacement),
      ));
    }
    self.noise().validate()?;
    if let Some(biome) = &self.biome {
      biome.validate()?;
    }
    Ok(())
  }

  /// Half-extent `n` of the chunk grid; coordinates span `[-n, n)`.
  #[inline]
  pub fn grid_extent(&self) -> i32 {
    (self.render_distance / self.chunk_size as f32) as i32
  }

  /// Every chunk coordinate of the grid, x-major.
  pub fn coords(&self) -> impl Iterator<Item = ChunkCoord> {
    let n = self.grid_extent();
    (-n..n).flat_map(move |x| (-n..n).map(move |z| ChunkCoord::new(x, z)))
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
