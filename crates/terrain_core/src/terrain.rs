//! Single-grid terrain: one noise field meshed as one heightfield.
//!
//! ```text
//! generate_grid ─► [smoothing] ─► [biome blend] ─► heightfield::build
//!   (normalized)     (blur)         (mask + mix)     (vertices, indices)
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use web_time::Instant;

use crate::constants::{DEFAULT_TERRAIN_DISPLACEMENT, DEFAULT_TERRAIN_SIZE};
use crate::error::{Result, TerrainError};
use crate::heightfield::{self, BiomeBlend, BiomePalette, HeightfieldConfig};
use crate::metrics::GenerationStats;
use crate::noise::{generate_grid_with, FractalParameters, NoiseField};
use crate::presentation::{MeshData, MeshKey, RenderBackend};
use crate::smoothing::SmoothingKernel;
use crate::types::Mesh;

/// Settings for the single-grid terrain.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
  /// Samples along x.
  pub width: usize,
  /// Samples along z.
  pub height: usize,
  /// World units between samples.
  pub horizontal_scale: f32,
  pub displacement: f32,
  pub noise: FractalParameters,
  pub smoothing: Option<SmoothingKernel>,
  pub biome: Option<BiomeBlend>,
  pub palette: BiomePalette,
}

impl Default for TerrainConfig {
  fn default() -> Self {
    Self {
      width: DEFAULT_TERRAIN_SIZE,
      height: DEFAULT_TERRAIN_SIZE,
      horizontal_scale: 1.0,
      displacement: DEFAULT_TERRAIN_DISPLACEMENT,
      noise: FractalParameters::default(),
      smoothing: None,
      biome: None,
      palette: BiomePalette::default(),
    }
  }
}

impl TerrainConfig {
  pub fn new(width: usize, height: usize, horizontal_scale: f32, displacement: f32) -> Self {
    Self {
      width,
      height,
      horizontal_scale,
      displacement,
      ..Default::default()
    }
  }

  pub fn with_noise(mut self, noise: FractalParameters) -> Self {
    self.noise = noise;
    self
  }

  pub fn with_smoothing(mut self, kernel: SmoothingKernel) -> Self {
    self.smoothing = Some(kernel);
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

  pub fn mesh_config(&self) -> HeightfieldConfig {
    HeightfieldConfig::new(self.horizontal_scale, self.displacement).with_palette(self.palette)
  }

  pub fn validate(&self) -> Result<()> {
    crate::noise::validate_dimensions(self.width, self.height)?;
    if !self.horizontal_scale.is_finite() || self.horizontal_scale <= 0.0 {
      return Err(TerrainError::invalid(
        "horizontal_scale",
        format!("must be finite and > 0, got {}", self.horizontal_scale),
      ));
    }
    if !self.displacement.is_finite() {
      return Err(TerrainError::invalid(
        "displacement",
        format!("must be finite, got {}", self.displacement),
      ));
    }
    self.noise.validate()?;
    if let Some(kernel) = &self.smoothing {
      kernel.validate()?;
    }
    if let Some(biome) = &self.biome {
      biome.validate()?;
    }
    Ok(())
  }
}

/// Generated single-grid terrain and its upload state.
#[derive(Debug)]
pub struct Terrain {
  config: TerrainConfig,
  field: NoiseField,
  mask: Option<NoiseField>,
  mesh: Mesh,
  stats: GenerationStats,
  uploaded: bool,
}

impl Terrain {
  #[tracing::instrument(skip_all, name = "terrain::generate", fields(width = config.width, height = config.height))]
  pub fn generate(config: TerrainConfig) -> Result<Self> {
    config.validate()?;
    let start = Instant::now();

    let mut field = generate_grid_with(config.width, config.height, &config.noise)?;

    if let Some(kernel) = &config.smoothing {
      field = kernel.apply(&field)?;
    }

    let mesh_config = config.mesh_config();
    let (mesh, mask) = match &config.biome {
      Some(biome) => {
        let mask = biome.apply(&mut field, [0.0, 0.0], config.horizontal_scale)?;
        let mesh = heightfield::build_blended(&field, &mask, &mesh_config)?;
        (mesh, Some(mask))
      }
      None => (heightfield::build_with(&field, &mesh_config), None),
    };

    let mut stats = GenerationStats::default();
    stats.record(&mesh);
    stats.finish(start);
    debug!(
      vertices = stats.vertices,
      triangles = stats.triangles(),
      elapsed_us = stats.elapsed_us,
      "generated terrain"
    );

    Ok(Self {
      config,
      field,
      mask,
      mesh,
      stats,
      uploaded: false,
    })
  }

  pub fn config(&self) -> &TerrainConfig {
    &self.config
  }

  /// Final heights (after smoothing and blending).
  pub fn field(&self) -> &NoiseField {
    &self.field
  }

  /// Biome mask, when blending is enabled.
  pub fn mask(&self) -> Option<&NoiseField> {
    self.mask.as_ref()
  }

  pub fn mesh(&self) -> &Mesh {
    &self.mesh
  }

  pub fn stats(&self) -> &GenerationStats {
    &self.stats
  }

  pub fn is_uploaded(&self) -> bool {
    self.uploaded
  }

  /// Hand the mesh and height texture to `backend`. A second call is a no-op.
  pub fn upload<B: RenderBackend>(&mut self, backend: &mut B) -> std::result::Result<(), B::Error> {
    if self.uploaded {
      return Ok(());
    }
    backend.upload(
      MeshKey::Terrain,
      MeshData::from_mesh(&self.mesh),
      Some(self.field.texture()),
    )?;
    self.uploaded = true;
    Ok(())
  }

  /// Release the uploaded mesh. Returns whether anything was released.
  pub fn dispose<B: RenderBackend>(&mut self, backend: &mut B) -> bool {
    if !self.uploaded {
      return false;
    }
    backend.release(MeshKey::Terrain);
    self.uploaded = false;
    true
  }
}

impl Drop for Terrain {
  fn drop(&mut self) {
    if self.uploaded {
      warn!("terrain dropped with an uploaded mesh");
    }
  }
}

#[cfg(test)]
#[path = "terrain_test.rs"]
mod terrain_test;
