//! Ownership, activation and upload bookkeeping for the chunk grid.

use glam::Vec3;
use tracing::{debug, warn};
use web_time::Instant;

use super::{Chunk, ChunkConfig, ChunkCoord};
use crate::error::Result;
use crate::metrics::GenerationStats;
use crate::presentation::{MeshData, MeshKey, RenderBackend};

/// Owns every chunk for its whole lifetime.
///
/// Chunks are created once by [`ChunkCoordinator::generate`]; afterwards only
/// their activation flag and upload bookkeeping change.
#[derive(Debug)]
pub struct ChunkCoordinator {
  config: ChunkConfig,
  chunks: Vec<Chunk>,
  stats: GenerationStats,
}

impl ChunkCoordinator {
  /// Generate the full chunk grid.
  pub fn generate(
    chunk_size: u32,
    render_distance: f32,
    displacement: f32,
    octaves: u32,
    persistence: f32,
  ) -> Result<Self> {
    Self::from_config(ChunkConfig::new(
      chunk_size,
      render_distance,
      displacement,
      octaves,
      persistence,
    ))
  }

  #[tracing::instrument(skip_all, name = "chunk::generate", fields(chunk_size = config.chunk_size, render_distance = config.render_distance))]
  pub fn from_config(config: ChunkConfig) -> Result<Self> {
    config.validate()?;

    let start = Instant::now();
    let mut stats = GenerationStats::default();
    let mut chunks = Vec::new();
    for coord in config.coords() {
      let chunk = Chunk::generate(coord, &config)?;
      stats.record(&chunk.mesh);
      chunks.push(chunk);
    }
    stats.finish(start);

    if chunks.is_empty() {
      warn!(
        chunk_size = config.chunk_size,
        render_distance = config.render_distance,
        "render distance is smaller than one chunk, grid is empty"
      );
    }
    debug!(
      chunks = chunks.len(),
      vertices = stats.vertices,
      elapsed_us = stats.elapsed_us,
      "generated chunk grid"
    );

    Ok(Self {
      config,
      chunks,
      stats,
    })
  }

  pub fn config(&self) -> &ChunkConfig {
    &self.config
  }

  pub fn stats(&self) -> &GenerationStats {
    &self.stats
  }

  pub fn chunks(&self) -> &[Chunk] {
    &self.chunks
  }

  pub fn len(&self) -> usize {
    self.chunks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.chunks.is_empty()
  }

  pub fn get(&self, coord: ChunkCoord) -> Option<&Chunk> {
    self.chunks.iter().find(|c| c.coord == coord)
  }

  /// Set `is_active` on every chunk by distance from `camera_position` to the
  /// chunk center. Returns the number of active chunks.
  pub fn update_activation(&mut self, camera_position: Vec3) -> usize {
    let render_distance = self.config.render_distance;
    let mut active = 0;
    for chunk in &mut self.chunks {
      chunk.is_active = chunk.distance_to(camera_position) < render_distance;
      active += chunk.is_active as usize;
    }
    active
  }

  /// Chunks to draw this frame.
  pub fn active_chunks(&self) -> impl Iterator<Item = &Chunk> {
    self.chunks.iter().filter(|c| c.is_active)
  }

  pub fn active_count(&self) -> usize {
    self.active_chunks().count()
  }

  pub fn uploaded_count(&self) -> usize {
    self.chunks.iter().filter(|c| c.uploaded).count()
  }

  /// Upload every chunk not yet live. Returns the number uploaded.
  pub fn upload_all<B: RenderBackend>(
    &mut self,
    backend: &mut B,
  ) -> std::result::Result<usize, B::Error> {
    self.upload_where(backend, |_| true)
  }

  /// Upload active chunks not yet live. Returns the number uploaded.
  pub fn upload_active<B: RenderBackend>(
    &mut self,
    backend: &mut B,
  ) -> std::result::Result<usize, B::Error> {
    self.upload_where(backend, |c| c.is_active)
  }

  fn upload_where<B: RenderBackend>(
    &mut self,
    backend: &mut B,
    include: impl Fn(&Chunk) -> bool,
  ) -> std::result::Result<usize, B::Error> {
    let mut uploaded = 0;
    for chunk in self.chunks.iter_mut().filter(|c| !c.uploaded) {
      if !include(chunk) {
        continue;
      }
      backend.upload(
        MeshKey::Chunk(chunk.coord),
        MeshData::from_mesh(&chunk.mesh),
        Some(chunk.field.texture()),
      )?;
      chunk.uploaded = true;
      uploaded += 1;
    }
    debug!(uploaded = uploaded, "uploaded chunks");
    Ok(uploaded)
  }

  /// Release every uploaded chunk. Returns the number released.
  pub fn dispose<B: RenderBackend>(&mut self, backend: &mut B) -> usize {
    let mut released = 0;
    for chunk in self.chunks.iter_mut().filter(|c| c.uploaded) {
      backend.release(MeshKey::Chunk(chunk.coord));
      chunk.uploaded = false;
      released += 1;
    }
    debug!(released = released, "disposed chunks");
    released
  }
}

impl Drop for ChunkCoordinator {
  fn drop(&mut self) {
    let live = self.uploaded_count();
    if live > 0 {
      warn!(live = live, "chunk coordinator dropped with uploaded meshes");
    }
  }
}

#[cfg(test)]
#[path = "coordinator_test.rs"]
mod coordinator_test;
