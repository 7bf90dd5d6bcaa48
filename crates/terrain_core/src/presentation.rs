//! Upload seam between terrain generation and a graphics device.
//!
//! The core never talks to a GPU. Meshes leave the crate as packed byte
//! buffers through [`RenderBackend`], keyed by [`MeshKey`], and every
//! successful upload is paired with exactly one `release` by the owner's
//! `dispose`.
//!
//! ```text
//! Terrain / ChunkCoordinator
//!     │ upload(key, MeshData, Some(HeightTexture))
//!     ▼
//! RenderBackend ── GPU / headless recorder / NullBackend
//!     ▲
//!     │ release(key)
//! dispose()
//! ```

use std::convert::Infallible;

use crate::chunk::ChunkCoord;
use crate::noise::NoiseField;
use crate::types::{Mesh, MinMaxAABB};

/// Identifies an uploaded mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKey {
  /// The single-grid terrain.
  Terrain,
  /// One chunk of the chunked terrain.
  Chunk(ChunkCoord),
}

/// Mesh packed for upload.
#[derive(Clone, PartialEq)]
pub struct MeshData {
  /// Interleaved vertex data (`position, color, uv` as native-endian f32).
  pub vertices: Vec<u8>,

  /// Index data (native-endian u32).
  pub indices: Vec<u8>,

  pub vertex_count: u32,

  pub index_count: u32,

  /// Mesh bounding box.
  pub bounds: MinMaxAABB,
}

impl std::fmt::Debug for MeshData {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("MeshData")
      .field("vertex_count", &self.vertex_count)
      .field("index_count", &self.index_count)
      .field("bounds", &self.bounds)
      .finish()
  }
}

impl MeshData {
  /// Bytes per packed vertex.
  pub const VERTEX_STRIDE_BYTES: usize = std::mem::size_of::<crate::types::Vertex>();

  pub fn from_mesh(mesh: &Mesh) -> Self {
    let mut vertices = Vec::with_capacity(mesh.vertices.len() * Self::VERTEX_STRIDE_BYTES);
    for vertex in &mesh.vertices {
      for component in vertex.to_array() {
        vertices.extend_from_slice(&component.to_ne_bytes());
      }
    }

    let mut indices = Vec::with_capacity(mesh.indices.len() * 4);
    for index in &mesh.indices {
      indices.extend_from_slice(&index.to_ne_bytes());
    }

    Self {
      vertices,
      indices,
      vertex_count: mesh.vertices.len() as u32,
      index_count: mesh.indices.len() as u32,
      bounds: mesh.bounds,
    }
  }

  /// Total payload size in bytes.
  pub fn byte_len(&self) -> usize {
    self.vertices.len() + self.indices.len()
  }
}

/// Single-channel `f32` texture borrowed from a [`NoiseField`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightTexture<'a> {
  pub width: u32,
  pub height: u32,
  /// Row-major texels, `width * height` long.
  pub texels: &'a [f32],
}

impl NoiseField {
  /// Borrow the field as a height texture.
  pub fn texture(&self) -> HeightTexture<'_> {
    HeightTexture {
      width: self.width() as u32,
      height: self.height() as u32,
      texels: self.as_slice(),
    }
  }
}

/// Opaque upload capability of a graphics device.
///
/// Uploads are blocking, one-shot hand-offs. Implementations may reject a
/// key that is already live.
pub trait RenderBackend {
  type Error;

  /// Upload a mesh (and optionally its height texture) under `key`.
  fn upload(
    &mut self,
    key: MeshKey,
    mesh: MeshData,
    texture: Option<HeightTexture<'_>>,
  ) -> Result<(), Self::Error>;

  /// Free the resources uploaded under `key`.
  fn release(&mut self, key: MeshKey);
}

/// No-op backend for testing and headless operation.
pub struct NullBackend;

impl RenderBackend for NullBackend {
  type Error = Infallible;

  fn upload(
    &mut self,
    _key: MeshKey,
    _mesh: MeshData,
    _texture: Option<HeightTexture<'_>>,
  ) -> Result<(), Self::Error> {
    Ok(())
  }

  fn release(&mut self, _key: MeshKey) {
    // No-op
  }
}

#[cfg(test)]
#[path = "presentation_test.rs"]
mod presentation_test;
