//! Core mesh data types shared by the heightfield builder and chunk tiling.

use crate::constants::VERTEX_STRIDE;

/// Output vertex with all mesh attributes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
  /// Position with the displaced height in `y`.
  pub position: [f32; 3],

  /// RGB color derived from height (and biome mask when blending).
  pub color: [f32; 3],

  /// Normalized grid coordinate in [0, 1].
  pub uv: [f32; 2],
}

impl Default for Vertex {
  fn default() -> Self {
    Self {
      position: [0.0; 3],
      color: [1.0; 3],
      uv: [0.0; 2],
    }
  }
}

impl Vertex {
  /// Interleaved `position, color, uv` layout as uploaded to a vertex buffer.
  #[inline]
  pub fn to_array(&self) -> [f32; VERTEX_STRIDE] {
    let [px, py, pz] = self.position;
    let [r, g, b] = self.color;
    let [u, v] = self.uv;
    [px, py, pz, r, g, b, u, v]
  }
}

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  /// Create AABB from min/max corners.
  pub fn new(min: [f32; 3], max: [f32; 3]) -> Self {
    Self { min, max }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Triangle-list mesh.
///
/// Every index is below `vertices.len()` and `indices.len()` is a multiple
/// of 3.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
  pub vertices: Vec<Vertex>,

  /// Triangle indices (3 indices per triangle).
  pub indices: Vec<u32>,

  /// Bounding box encompassing all vertices.
  pub bounds: MinMaxAABB,
}

impl Mesh {
  pub fn new() -> Self {
    Self::default()
  }

  /// Preallocate buffers for a known vertex and index count.
  pub fn with_capacity(vertices: usize, indices: usize) -> Self {
    Self {
      vertices: Vec::with_capacity(vertices),
      indices: Vec::with_capacity(indices),
      bounds: MinMaxAABB::empty(),
    }
  }

  /// Append a vertex and grow the bounds around it.
  #[inline]
  pub fn push_vertex(&mut self, vertex: Vertex) {
    self.bounds.encapsulate(vertex.position);
    self.vertices.push(vertex);
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.vertices.clear();
    self.indices.clear();
    self.bounds = MinMaxAABB::empty();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
