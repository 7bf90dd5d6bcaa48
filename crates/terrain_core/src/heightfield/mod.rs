//! Heightfield Mesh Builder: noise field → triangulated grid mesh.
//!
//! ```text
//!   z
//!   │  tl ──── tr        tl = z·W + x        triangles per quad:
//!   │  │  ╲    │         tr = tl + 1           (tl, bl, tr)
//!   │  │   ╲   │         bl = tl + W           (tr, bl, br)
//!   │  bl ──── br        br = bl + 1
//!   └──────────── x
//!
//! vertex (x, z):  position = origin + (x·hs, h·hs·d, z·hs)
//!                 uv       = (x / W, z / H)
//!                 color    = palette(t = (y - lo) / (hi - lo))
//! ```
//!
//! `lo` and `hi` are the theoretical displaced-height bounds `0` and `hs·d`
//! (swapped if negative), so a normalized field always colors across the full
//! gradient and neighbouring chunks color identically at shared vertices.
//!
//! Vertices are emitted row by row (z outer, x inner), matching
//! [`NoiseField`] indexing. A grid with a single row or column has no quads
//! and produces an empty index buffer.

mod biome;
mod palette;


pub use biome::BiomeBlend;
pub use palette::{BiomePalette, ColorGradient};

use glam::Vec3;
use tracing::debug;

use crate::error::{Result, TerrainError};
use crate::noise::NoiseField;
use crate::types::{Mesh, Vertex};

/// Mesh build settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightfieldConfig {
  /// World units between adjacent grid samples.
  pub horizontal_scale: f32,
  /// Height multiplier applied on top of `horizontal_scale`.
  pub vertical_displacement: f32,
  /// World position of grid cell (0, 0).
  pub origin: Vec3,
  /// Divisors for uv. `None` uses the grid width and height.
  pub uv_span: Option<[f32; 2]>,
  pub palette: BiomePalette,
}

impl Default for HeightfieldConfig {
  fn default() -> Self {
    Self {
      horizontal_scale: 1.0,
      vertical_displacement: 1.0,
      origin: Vec3::ZERO,
      uv_span: None,
      palette: BiomePalette::default(),
    }
  }
}

impl HeightfieldConfig {
  pub fn new(horizontal_scale: f32, vertical_displacement: f32) -> Self {
    Self {
      horizontal_scale,
      vertical_displacement,
      ..Default::default()
    }
  }

  pub fn with_origin(mut self, origin: Vec3) -> Self {
    self.origin = origin;
    self
  }

  pub fn with_uv_span(mut self, span: [f32; 2]) -> Self {
    self.uv_span = Some(span);
    self
  }

  pub fn with_palette(mut self, palette: BiomePalette) -> Self {
    self.palette = palette;
    self
  }

  pub fn validate(&self) -> Result<()> {
    if !self.horizontal_scale.is_finite() || self.horizontal_scale <= 0.0 {
      return Err(TerrainError::invalid(
        "horizontal_scale",
        format!("must be finite and > 0, got {}", self.horizontal_scale),
      ));
    }
    if !self.vertical_displacement.is_finite() {
      return Err(TerrainError::invalid(
        "vertical_displacement",
        format!("must be finite, got {}", self.vertical_displacement),
      ));
    }
    if let Some([u, v]) = self.uv_span {
      if !(u.is_finite() && v.is_finite() && u > 0.0 && v > 0.0) {
        return Err(TerrainError::invalid(
          "uv_span",
          format!("must be finite and > 0, got [{}, {}]", u, v),
        ));
      }
    }
    Ok(())
  }

  /// Displaced-height range `(lo, hi)` used for coloring.
  #[inline]
  pub fn height_bounds(&self) -> (f32, f32) {
    let top = self.horizontal_scale * self.vertical_displacement;
    (top.min(0.0), top.max(0.0))
  }
}

/// Build a mesh with the grid origin at world zero.
pub fn build(field: &NoiseField, horizontal_scale: f32, vertical_displacement: f32) -> Mesh {
  build_with(
    field,
    &HeightfieldConfig::new(horizontal_scale, vertical_displacement),
  )
}

/// Build a mesh colored with the field gradient only.
pub fn build_with(field: &NoiseField, config: &HeightfieldConfig) -> Mesh {
  emit(field, None, config)
}

/// Build a mesh whose colors mix field and hill gradients by `mask`.
pub fn build_blended(
  field: &NoiseField,
  mask: &NoiseField,
  config: &HeightfieldConfig,
) -> Result<Mesh> {
  if mask.width() != field.width() || mask.height() != field.height() {
    return Err(TerrainError::invalid(
      "mask",
      format!(
        "{}x{} mask does not match {}x{} field",
        mask.width(),
        mask.height(),
        field.width(),
        field.height()
      ),
    ));
  }
  Ok(emit(field, Some(mask), config))
}

impl Mesh {
  /// See [`build`].
  pub fn build(field: &NoiseField, horizontal_scale: f32, vertical_displacement: f32) -> Mesh {
    build(field, horizontal_scale, vertical_displacement)
  }
}

/// Triangle-list indices for a `width × height` vertex grid.
pub fn grid_indices(width: usize, height: usize) -> Vec<u32> {
  let quads = width.saturating_sub(1) * height.saturating_sub(1);
  let mut indices = Vec::with_capacity(quads * 6);

  for z in 0..height.saturating_sub(1) {
    for x in 0..width.saturating_sub(1) {
      let tl = (z * width + x) as u32;
      let tr = tl + 1;
      let bl = tl + width as u32;
      let br = bl + 1;
      indices.extend_from_slice(&[tl, bl, tr, tr, bl, br]);
    }
  }

  indices
}

fn emit(field: &NoiseField, mask: Option<&NoiseField>, config: &HeightfieldConfig) -> Mesh {
  let (width, height) = (field.width(), field.height());
  let hs = config.horizontal_scale;
  let vertical = hs * config.vertical_displacement;
  let (lo, hi) = config.height_bounds();
  let range = hi - lo;
  let [u_span, v_span] = config
    .uv_span
    .unwrap_or([width as f32, height as f32]);

  let mut mesh = Mesh::with_capacity(
    field.len(),
    width.saturating_sub(1) * height.saturating_sub(1) * 6,
  );

  for z in 0..height {
    for x in 0..width {
      let y = field.get(x, z) * vertical;
      let t = if range > 0.0 {
        ((y - lo) / range).clamp(0.0, 1.0)
      } else {
        0.0
      };
      let m = mask.map_or(0.0, |mask| mask.get(x, z));

      let position = config.origin + Vec3::new(x as f32 * hs, y, z as f32 * hs);
      mesh.push_vertex(Vertex {
        position: position.to_array(),
        color: config.palette.sample(t, m),
        uv: [x as f32 / u_span, z as f32 / v_span],
      });
    }
  }

  mesh.indices = grid_indices(width, height);

  debug!(
    vertices = mesh.vertices.len(),
    triangles = mesh.triangle_count(),
    "built heightfield mesh"
  );

  mesh
}
