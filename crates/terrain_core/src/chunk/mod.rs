//! Tiling/Chunk Coordinator: a fixed square grid of independently meshed
//! chunks with distance-based activation.
//!
//! ```text
//!          z
//!          ▲     coords in [-n, n), n = render_distance / chunk_size
//!   ┌────┬─┼──┬────┐
//!   │-2,1│-1,1│0,1 │ ...
//!   ├────┼─┼──┼────┤     chunk (x, z) covers world
//!   │-2,0│-1,0│0,0 │       [x·s, x·s + s] × [z·s, z·s + s]
//!   ├────┼─┼──┼────┼──► x
//!   │    │    │    │     with s + 1 vertices per side, so the
//!   └────┴────┴────┘     boundary row is shared with the neighbour
//! ```
//!
//! Every chunk samples the noise at world coordinates. Two chunks sharing an
//! edge evaluate the same function at the same points, so their boundary
//! vertices coincide exactly and there are no seams. Heights are the raw
//! fractal sample in [0, 1]; a per-chunk min-max pass would rescale each chunk
//! differently and break that continuity.

mod config;
mod coordinator;


pub use config::{ChunkConfig, ChunkCoord};
pub use coordinator::ChunkCoordinator;

use glam::Vec3;

use crate::error::Result;
use crate::heightfield::{self, HeightfieldConfig};
use crate::noise::{fractal_sample, NoiseField};
use crate::types::Mesh;

/// One positioned piece of the chunked terrain.
#[derive(Clone, Debug)]
pub struct Chunk {
  pub coord: ChunkCoord,
  /// World position of the minimum corner.
  pub position: Vec3,
  /// Side length in world units.
  pub size: u32,
  /// Heights sampled at the chunk's vertices (after biome blending).
  pub field: NoiseField,
  pub mesh: Mesh,
  /// Starts `true`; cleared by the first activation pass when out of range.
  pub is_active: bool,
  pub(crate) uploaded: bool,
}

impl Chunk {
  /// Sample and mesh the chunk at `coord`. `config` must already be valid.
  pub fn generate(coord: ChunkCoord, config: &ChunkConfig) -> Result<Self> {
    let size = config.chunk_size;
    let side = config.samples_per_side();
    let position = coord.world_origin(size);
    let noise = config.noise();

    let mut field = NoiseField::new(side, side)?;
    for z in 0..side {
      for x in 0..side {
        let wx = position.x + x as f32;
        let wz = position.z + z as f32;
        field.set(x, z, fractal_sample(wx, wz, &noise));
      }
    }

    let mesh_config = HeightfieldConfig::new(1.0, config.displacement)
      .with_origin(position)
      .with_uv_span([size as f32; 2])
      .with_palette(config.palette);

    let mesh = match &config.biome {
      Some(biome) => {
        let mask = biome.apply(&mut field, [position.x, position.z], 1.0)?;
        heightfield::build_blended(&field, &mask, &mesh_config)?
      }
      None => heightfield::build_with(&field, &mesh_config),
    };

    Ok(Self {
      coord,
      position,
      size,
      field,
      mesh,
      is_active: true,
      uploaded: false,
    })
  }

  /// Activation reference point: `position + size / 2` on every axis.
  #[inline]
  pub fn center(&self) -> Vec3 {
    self.position + Vec3::splat(self.size as f32 * 0.5)
  }

  #[inline]
  pub fn distance_to(&self, point: Vec3) -> f32 {
    self.center().distance(point)
  }

  /// Whether the mesh is currently live on a backend.
  pub fn is_uploaded(&self) -> bool {
    self.uploaded
  }
}
