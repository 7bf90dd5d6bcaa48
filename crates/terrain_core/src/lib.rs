//! terrain_core - engine independent procedural heightfield terrain
//!
//! This crate turns layered Perlin noise into triangulated heightfield
//! meshes, either as one large grid or as a fixed grid of world-space chunks
//! with distance-based activation. Nothing here touches a window or a GPU;
//! meshes leave through the [`RenderBackend`] seam.
//!
//! # Pipeline
//!
//! ```text
//! noise::generate_grid ─► smoothing ─► heightfield::BiomeBlend ─► heightfield::build
//!        NoiseField        (optional)       (optional)                Mesh
//!
//! ChunkCoordinator: per chunk, fractal_sample at world coords ─► build ─► Chunk
//! ```
//!
//! # Example
//!
//! ```ignore
//! use terrain_core::{noise, Mesh, NullBackend, Terrain, TerrainConfig};
//!
//! let field = noise::generate_grid(128, 128, 4.0, 4, 0.5)?;
//! let mesh = Mesh::build(&field, 1.0, 20.0);
//! println!("{} vertices, {} triangles", mesh.vertices.len(), mesh.triangle_count());
//!
//! let mut terrain = Terrain::generate(TerrainConfig::default())?;
//! terrain.upload(&mut NullBackend)?;
//! terrain.dispose(&mut NullBackend);
//! ```

pub mod constants;
pub mod error;
pub mod types;

pub use error::{Result, TerrainError};
pub use types::{Mesh, MinMaxAABB, Vertex};

// Noise engine
pub mod noise;
pub use noise::{FractalParameters, NoiseField};

// Post-normalization blur
pub mod smoothing;
pub use smoothing::SmoothingKernel;

// Noise field to mesh
pub mod heightfield;
pub use heightfield::{BiomeBlend, BiomePalette, ColorGradient, HeightfieldConfig};

// Fixed chunk grid with activation
pub mod chunk;
pub use chunk::{Chunk, ChunkConfig, ChunkCoord, ChunkCoordinator};

// Single-grid terrain
pub mod terrain;
pub use terrain::{Terrain, TerrainConfig};

// Upload seam
pub mod presentation;
pub use presentation::{HeightTexture, MeshData, MeshKey, NullBackend, RenderBackend};

pub mod metrics;
pub use metrics::GenerationStats;

#[cfg(test)]
pub(crate) mod test_utils;
