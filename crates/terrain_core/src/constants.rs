//! Fixed tables and default tuning values for terrain generation.
//!
//! # Permutation Table
//!
//! Lattice hashing uses the classic 256-entry reference permutation. The table
//! is a process-wide constant: two runs over the same inputs produce
//! bit-identical noise, and there is nothing to seed or tear down.
//!
//! ```text
//! hash(X, Y) = P[(P[X & 255] + Y) & 255]
//!
//!   (X, Y+1) ──────── (X+1, Y+1)
//!      │ ab               │ bb
//!      │                  │
//!      │     (x, y)       │
//!      │ aa               │ ba
//!   (X, Y) ────────── (X+1, Y)
//! ```
//!
//! Every lookup wraps with `& 255`, which is equivalent to the doubled 512
//! entry table of the reference implementation.
//!
//! # Vertex Layout
//!
//! ```text
//! offset  0       12      24   32 bytes
//!         ├───────┼───────┼────┤
//!         │ pos   │ color │ uv │
//!         │ 3×f32 │ 3×f32 │2×f32
//! ```

/// Ken Perlin's reference permutation of `0..=255`.
pub const PERMUTATION: [u8; 256] = [
  151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
  142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
  203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
  74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
  220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
  132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186,
  3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206, 59,
  227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163, 70,
  221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178,
  185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241, 81,
  51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204, 176, 115,
  121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141, 128, 195,
  78, 66, 215, 61, 156, 180,
];

/// Mask applied to lattice coordinates and hash sums (255).
pub const PERMUTATION_MASK: i32 = 0xFF;

/// Number of `f32` components in one interleaved vertex (3 + 3 + 2).
pub const VERTEX_STRIDE: usize = 8;

/// Largest vertex count addressable by a `u32` index buffer.
pub const MAX_GRID_SAMPLES: usize = u32::MAX as usize;

// =============================================================================
// Fractal defaults
// =============================================================================

/// Default number of octaves summed by fractal sampling.
pub const DEFAULT_OCTAVES: u32 = 4;

/// Upper bound on fractal octaves. Octave `i` samples at frequency `2^i`,
/// which leaves `f32` range well before octave 128.
pub const MAX_OCTAVES: u32 = 32;

/// Default amplitude decay per octave.
pub const DEFAULT_PERSISTENCE: f32 = 0.5;

/// Default grid-mode noise scale (lattice cells spanned by the whole grid).
pub const DEFAULT_GRID_NOISE_SCALE: f32 = 4.0;

/// Default chunk-mode noise frequency (lattice cells per world unit).
///
/// Chunk vertices sit on integer world coordinates; a frequency of 1.0 would
/// land every sample on a lattice point, where gradient noise is zero.
pub const DEFAULT_CHUNK_NOISE_SCALE: f32 = 0.05;

// =============================================================================
// Grid and chunk defaults
// =============================================================================

/// Default side length of the single-terrain grid, in samples.
pub const DEFAULT_TERRAIN_SIZE: usize = 256;

/// Default height multiplier of the single-terrain grid.
pub const DEFAULT_TERRAIN_DISPLACEMENT: f32 = 32.0;

/// Default chunk side length, in world units (quads).
pub const DEFAULT_CHUNK_SIZE: u32 = 16;

/// Default activation radius around the camera.
pub const DEFAULT_RENDER_DISTANCE: f32 = 64.0;

/// Largest chunk grid half-extent; the grid holds `(2n)²` chunks.
pub const MAX_CHUNK_GRID_EXTENT: i32 = 256;

/// Default chunk height multiplier.
pub const DEFAULT_CHUNK_DISPLACEMENT: f32 = 8.0;

// =============================================================================
// Biome blend defaults
// =============================================================================

/// Frequency of the low-frequency biome mask.
pub const DEFAULT_BIOME_MASK_FREQUENCY: f32 = 0.01;

/// Height multiplier of the flat "field" biome.
pub const DEFAULT_BIOME_FIELD_AMPLITUDE: f32 = 0.2;

/// Exponent sharpening the mask transition between biomes.
pub const DEFAULT_BIOME_SHARPNESS: f32 = 10.0;

/// Offset decorrelating the mask lattice from the primary height lattice.
pub const DEFAULT_BIOME_MASK_OFFSET: [f32; 2] = [317.37, 191.73];

// =============================================================================
// Palette defaults
// =============================================================================

/// Grass green at the bottom of the height range.
pub const FIELD_LOW_COLOR: [f32; 3] = [0.2, 0.7, 0.2];

/// Dry ochre at the top of the field height range.
pub const FIELD_HIGH_COLOR: [f32; 3] = [1.0, 0.7, 0.2];

/// Bare earth at the foot of hills.
pub const HILL_LOW_COLOR: [f32; 3] = [0.35, 0.3, 0.25];

/// Snow at hill tops.
pub const HILL_HIGH_COLOR: [f32; 3] = [0.95, 0.95, 0.95];

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
