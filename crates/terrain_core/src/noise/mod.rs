//! Noise Engine: coherent 2D noise, fractal summation and normalized grids.
//!
//! ```text
//! perlin::sample(x, y)                 single octave, roughly [-1, 1]
//!         │
//!         ▼
//! fractal_sample(x, z, params)         Σ sample(2^i·p)·persistence^i, → [0, 1]
//!         │
//!         ▼
//! generate_grid(w, h, params)          accumulate + min-max normalize → NoiseField
//! ```
//!
//! Nothing here holds mutable state. The permutation table is a constant, so
//! every function is pure and deterministic.

mod field;
mod fractal;
pub mod perlin;

#[cfg(test)]
mod fractal_test;

pub use field::{generate_grid, generate_grid_with, validate_dimensions, NoiseField};
pub use fractal::{fractal_sample, fractal_sum, FractalParameters};
pub use perlin::sample;
