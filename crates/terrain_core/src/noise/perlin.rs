//! Coherent 2D gradient noise over the fixed permutation table.
//!
//! ```text
//!   ab ─────────── bb        1. lattice cell  X = floor(x) & 255
//!    │              │                         Y = floor(y) & 255
//!    │   ●(fx, fy)  │        2. hash corners  aa, ab, ba, bb
//!    │              │        3. dot products  grad(hash, dx, dy)
//!   aa ─────────── ba        4. blend         lerp by fade(fx), fade(fy)
//! ```
//!
//! The quintic fade has zero first and second derivatives at 0 and 1, so the
//! surface is C¹ across lattice lines. Samples on integer coordinates are
//! exactly zero.

use crate::constants::{PERMUTATION, PERMUTATION_MASK};

/// Quintic fade curve `6t⁵ - 15t⁴ + 10t³`.
#[inline(always)]
pub fn fade(t: f32) -> f32 {
  t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation from `a` (t = 0) to `b` (t = 1).
#[inline(always)]
pub fn lerp(t: f32, a: f32, b: f32) -> f32 {
  a + t * (b - a)
}

#[inline(always)]
fn hash(i: i32) -> i32 {
  PERMUTATION[(i & PERMUTATION_MASK) as usize] as i32
}

/// Dot product of the offset `(x, y)` with one of 16 gradient directions
/// selected by the low 4 bits of `hash`.
///
/// This is the reference 3D gradient set evaluated on the `z = 0` plane.
#[inline(always)]
pub fn grad(hash: i32, x: f32, y: f32) -> f32 {
  let h = hash & 15;
  let u = if h < 8 { x } else { y };
  let v = if h < 4 {
    y
  } else if h == 12 || h == 14 {
    x
  } else {
    0.0
  };
  let u = if h & 1 == 0 { u } else { -u };
  let v = if h & 2 == 0 { v } else { -v };
  u + v
}

/// Sample Perlin noise at `(x, y)`.
///
/// Deterministic for identical inputs and roughly within [-1, 1].
pub fn sample(x: f32, y: f32) -> f32 {
  let floor_x = x.floor();
  let floor_y = y.floor();
  let cell_x = floor_x as i32 & PERMUTATION_MASK;
  let cell_y = floor_y as i32 & PERMUTATION_MASK;

  let x = x - floor_x;
  let y = y - floor_y;

  let u = fade(x);
  let v = fade(y);

  let a = hash(cell_x) + cell_y;
  let aa = hash(a);
  let ab = hash(a + 1);
  let b = hash(cell_x + 1) + cell_y;
  let ba = hash(b);
  let bb = hash(b + 1);

  let bottom = lerp(u, grad(aa, x, y), grad(ba, x - 1.0, y));
  let top = lerp(u, grad(ab, x, y - 1.0), grad(bb, x - 1.0, y - 1.0));

  lerp(v, bottom, top)
}
