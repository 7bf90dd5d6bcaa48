//! Height-to-color gradients for the two terrain biomes.

use serde::{Deserialize, Serialize};

use crate::constants::{FIELD_HIGH_COLOR, FIELD_LOW_COLOR, HILL_HIGH_COLOR, HILL_LOW_COLOR};

#[inline]
fn mix(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
  [
    a[0] + (b[0] - a[0]) * t,
    a[1] + (b[1] - a[1]) * t,
    a[2] + (b[2] - a[2]) * t,
  ]
}

/// Linear RGB ramp from `low` to `high`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorGradient {
  pub low: [f32; 3],
  pub high: [f32; 3],
}

impl ColorGradient {
  pub const fn new(low: [f32; 3], high: [f32; 3]) -> Self {
    Self { low, high }
  }

  /// Color at `t`, clamped to [0, 1].
  #[inline]
  pub fn sample(&self, t: f32) -> [f32; 3] {
    mix(self.low, self.high, t.clamp(0.0, 1.0))
  }
}

/// Field and hill gradients, mixed by the biome mask.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiomePalette {
  pub field: ColorGradient,
  pub hill: ColorGradient,
}

impl Default for BiomePalette {
  fn default() -> Self {
    Self {
      field: ColorGradient::new(FIELD_LOW_COLOR, FIELD_HIGH_COLOR),
      hill: ColorGradient::new(HILL_LOW_COLOR, HILL_HIGH_COLOR),
    }
  }
}

impl BiomePalette {
  pub fn with_field(mut self, field: ColorGradient) -> Self {
    self.field = field;
    self
  }

  pub fn with_hill(mut self, hill: ColorGradient) -> Self {
    self.hill = hill;
    self
  }

  /// Color for height fraction `t`. `mask` of 0 is pure field, 1 pure hill.
  #[inline]
  pub fn sample(&self, t: f32, mask: f32) -> [f32; 3] {
    let field = self.field.sample(t);
    if mask <= 0.0 {
      return field;
    }
    mix(field, self.hill.sample(t), mask.min(1.0))
  }
}
