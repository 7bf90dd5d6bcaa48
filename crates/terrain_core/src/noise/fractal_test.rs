use super::fractal::*;
use super::perlin;
use crate::constants::MAX_OCTAVES;
use crate::error::TerrainError;

#[test]
fn test_default_parameters_are_valid() {
  assert!(FractalParameters::default().validate().is_ok());
}

#[test]
fn test_rejects_non_positive_scale() {
  for scale in [0.0, -1.0, f32::NAN, f32::INFINITY] {
    let err = FractalParameters::new(scale, 4, 0.5).unwrap_err();
    assert!(
      matches!(err, TerrainError::InvalidParameter { name: "scale", .. }),
      "scale {} gave {:?}",
      scale,
      err
    );
  }
}

#[test]
fn test_rejects_zero_octaves() {
  let err = FractalParameters::new(1.0, 0, 0.5).unwrap_err();
  assert!(matches!(
    err,
    TerrainError::InvalidParameter { name: "octaves", .. }
  ));
}

#[test]
fn test_rejects_octaves_beyond_cap() {
  assert!(FractalParameters::new(4.0, MAX_OCTAVES, 0.5).is_ok());
  for octaves in [MAX_OCTAVES + 1, 129, 200] {
    let err = FractalParameters::new(4.0, octaves, 0.5).unwrap_err();
    assert!(matches!(
      err,
      TerrainError::InvalidParameter { name: "octaves", .. }
    ));
  }
}

#[test]
fn test_rejects_octaves_overflowing_large_scale() {
  let params = FractalParameters::default()
    .with_scale(1.0e30)
    .with_octaves(MAX_OCTAVES);
  assert!(!params.max_frequency().is_finite());
  assert!(matches!(
    params.validate(),
    Err(TerrainError::InvalidParameter { name: "octaves", .. })
  ));
  assert!(params.with_octaves(1).validate().is_ok());
}

#[test]
fn test_max_octaves_stays_finite() {
  let params = FractalParameters::new(4.0, MAX_OCTAVES, 0.5).unwrap();
  for &(x, z) in &[(0.3, 0.7), (12.5, -3.25), (-100.1, 40.9)] {
    let v = fractal_sample(x, z, &params);
    assert!(v.is_finite(), "{} at ({}, {})", v, x, z);
  }
}

#[test]
fn test_rejects_persistence_out_of_range() {
  for persistence in [0.0, -0.5, 1.01, f32::NAN] {
    let err = FractalParameters::new(1.0, 3, persistence).unwrap_err();
    assert!(matches!(
      err,
      TerrainError::InvalidParameter {
        name: "persistence",
        ..
      }
    ));
  }
  assert!(FractalParameters::new(1.0, 3, 1.0).is_ok());
}

#[test]
fn test_amplitude_sum() {
  let params = FractalParameters::new(1.0, 3, 0.5).unwrap();
  assert!((params.amplitude_sum() - 1.75).abs() < 1e-6);

  let flat = FractalParameters::new(1.0, 4, 1.0).unwrap();
  assert_eq!(flat.amplitude_sum(), 4.0);
}

#[test]
fn test_single_octave_matches_primitive() {
  for &(x, y) in &[(0.3, 0.7), (4.1, -2.2), (17.9, 3.3)] {
    assert_eq!(fractal_sum(x, y, 1, 0.5), perlin::sample(x, y));
  }
}

#[test]
fn test_fractal_sum_weights_octaves() {
  let (x, y) = (1.37, 2.71);
  let expected =
    (perlin::sample(x, y) + 0.5 * perlin::sample(x * 2.0, y * 2.0)) / 1.5;
  assert!((fractal_sum(x, y, 2, 0.5) - expected).abs() < 1e-6);
}

#[test]
fn test_fractal_sample_remaps_to_unit_range() {
  let params = FractalParameters::new(0.37, 5, 0.6).unwrap();
  for i in 0..64 {
    for j in 0..64 {
      let v = fractal_sample(i as f32, j as f32, &params);
      assert!((0.0..=1.0).contains(&v), "value {} out of range", v);
    }
  }
}

#[test]
fn test_fractal_sample_applies_scale() {
  let params = FractalParameters::new(0.25, 3, 0.5).unwrap();
  let expected = (fractal_sum(2.5 * 0.25, 7.0 * 0.25, 3, 0.5) + 1.0) * 0.5;
  assert_eq!(fractal_sample(2.5, 7.0, &params), expected);
}

#[test]
fn test_fractal_sample_on_lattice_is_midpoint() {
  // Integer coordinates stay on the lattice at every octave.
  let params = FractalParameters::new(1.0, 4, 0.5).unwrap();
  assert_eq!(fractal_sample(3.0, 5.0, &params), 0.5);
}
