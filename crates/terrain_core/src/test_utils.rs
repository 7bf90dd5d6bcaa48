//! Shared fixtures for unit tests.

use std::collections::HashSet;

use crate::noise::NoiseField;
use crate::presentation::{HeightTexture, MeshData, MeshKey, RenderBackend};

// =============================================================================
// Field fixtures
// =============================================================================

/// 0/1 checkerboard, 1 where `x + y` is odd.
pub fn checker_field(width: usize, height: usize) -> NoiseField {
  let data = (0..height)
    .flat_map(|y| (0..width).map(move |x| ((x + y) % 2) as f32))
    .collect();
  NoiseField::from_vec(width, height, data).unwrap()
}

/// Linear ramp `0.1·x + 0.05·y`.
pub fn ramp_field(width: usize, height: usize) -> NoiseField {
  let data = (0..height)
    .flat_map(|y| (0..width).map(move |x| 0.1 * x as f32 + 0.05 * y as f32))
    .collect();
  NoiseField::from_vec(width, height, data).unwrap()
}

// =============================================================================
// Recording backend
// =============================================================================

/// What a [`RecordingBackend`] saw for one upload.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedUpload {
  pub key: MeshKey,
  pub vertex_count: u32,
  pub index_count: u32,
  pub bytes: usize,
  pub texture: Option<(u32, u32)>,
}

/// Backend that records every call and rejects double uploads.
#[derive(Debug, Default)]
pub struct RecordingBackend {
  pub uploads: Vec<RecordedUpload>,
  pub releases: Vec<MeshKey>,
  pub live: HashSet<MeshKey>,
  /// Fail every upload once this many have succeeded.
  pub fail_after: Option<usize>,
}

impl RenderBackend for RecordingBackend {
  type Error = String;

  fn upload(
    &mut self,
    key: MeshKey,
    mesh: MeshData,
    texture: Option<HeightTexture<'_>>,
  ) -> Result<(), Self::Error> {
    if self.fail_after.is_some_and(|n| self.uploads.len() >= n) {
      return Err(format!("upload budget exhausted at {:?}", key));
    }
    if !self.live.insert(key) {
      return Err(format!("{:?} uploaded twice", key));
    }
    if let Some(texture) = &texture {
      assert_eq!(
        texture.texels.len(),
        (texture.width * texture.height) as usize
      );
    }
    self.uploads.push(RecordedUpload {
      key,
      vertex_count: mesh.vertex_count,
      index_count: mesh.index_count,
      bytes: mesh.byte_len(),
      texture: texture.map(|t| (t.width, t.height)),
    });
    Ok(())
  }

  fn release(&mut self, key: MeshKey) {
    assert!(self.live.remove(&key), "{:?} released without upload", key);
    self.releases.push(key);
  }
}
