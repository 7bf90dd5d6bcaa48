use glam::Vec3;

use super::*;
use crate::error::TerrainError;
use crate::test_utils::RecordingBackend;

fn small_grid() -> ChunkCoordinator {
  ChunkCoordinator::generate(4, 8.0, 2.0, 2, 0.5).unwrap()
}

#[test]
fn test_grid_size_matches_render_distance() {
  let coordinator = small_grid();
  assert_eq!(coordinator.len(), 16);
  assert!(coordinator.get(ChunkCoord::new(-2, -2)).is_some());
  assert!(coordinator.get(ChunkCoord::new(1, 1)).is_some());
  assert!(coordinator.get(ChunkCoord::new(2, 0)).is_none());

  let stats = coordinator.stats();
  assert_eq!(stats.meshes, 16);
  assert_eq!(stats.vertices, 16 * 25);
}

#[test]
fn test_invalid_config_is_rejected() {
  assert!(matches!(
    ChunkCoordinator::generate(0, 8.0, 2.0, 2, 0.5),
    Err(TerrainError::InvalidParameter {
      name: "chunk_size",
      ..
    })
  ));
  assert!(matches!(
    ChunkCoordinator::generate(4, 8.0, 2.0, 0, 0.5),
    Err(TerrainError::InvalidParameter {
      name: "octaves",
      ..
    })
  ));
}

#[test]
fn test_oversized_requests_fail_before_generation() {
  assert!(matches!(
    ChunkCoordinator::generate(1, 1.0e6, 2.0, 2, 0.5),
    Err(TerrainError::InvalidParameter {
      name: "render_distance",
      ..
    })
  ));
  assert!(matches!(
    ChunkCoordinator::generate(4, 8.0, 2.0, 200, 0.5),
    Err(TerrainError::InvalidParameter {
      name: "octaves",
      ..
    })
  ));
}

#[test]
fn test_short_render_distance_gives_empty_grid() {
  let coordinator = ChunkCoordinator::generate(16, 8.0, 1.0, 1, 0.5).unwrap();
  assert!(coordinator.is_empty());
}

#[test]
fn test_chunks_start_active() {
  let coordinator = small_grid();
  assert_eq!(coordinator.active_count(), coordinator.len());
  assert_eq!(coordinator.active_chunks().count(), 16);
}

#[test]
fn test_activation_threshold() {
  let mut coordinator = small_grid();
  let render_distance = coordinator.config().render_distance;
  let center = coordinator
    .get(ChunkCoord::new(0, 0))
    .map(|c| c.center())
    .unwrap();

  coordinator.update_activation(center + Vec3::new(render_distance + 1.0, 0.0, 0.0));
  assert!(!coordinator.get(ChunkCoord::new(0, 0)).unwrap().is_active);

  coordinator.update_activation(center + Vec3::new(render_distance - 1.0, 0.0, 0.0));
  assert!(coordinator.get(ChunkCoord::new(0, 0)).unwrap().is_active);

  coordinator.update_activation(center + Vec3::new(0.0, 0.0, render_distance));
  assert!(!coordinator.get(ChunkCoord::new(0, 0)).unwrap().is_active);
}

#[test]
fn test_activation_count_follows_camera() {
  let mut coordinator = small_grid();

  let near = coordinator.update_activation(Vec3::new(0.0, 2.0, 0.0));
  assert_eq!(near, coordinator.active_count());
  assert!(near > 0);
  assert!(coordinator.active_chunks().all(|c| c.is_active));

  let far = coordinator.update_activation(Vec3::new(1000.0, 0.0, 1000.0));
  assert_eq!(far, 0);
  assert_eq!(coordinator.active_count(), 0);
}

#[test]
fn test_upload_and_dispose_exactly_once() {
  let mut coordinator = small_grid();
  let mut backend = RecordingBackend::default();

  assert_eq!(coordinator.upload_all(&mut backend).unwrap(), 16);
  assert_eq!(coordinator.upload_all(&mut backend).unwrap(), 0);
  assert_eq!(coordinator.uploaded_count(), 16);
  assert_eq!(backend.uploads.len(), 16);

  let upload = &backend.uploads[0];
  assert_eq!(upload.vertex_count, 25);
  assert_eq!(upload.texture, Some((5, 5)));

  assert_eq!(coordinator.dispose(&mut backend), 16);
  assert_eq!(coordinator.dispose(&mut backend), 0);
  assert_eq!(backend.releases.len(), 16);
  assert!(backend.live.is_empty());
}

#[test]
fn test_upload_active_only() {
  let mut coordinator = small_grid();
  let mut backend = RecordingBackend::default();

  let active = coordinator.update_activation(Vec3::new(-6.0, 2.0, -6.0));
  assert!(active > 0 && active < 16);

  assert_eq!(coordinator.upload_active(&mut backend).unwrap(), active);
  assert!(coordinator
    .chunks()
    .iter()
    .all(|c| c.is_uploaded() == c.is_active));

  // Remaining chunks can still be uploaded later without duplicates.
  assert_eq!(coordinator.upload_all(&mut backend).unwrap(), 16 - active);
  assert_eq!(coordinator.dispose(&mut backend), 16);
}

#[test]
fn test_backend_error_is_propagated() {
  let mut coordinator = small_grid();
  let mut backend = RecordingBackend {
    fail_after: Some(3),
    ..Default::default()
  };

  assert!(coordinator.upload_all(&mut backend).is_err());
  assert_eq!(coordinator.uploaded_count(), 3);
  assert_eq!(coordinator.dispose(&mut backend), 3);
}
