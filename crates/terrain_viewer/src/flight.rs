//! Scripted frame loop: camera input → chunk activation → logging.

use anyhow::{Context, Result};
use glam::{Vec2, Vec3};
use terrain_core::{ChunkCoordinator, Terrain};
use tracing::{debug, info};

use crate::backend::HeadlessBackend;
use crate::camera::{FlyCamera, MouseLook, Movement};
use crate::config::{Config, FlightConfig};

/// Summary of a scripted flight over the chunk grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightReport {
	pub frames: u32,
	pub chunks: usize,
	pub min_active: usize,
	pub max_active: usize,
	pub final_position: Vec3,
	/// Field of view at the end of the flight, in degrees.
	pub final_zoom: f32,
}

/// Per-frame input for the scripted flight.
pub struct Pilot {
	look: MouseLook,
	cursor: Vec2,
	flight: FlightConfig,
}

impl Pilot {
	pub fn new(flight: FlightConfig) -> Self {
		Self {
			look: MouseLook::new(),
			cursor: Vec2::ZERO,
			flight,
		}
	}

	/// Feed one frame of synthetic input to `camera`.
	pub fn step(&mut self, camera: &mut FlyCamera) {
		self.cursor.x += self.flight.turn_rate;
		let offset = self.look.offset(self.cursor);
		camera.process_mouse_movement(offset, true);
		if self.flight.zoom_rate != 0.0 {
			camera.process_mouse_scroll(self.flight.zoom_rate);
		}

		let dt = self.flight.frame_time;
		let sprint = self.flight.sprint;
		let ahead = if self.flight.reverse { Movement::Backward } else { Movement::Forward };
		camera.process_keyboard(ahead, sprint, dt);
		if let Some((direction, share)) = axis(self.flight.strafe, Movement::Right, Movement::Left) {
			camera.process_keyboard(direction, sprint, dt * share);
		}
		if let Some((direction, share)) = axis(self.flight.climb, Movement::Up, Movement::Down) {
			camera.process_keyboard(direction, sprint, dt * share);
		}
	}
}

/// Split a signed axis value into a direction and its magnitude.
fn axis(value: f32, positive: Movement, negative: Movement) -> Option<(Movement, f32)> {
	if value > 0.0 {
		Some((positive, value))
	} else if value < 0.0 {
		Some((negative, -value))
	} else {
		None
	}
}

/// Generate the chunk grid, fly the camera over it and release everything.
pub fn fly_chunks(config: &Config, frames: u32, backend: &mut HeadlessBackend) -> Result<FlightReport> {
	let mut coordinator =
		ChunkCoordinator::from_config(config.chunks).context("Failed to generate chunk grid")?;
	info!(
		chunks = coordinator.len(),
		vertices = coordinator.stats().vertices,
		elapsed_ms = coordinator.stats().elapsed_ms(),
		"chunk grid ready"
	);

	let uploaded = coordinator.upload_all(backend);
	if let Err(err) = uploaded {
		coordinator.dispose(backend);
		return Err(err.context("Failed to upload chunks"));
	}

	let mut camera = FlyCamera::new(&config.camera);
	let mut pilot = Pilot::new(config.flight);
	let mut active = coordinator.update_activation(camera.position);
	let (mut min_active, mut max_active) = (active, active);
	info!(active = active, "initial activation");

	for frame in 0..frames {
		pilot.step(&mut camera);
		let now = coordinator.update_activation(camera.position);
		if now != active {
			debug!(
				frame = frame,
				active = now,
				x = camera.position.x,
				z = camera.position.z,
				"active chunk count changed"
			);
			active = now;
		}
		min_active = min_active.min(now);
		max_active = max_active.max(now);
	}

	let released = coordinator.dispose(backend);
	debug!(released = released, "released chunk meshes");

	Ok(FlightReport {
		frames,
		chunks: coordinator.len(),
		min_active,
		max_active,
		final_position: camera.position,
		final_zoom: camera.zoom,
	})
}

/// Generate the single-grid terrain, upload it and release it again.
pub fn show_grid(config: &Config, backend: &mut HeadlessBackend) -> Result<Terrain> {
	let mut terrain = Terrain::generate(config.terrain).context("Failed to generate terrain")?;
	info!(
		width = config.terrain.width,
		height = config.terrain.height,
		triangles = terrain.mesh().triangle_count(),
		elapsed_ms = terrain.stats().elapsed_ms(),
		"terrain ready"
	);

	terrain.upload(backend).context("Failed to upload terrain")?;
	terrain.dispose(backend);
	Ok(terrain)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::camera::CameraConfig;
	use terrain_core::{ChunkConfig, TerrainConfig};

	fn small_config() -> Config {
		Config {
			terrain: TerrainConfig::new(16, 16, 1.0, 4.0),
			chunks: ChunkConfig::new(4, 16.0, 2.0, 2, 0.5),
			..Default::default()
		}
	}

	#[test]
	fn flight_releases_every_chunk() {
		let config = small_config();
		let mut backend = HeadlessBackend::new();

		let report = fly_chunks(&config, 30, &mut backend).unwrap();

		assert_eq!(report.chunks, 64);
		assert_eq!(backend.uploads(), 64);
		assert_eq!(backend.releases(), 64);
		assert_eq!(backend.live_meshes(), 0);
		assert!(report.min_active <= report.max_active);
		assert!(report.max_active > 0);
	}

	#[test]
	fn flight_moves_camera_forward() {
		let config = small_config();
		let mut backend = HeadlessBackend::new();
		let report = fly_chunks(&config, 60, &mut backend).unwrap();

		let start = Vec3::from_array(config.camera.position);
		assert!(report.final_position.distance(start) > 1.0);
	}

	#[test]
	fn pilot_first_frame_does_not_turn() {
		let mut camera = FlyCamera::new(&Default::default());
		let yaw = camera.yaw;
		let mut pilot = Pilot::new(FlightConfig::default());

		pilot.step(&mut camera);
		assert_eq!(camera.yaw, yaw);
		pilot.step(&mut camera);
		assert!(camera.yaw > yaw);
	}

	#[test]
	fn pilot_strafes_and_climbs() {
		let start = CameraConfig {
			position: [0.0, 0.0, 0.0],
			..Default::default()
		};
		let mut camera = FlyCamera::new(&start);
		let mut pilot = Pilot::new(FlightConfig {
			frame_time: 1.0,
			turn_rate: 0.0,
			strafe: 0.5,
			climb: -1.0,
			sprint: false,
			..Default::default()
		});

		pilot.step(&mut camera);
		// speed 2.5: forward 2.5 along -z, right 1.25, down 2.5.
		assert!((camera.position - Vec3::new(1.25, -2.5, -2.5)).length() < 1e-5);

		let mut reverse = Pilot::new(FlightConfig {
			frame_time: 1.0,
			turn_rate: 0.0,
			reverse: true,
			sprint: false,
			..Default::default()
		});
		let mut camera = FlyCamera::new(&start);
		reverse.step(&mut camera);
		assert!((camera.position - Vec3::new(0.0, 0.0, 2.5)).length() < 1e-5);
	}

	#[test]
	fn flight_reports_zoom() {
		let mut config = small_config();
		config.flight.zoom_rate = 1.0;
		let mut backend = HeadlessBackend::new();

		let report = fly_chunks(&config, 10, &mut backend).unwrap();
		assert_eq!(report.final_zoom, config.camera.zoom - 10.0);
	}

	#[test]
	fn grid_round_trip_leaves_backend_empty() {
		let config = small_config();
		let mut backend = HeadlessBackend::new();

		let terrain = show_grid(&config, &mut backend).unwrap();
		assert!(!terrain.is_uploaded());
		assert_eq!(backend.uploads(), 1);
		assert_eq!(backend.live_meshes(), 0);
	}
}
