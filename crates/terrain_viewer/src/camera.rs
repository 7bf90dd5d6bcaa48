//! Free-fly camera state driven by keyboard and mouse input.
//!
//! Only the position and orientation matter here: the camera position feeds
//! chunk activation. View and projection matrices belong to the renderer.

use glam::{Vec2, Vec3};
use serde::Deserialize;

// =============================================================================
// Config
// =============================================================================

/// Keyboard movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
	Forward,
	Backward,
	Left,
	Right,
	Up,
	Down,
}

/// Camera tuning loaded from config.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
	pub position: [f32; 3],
	/// Degrees; -90 looks down -z.
	pub yaw: f32,
	pub pitch: f32,
	/// Units per second.
	pub speed: f32,
	pub sprint_speed: f32,
	/// Degrees per pixel of mouse travel.
	pub sensitivity: f32,
	/// Vertical field of view in degrees.
	pub zoom: f32,
}

impl Default for CameraConfig {
	fn default() -> Self {
		Self {
			position: [0.0, 12.0, 0.0],
			yaw: -90.0,
			pitch: 0.0,
			speed: 2.5,
			sprint_speed: 5.0,
			sensitivity: 0.1,
			zoom: 45.0,
		}
	}
}

pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 90.0;
const PITCH_LIMIT: f32 = 89.0;

// =============================================================================
// Camera
// =============================================================================

/// Fly camera with yaw/pitch orientation.
#[derive(Clone, Debug, PartialEq)]
pub struct FlyCamera {
	pub position: Vec3,
	pub front: Vec3,
	pub right: Vec3,
	pub world_up: Vec3,
	pub yaw: f32,
	pub pitch: f32,
	pub speed: f32,
	pub sprint_speed: f32,
	pub sensitivity: f32,
	pub zoom: f32,
}

impl FlyCamera {
	pub fn new(config: &CameraConfig) -> Self {
		let mut camera = Self {
			position: Vec3::from_array(config.position),
			front: Vec3::NEG_Z,
			right: Vec3::X,
			world_up: Vec3::Y,
			yaw: config.yaw,
			pitch: config.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
			speed: config.speed,
			sprint_speed: config.sprint_speed,
			sensitivity: config.sensitivity,
			zoom: config.zoom.clamp(MIN_ZOOM, MAX_ZOOM),
		};
		camera.update_vectors();
		camera
	}

	/// Move along the camera basis for `dt` seconds.
	pub fn process_keyboard(&mut self, direction: Movement, sprint: bool, dt: f32) {
		let speed = if sprint { self.sprint_speed } else { self.speed };
		let velocity = speed * dt;
		let delta = match direction {
			Movement::Forward => self.front,
			Movement::Backward => -self.front,
			Movement::Left => -self.right,
			Movement::Right => self.right,
			Movement::Up => self.world_up,
			Movement::Down => -self.world_up,
		};
		self.position += delta * velocity;
	}

	/// Rotate by a mouse offset in pixels (`y` up).
	pub fn process_mouse_movement(&mut self, offset: Vec2, constrain_pitch: bool) {
		self.yaw += offset.x * self.sensitivity;
		self.pitch += offset.y * self.sensitivity;
		if constrain_pitch {
			self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
		}
		self.update_vectors();
	}

	pub fn process_mouse_scroll(&mut self, y_offset: f32) {
		self.zoom = (self.zoom - y_offset).clamp(MIN_ZOOM, MAX_ZOOM);
	}

	fn update_vectors(&mut self) {
		let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
		self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize();
		self.right = self.front.cross(self.world_up).normalize();
	}
}

// =============================================================================
// Mouse look
// =============================================================================

/// Cursor tracking between mouse events.
///
/// Owned by the input loop and passed explicitly; the first event after
/// creation (or [`MouseLook::reset`]) produces no rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MouseLook {
	last: Option<Vec2>,
}

impl MouseLook {
	pub fn new() -> Self {
		Self::default()
	}

	/// Offset since the previous cursor position, with `y` flipped so that
	/// moving the mouse up is positive.
	pub fn offset(&mut self, cursor: Vec2) -> Vec2 {
		let offset = match self.last {
			Some(last) => Vec2::new(cursor.x - last.x, last.y - cursor.y),
			None => Vec2::ZERO,
		};
		self.last = Some(cursor);
		offset
	}

	/// Forget the last cursor position (e.g. after the cursor is recaptured).
	pub fn reset(&mut self) {
		self.last = None;
	}
}

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;
