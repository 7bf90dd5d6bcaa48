//! Configuration parsing for the terrain viewer.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use terrain_core::{ChunkConfig, TerrainConfig};

use crate::camera::CameraConfig;

/// Root configuration. Every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
	/// Single-grid terrain settings.
	pub terrain: TerrainConfig,
	/// Chunked terrain settings.
	pub chunks: ChunkConfig,
	pub camera: CameraConfig,
	pub flight: FlightConfig,
}

/// Scripted camera flight used in place of live input.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
	/// Number of simulated frames.
	pub frames: u32,
	/// Seconds per frame.
	pub frame_time: f32,
	/// Horizontal cursor travel per frame, in pixels.
	pub turn_rate: f32,
	/// Scroll wheel steps per frame (positive zooms in).
	pub zoom_rate: f32,
	/// Fraction of movement speed spent sideways; positive strafes right.
	pub strafe: f32,
	/// Fraction of movement speed spent vertically; positive climbs.
	pub climb: f32,
	/// Fly backwards instead of forwards.
	pub reverse: bool,
	pub sprint: bool,
}

impl Default for FlightConfig {
	fn default() -> Self {
		Self {
			frames: 600,
			frame_time: 1.0 / 60.0,
			turn_rate: 1.5,
			zoom_rate: 0.0,
			strafe: 0.0,
			climb: 0.0,
			reverse: false,
			sprint: true,
		}
	}
}

impl Config {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		Self::parse(&content)
	}

	/// Parse and validate configuration TOML.
	pub fn parse(content: &str) -> Result<Self> {
		let config: Config = toml::from_str(content).context("Failed to parse config TOML")?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<()> {
		self.terrain.validate().context("Invalid [terrain] section")?;
		self.chunks.validate().context("Invalid [chunks] section")?;

		if !(self.flight.frame_time.is_finite() && self.flight.frame_time > 0.0) {
			anyhow::bail!(
				"flight.frame_time must be positive, got {}",
				self.flight.frame_time
			);
		}
		if !(self.flight.turn_rate.is_finite() && self.flight.zoom_rate.is_finite()) {
			anyhow::bail!("flight.turn_rate and flight.zoom_rate must be finite");
		}
		for (name, value) in [("strafe", self.flight.strafe), ("climb", self.flight.climb)] {
			if !(-1.0..=1.0).contains(&value) {
				anyhow::bail!("flight.{} must be in [-1, 1], got {}", name, value);
			}
		}
		if self.camera.speed < 0.0 || self.camera.sprint_speed < 0.0 {
			anyhow::bail!(
				"camera speeds must be non-negative, got {} / {}",
				self.camera.speed,
				self.camera.sprint_speed
			);
		}
		if !self.camera.position.iter().all(|v| v.is_finite()) {
			anyhow::bail!("camera.position must be finite");
		}

		Ok(())
	}
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
