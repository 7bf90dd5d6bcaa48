use super::*;
use terrain_core::SmoothingKernel;

#[test]
fn test_empty_config_uses_defaults() {
	let config = Config::parse("").unwrap();
	assert_eq!(config.terrain, TerrainConfig::default());
	assert_eq!(config.chunks, ChunkConfig::default());
	assert_eq!(config.flight, FlightConfig::default());
}

#[test]
fn test_sections_override_defaults() {
	let config = Config::parse(
		r#"
			[terrain]
			width = 128
			height = 128
			smoothing = { kind = "binomial3x3" }

			[chunks]
			chunk_size = 32
			render_distance = 128.0
			frequency = 0.02

			[chunks.biome]
			sharpness = 4.0

			[camera]
			position = [1.0, 20.0, -3.0]

			[flight]
			frames = 10
		"#,
	)
	.unwrap();

	assert_eq!(config.terrain.width, 128);
	assert_eq!(config.terrain.smoothing, Some(SmoothingKernel::Binomial3x3));
	assert_eq!(config.chunks.chunk_size, 32);
	assert_eq!(config.chunks.octaves, 4);
	let biome = config.chunks.biome.unwrap();
	assert_eq!(biome.sharpness, 4.0);
	assert_eq!(biome.mask_frequency, 0.01);
	assert_eq!(config.camera.position, [1.0, 20.0, -3.0]);
	assert_eq!(config.camera.yaw, -90.0);
	assert_eq!(config.flight.frames, 10);
}

#[test]
fn test_invalid_core_values_are_reported() {
	let err = Config::parse("[chunks]\nchunk_size = 0\n").unwrap_err();
	let message = format!("{:#}", err);
	assert!(message.contains("[chunks]"), "{}", message);
	assert!(message.contains("chunk_size"), "{}", message);

	assert!(Config::parse("[terrain]\nnoise = { octaves = 0 }\n").is_err());
}

#[test]
fn test_invalid_flight_is_rejected() {
	assert!(Config::parse("[flight]\nframe_time = 0.0\n").is_err());
	assert!(Config::parse("[camera]\nspeed = -1.0\n").is_err());
	assert!(Config::parse("[flight]\nstrafe = 1.5\n").is_err());
	assert!(Config::parse("[flight]\nclimb = -2.0\n").is_err());
	assert!(Config::parse("[flight]\nstrafe = -0.5\nclimb = 1.0\n").is_ok());
}

#[test]
fn test_malformed_toml_is_rejected() {
	assert!(Config::parse("[terrain\nwidth = 3").is_err());
}
