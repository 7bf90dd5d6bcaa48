//! Heightmap export as 16-bit grayscale PNG.

use anyhow::{Context, Result};
use image::{ImageBuffer, Luma};
use std::path::Path;
use terrain_core::NoiseField;

/// Convert a [0, 1] field to 16-bit luminance. Values outside are clamped.
pub fn to_luma16(field: &NoiseField) -> Result<ImageBuffer<Luma<u16>, Vec<u16>>> {
	let pixels = field
		.as_slice()
		.iter()
		.map(|v| (v.clamp(0.0, 1.0) * u16::MAX as f32).round() as u16)
		.collect();
	ImageBuffer::from_raw(field.width() as u32, field.height() as u32, pixels)
		.context("Heightmap buffer does not match field dimensions")
}

/// Write `field` to `path` as a PNG.
pub fn write_heightmap(field: &NoiseField, path: &Path) -> Result<()> {
	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		std::fs::create_dir_all(parent)
			.with_context(|| format!("Failed to create output dir: {}", parent.display()))?;
	}
	to_luma16(field)?
		.save(path)
		.with_context(|| format!("Failed to write heightmap: {}", path.display()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn luma_maps_unit_range() {
		let field = NoiseField::from_vec(2, 2, vec![0.0, 0.5, 1.0, 2.0]).unwrap();
		let img = to_luma16(&field).unwrap();

		assert_eq!(img.dimensions(), (2, 2));
		assert_eq!(img.get_pixel(0, 0).0[0], 0);
		assert_eq!(img.get_pixel(1, 0).0[0], 32768);
		assert_eq!(img.get_pixel(0, 1).0[0], u16::MAX);
		assert_eq!(img.get_pixel(1, 1).0[0], u16::MAX);
	}

	#[test]
	fn write_and_reload_png() {
		let field = terrain_core::noise::generate_grid(8, 4, 2.0, 3, 0.5).unwrap();
		let dir = std::env::temp_dir().join(format!("terrain_viewer_export_{}", std::process::id()));
		let path = dir.join("height.png");

		write_heightmap(&field, &path).unwrap();
		let reloaded = image::open(&path).unwrap().into_luma16();
		assert_eq!(reloaded, to_luma16(&field).unwrap());

		std::fs::remove_dir_all(&dir).unwrap();
	}
}
