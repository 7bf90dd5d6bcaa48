//! Headless stand-in for a GPU upload target.

use anyhow::{bail, Result};
use std::collections::HashMap;
use terrain_core::{HeightTexture, MeshData, MeshKey, RenderBackend};
use tracing::trace;

/// Tracks live meshes and byte totals instead of touching a device.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
	live: HashMap<MeshKey, usize>,
	uploads: usize,
	releases: usize,
	peak_bytes: usize,
}

impl HeadlessBackend {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn live_meshes(&self) -> usize {
		self.live.len()
	}

	/// Bytes currently held by live meshes and textures.
	pub fn live_bytes(&self) -> usize {
		self.live.values().sum()
	}

	pub fn peak_bytes(&self) -> usize {
		self.peak_bytes
	}

	pub fn uploads(&self) -> usize {
		self.uploads
	}

	pub fn releases(&self) -> usize {
		self.releases
	}
}

impl RenderBackend for HeadlessBackend {
	type Error = anyhow::Error;

	fn upload(&mut self, key: MeshKey, mesh: MeshData, texture: Option<HeightTexture<'_>>) -> Result<()> {
		if self.live.contains_key(&key) {
			bail!("{:?} is already uploaded", key);
		}
		let texture_bytes = match texture {
			Some(texture) => {
				let expected = texture.width as usize * texture.height as usize;
				if texture.texels.len() != expected {
					bail!(
						"{:?} texture has {} texels, expected {}x{}",
						key,
						texture.texels.len(),
						texture.width,
						texture.height
					);
				}
				std::mem::size_of_val(texture.texels)
			}
			None => 0,
		};

		let bytes = mesh.byte_len() + texture_bytes;
		trace!(?key, vertices = mesh.vertex_count, bytes = bytes, "upload");
		self.live.insert(key, bytes);
		self.uploads += 1;
		self.peak_bytes = self.peak_bytes.max(self.live_bytes());
		Ok(())
	}

	fn release(&mut self, key: MeshKey) {
		if self.live.remove(&key).is_some() {
			self.releases += 1;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use terrain_core::{noise, ChunkCoord, Mesh};

	#[test]
	fn upload_counts_mesh_and_texture_bytes() {
		let field = noise::generate_grid(4, 4, 2.0, 2, 0.5).unwrap();
		let mesh = Mesh::build(&field, 1.0, 1.0);
		let mut backend = HeadlessBackend::new();

		backend
			.upload(MeshKey::Terrain, MeshData::from_mesh(&mesh), Some(field.texture()))
			.unwrap();

		let expected = 16 * 32 + 9 * 6 * 4 + 16 * 4;
		assert_eq!(backend.live_bytes(), expected);
		assert_eq!(backend.peak_bytes(), expected);
		assert_eq!(backend.live_meshes(), 1);
	}

	#[test]
	fn duplicate_upload_is_an_error() {
		let mesh = Mesh::build(&noise::NoiseField::new(2, 2).unwrap(), 1.0, 1.0);
		let key = MeshKey::Chunk(ChunkCoord::new(0, 0));
		let mut backend = HeadlessBackend::new();

		backend.upload(key, MeshData::from_mesh(&mesh), None).unwrap();
		assert!(backend.upload(key, MeshData::from_mesh(&mesh), None).is_err());

		backend.release(key);
		backend.release(key);
		assert_eq!(backend.releases(), 1);
		assert_eq!(backend.live_bytes(), 0);
	}
}
