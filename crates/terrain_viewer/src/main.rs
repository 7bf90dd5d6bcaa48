//! Headless terrain viewer.
//!
//! Generates either the single-grid terrain or the chunk grid from a TOML
//! config, drives a scripted fly camera over the chunks to exercise
//! activation, and can export the grid's heightmap as a 16-bit PNG.
//!
//! ```text
//! terrain_viewer --config terrain.toml --mode chunks --frames 600
//! terrain_viewer --mode grid --export-heightmap out/height.png
//! RUST_LOG=terrain_core=debug terrain_viewer --mode chunks
//! ```

mod backend;
mod camera;
mod config;
mod export;
mod flight;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use backend::HeadlessBackend;
use config::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
	/// One large terrain grid.
	Grid,
	/// Fixed chunk grid with camera-driven activation.
	Chunks,
}

/// Procedural heightfield terrain viewer.
#[derive(Parser, Debug)]
#[command(name = "terrain_viewer")]
#[command(about = "Generates Perlin-noise terrain and flies a camera over it")]
struct Args {
	/// Path to configuration TOML file (defaults when omitted).
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Which terrain to generate.
	#[arg(short, long, value_enum, default_value_t = Mode::Chunks)]
	mode: Mode,

	/// Override the number of simulated frames.
	#[arg(short, long)]
	frames: Option<u32>,

	/// Write the grid heightmap to this PNG (grid mode).
	#[arg(long)]
	export_heightmap: Option<PathBuf>,
}

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let args = Args::parse();

	let config = match &args.config {
		Some(path) => {
			info!(path = %path.display(), "loading config");
			Config::load(path)?
		}
		None => Config::default(),
	};

	let mut backend = HeadlessBackend::new();

	match args.mode {
		Mode::Grid => {
			let terrain = flight::show_grid(&config, &mut backend)?;
			if let Some(path) = &args.export_heightmap {
				export::write_heightmap(terrain.field(), path)?;
				info!(path = %path.display(), "heightmap written");
			}
		}
		Mode::Chunks => {
			if args.export_heightmap.is_some() {
				tracing::warn!("--export-heightmap only applies to grid mode");
			}
			let frames = args.frames.unwrap_or(config.flight.frames);
			let report = flight::fly_chunks(&config, frames, &mut backend)?;
			info!(
				frames = report.frames,
				chunks = report.chunks,
				min_active = report.min_active,
				max_active = report.max_active,
				x = report.final_position.x,
				z = report.final_position.z,
				zoom = report.final_zoom,
				"flight finished"
			);
		}
	}

	info!(
		uploads = backend.uploads(),
		releases = backend.releases(),
		peak_bytes = backend.peak_bytes(),
		"done"
	);

	Ok(())
}
