use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use orb_renderer::{render, render_parallel, Camera, PixelBuffer, PixelFormat};

mod cli;
mod config;
mod output;

use cli::Args;
use config::SceneFile;
use output::save_png;

/// Initialize the logger with the specified level
fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let scene_file = match &args.scene {
        Some(path) => SceneFile::load(path)?,
        None => SceneFile::lesson()?,
    };

    let start = Instant::now();
    let scene = scene_file.build()?;
    info!("Scene with {} spheres built in {:?}", scene.len(), start.elapsed());

    let config = args.overrides().over(&scene_file.render).to_config();
    config.validate()?;
    let camera = Camera::for_image(args.width, args.height)?;

    info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        args.width, args.height, config.samples_per_pixel, config.max_depth
    );

    let mut pixels = vec![0u8; args.width as usize * args.height as usize * 4];
    let mut buffer = PixelBuffer::new(&mut pixels, args.width, args.height, PixelFormat::Rgba)?;

    let start = Instant::now();
    if args.threads == 1 {
        render(&camera, &scene, &config, &mut buffer)?;
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build()
            .context("Failed to build render thread pool")?;
        pool.install(|| render_parallel(&camera, &scene, &config, &mut buffer))?;
    }
    info!("Rendered in {:?}", start.elapsed());

    save_png(pixels, args.width, args.height, &args.output)
}
