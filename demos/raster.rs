//! Rasterizes one frame of the lattice demo and writes it to a PNG.
//!
//! Usage: `cargo run --example raster --features image -- [output.png]`

use gridline::{plot, Config, FrameInput, RasterPipeline, Target};
use image_::{Rgb, RgbImage};
use log::info;
use vek::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "raster.png".into());
    let config = Config::default();

    let mut pipeline = RasterPipeline::with_config(&config)?;
    let count = pipeline.assemble(&FrameInput {
        vertices: [Vec2::new(-80, -60), Vec2::new(90, -20), Vec2::new(-10, 85)],
        center: Vec2::zero(),
        radius: 45,
        fill: true,
    });

    let mut img = RgbImage::new(config.viewport.width, config.viewport.height);
    img.clear(Rgb([0, 0, 0]));
    let written = plot(&mut img, pipeline.points().raw().iter().copied(), Rgb([255, 255, 255]));

    img.save(&path)?;
    info!("plotted {} of {} points to {}", written, count, path);
    Ok(())
}
