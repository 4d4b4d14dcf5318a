use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use image::{GrayImage, RgbImage};
use noise_core::{Fractal, Perlin, Point, Seamless2D};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod biome;
mod config;
mod raster;

use biome::Biomes;
use config::RenderConfig;
use raster::Raster;

// Number of 3D and 4D slices, taken at depth i / 8
const SLICES: u32 = 10;

type World = Seamless2D<Fractal<Perlin<f32, 4>, f32>, f32>;

// usage: app [config.json] [output dir]
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => RenderConfig::load(Path::new(&path))?,
        None => RenderConfig::default(),
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| ".".to_string()));

    config.validate()?;
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let start = Instant::now();
    render(&config, &out_dir)?;
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "done");
    Ok(())
}

fn render(config: &RenderConfig, out_dir: &Path) -> Result<()> {
    let raster = Raster::from(config);

    if config.plain_2d {
        let noise = Perlin::<f32, 2>::with_config(config.seed, &config.perlin)?;
        let field = raster.sample(&noise, |x, y| Point::new([x, y]));
        save_gray(&raster.to_gray(&field), &out_dir.join("2d.png"))?;
    }

    if config.slices_3d {
        let noise = Perlin::<f32, 3>::with_config(config.seed, &config.perlin)?;
        for i in 0..SLICES {
            let z = i as f32 / 8.0;
            let field = raster.sample(&noise, |x, y| Point::new([x, y, z]));
            save_gray(&raster.to_gray(&field), &out_dir.join(format!("3d_{i}.png")))?;
        }
    }

    if config.slices_4d {
        let noise = Perlin::<f32, 4>::with_config(config.seed, &config.perlin)?;
        for i in 0..SLICES {
            let zw = i as f32 / 8.0;
            let field = raster.sample(&noise, |x, y| Point::new([x, y, zw, zw]));
            save_gray(&raster.to_gray(&field), &out_dir.join(format!("4d_{i}.png")))?;
        }
    }

    if config.seamless || config.world {
        let noise = World::world(
            config.seed,
            &config.perlin,
            &config.fractal,
            config.cells_x as f32,
            config.cells_y as f32,
        )?;
        let field = raster.sample(&noise, |x, y| Point::new([x, y]));

        if config.seamless {
            let path = out_dir.join(format!("{}_seamless.png", config.seed));
            save_gray(&raster.to_gray(&field), &path)?;
        }
        if config.world {
            let (img, unclassified) = raster.to_world(&field, &Biomes::world());
            if unclassified > 0 {
                warn!(unclassified, "pixels below every biome cutoff left black");
            }
            let path = out_dir.join(format!("{}_world.png", config.seed));
            save_rgb(&img, &path)?;
        }
    }

    Ok(())
}

fn save_gray(img: &GrayImage, path: &Path) -> Result<()> {
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "saved grayscale image");
    Ok(())
}

fn save_rgb(img: &RgbImage, path: &Path) -> Result<()> {
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "saved world map");
    Ok(())
}
