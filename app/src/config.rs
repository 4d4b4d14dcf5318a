use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use noise_core::{FractalConfig, PerlinConfig};
use serde::{Deserialize, Serialize};

// Everything the demo renders, loadable from a JSON file.
// Missing fields fall back to the defaults below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    // noise cells across the image; also the tile size of the seamless maps
    pub cells_x: u32,
    pub cells_y: u32,
    pub seed: u64,
    pub perlin: PerlinConfig,
    pub fractal: FractalConfig,

    // which images to produce
    pub plain_2d: bool,
    pub slices_3d: bool,
    pub slices_4d: bool,
    pub seamless: bool,
    pub world: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 768,
            height: 512,
            cells_x: 6,
            cells_y: 4,
            seed: 10,
            perlin: PerlinConfig::default(),
            fractal: FractalConfig {
                octaves: 50,
                ..FractalConfig::default()
            },
            plain_2d: false,
            slices_3d: false,
            slices_4d: false,
            seamless: true,
            world: true,
        }
    }
}

impl RenderConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!("image size must be positive, got {}x{}", self.width, self.height);
        }
        if self.cells_x == 0 || self.cells_y == 0 {
            bail!(
                "cell counts must be positive, got {}x{}",
                self.cells_x,
                self.cells_y
            );
        }
        Ok(())
    }
}
