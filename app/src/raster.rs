use image::{GrayImage, Luma, Rgb, RgbImage};
use noise_core::{NoiseGenerator, Point};

use crate::biome::Biomes;
use crate::config::RenderConfig;

// Pixel grid laid over `cells_x` × `cells_y` noise cells
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub cells_x: u32,
    pub cells_y: u32,
}

impl From<&RenderConfig> for Raster {
    fn from(config: &RenderConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            cells_x: config.cells_x,
            cells_y: config.cells_y,
        }
    }
}

impl Raster {
    // Noise-space position of pixel (x, y)
    pub fn position(&self, x: u32, y: u32) -> (f32, f32) {
        (
            x as f32 / (self.width as f32 / self.cells_x as f32),
            y as f32 / (self.height as f32 / self.cells_y as f32),
        )
    }

    // Row-major samples of the generator, `map` lifts a pixel position into
    // the generator's space
    pub fn sample<G, const D: usize>(
        &self,
        generator: &G,
        map: impl Fn(f32, f32) -> Point<f32, D>,
    ) -> Vec<f32>
    where
        G: NoiseGenerator<f32, D>,
    {
        let mut field = Vec::with_capacity(self.width as usize * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let (px, py) = self.position(x, y);
                field.push(generator.at(&map(px, py)).clamp(-1.0, 1.0));
            }
        }
        field
    }

    pub fn to_gray(&self, field: &[f32]) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            Luma([gray(field[self.index(x, y)])])
        })
    }

    // Classified colour image and the number of pixels no band covered
    // (left black)
    pub fn to_world(&self, field: &[f32], biomes: &Biomes) -> (RgbImage, usize) {
        let mut unclassified = 0;
        let img = RgbImage::from_fn(self.width, self.height, |x, y| {
            match biomes.classify(field[self.index(x, y)]) {
                Some(biome) => {
                    let (r, g, b) = biome.color.into_components();
                    Rgb([r, g, b])
                }
                None => {
                    unclassified += 1;
                    Rgb([0, 0, 0])
                }
            }
        });
        (img, unclassified)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

// [-1, 1] onto 0..=255
pub fn gray(value: f32) -> u8 {
    ((value.clamp(-1.0, 1.0) + 1.0) / 2.0 * 255.0) as u8
}
