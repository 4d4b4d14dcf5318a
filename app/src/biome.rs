use palette::Srgb;

// One colour band of the world palette
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Biome {
    pub name: &'static str,
    pub cutoff: f32,
    pub color: Srgb<u8>,
}

// Colour bands ordered by descending cutoff.
// A value takes the band with the highest cutoff strictly below it.
#[derive(Clone, Debug)]
pub struct Biomes(Vec<Biome>);

impl Biomes {
    pub fn new(mut bands: Vec<Biome>) -> Self {
        bands.sort_by(|a, b| b.cutoff.total_cmp(&a.cutoff));
        Self(bands)
    }

    // Water, shore, grass, forest, mountains and snow
    pub fn world() -> Self {
        let band = |name: &'static str, cutoff: f32, r: u8, g: u8, b: u8| Biome {
            name,
            cutoff,
            color: Srgb::new(r, g, b),
        };
        Self::new(vec![
            band("snow", 0.5, 255, 255, 255),
            band("mountains", 0.35, 150, 150, 160),
            band("forest", 0.25, 60, 130, 30),
            band("grass", 0.15, 120, 190, 90),
            band("shore", 0.1, 229, 221, 0),
            band("water", -1.0, 0, 0, 255),
        ])
    }

    // None when the value is at or below the lowest cutoff
    pub fn classify(&self, value: f32) -> Option<&Biome> {
        self.0.iter().find(|b| b.cutoff < value)
    }

    pub fn bands(&self) -> &[Biome] {
        &self.0
    }
}
