use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::NoiseGenerator;
use crate::error::{LawKind, NoiseError};
use crate::math::{Real, Smoothstep};
use crate::perlin::{Perlin, PerlinConfig};
use crate::point::Point;

// Per-octave multiplier as a function of the 0-based octave index i
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "law", rename_all = "snake_case")]
pub enum OctaveLaw {
    // value
    Constant { value: f64 },
    // 1 + rate * i
    Linear { rate: f64 },
    // 1 / (1 + rate * i)
    Hyperbolic { rate: f64 },
    // base^i
    Exponential { base: f64 },
    // (i + 1)^exponent
    Polynomial { exponent: f64 },
    // exp(-i^2 / (2 width^2))
    GaussianDecay { width: f64 },
    // exp(i^2 / (2 width^2))
    GaussianGrowth { width: f64 },
}

impl OctaveLaw {
    pub fn at(&self, octave: usize) -> f64 {
        let i = octave as f64;
        match *self {
            OctaveLaw::Constant { value } => value,
            OctaveLaw::Linear { rate } => 1.0 + rate * i,
            OctaveLaw::Hyperbolic { rate } => 1.0 / (1.0 + rate * i),
            OctaveLaw::Exponential { base } => base.powf(i),
            OctaveLaw::Polynomial { exponent } => (i + 1.0).powf(exponent),
            OctaveLaw::GaussianDecay { width } => (-(i * i) / (2.0 * width * width)).exp(),
            OctaveLaw::GaussianGrowth { width } => ((i * i) / (2.0 * width * width)).exp(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalConfig {
    pub octaves: usize,
    // Smoothstep order of the final renormalization
    pub contrast: u32,
    pub weight: OctaveLaw,
    pub frequency: OctaveLaw,
}

impl Default for FractalConfig {
    // weight 1/(i+1) at frequency i+1
    fn default() -> Self {
        Self {
            octaves: 3,
            contrast: 1,
            weight: OctaveLaw::Hyperbolic { rate: 1.0 },
            frequency: OctaveLaw::Linear { rate: 1.0 },
        }
    }
}

// Sums weighted, frequency-scaled octaves of an inner generator.
//
// The raw sum is mapped from [-1, 1] to [0, 1], pushed through a smoothstep of
// order `contrast` and mapped back. Smoothstep saturates outside [0, 1], so the
// result stays in [-1, 1] for any law and octave count; the price is a
// nonlinear reshaping of the value distribution. Contrast 0 is a plain clamp.
#[derive(Clone, Debug)]
pub struct Fractal<G, T> {
    inner: G,
    weights: Vec<T>,
    frequencies: Vec<T>,
    contrast: Smoothstep<T>,
}

impl<G, T: Real> Fractal<G, T> {
    pub fn new(inner: G, config: &FractalConfig) -> Result<Self, NoiseError> {
        Self::with_laws(
            inner,
            config.octaves,
            config.contrast,
            |i| config.weight.at(i),
            |i| config.frequency.at(i),
        )
    }

    // Like `new` but with arbitrary weight and frequency laws
    pub fn with_laws<W, F>(
        inner: G,
        octaves: usize,
        contrast: u32,
        weight: W,
        frequency: F,
    ) -> Result<Self, NoiseError>
    where
        W: Fn(usize) -> f64,
        F: Fn(usize) -> f64,
    {
        if octaves == 0 {
            return Err(NoiseError::NoOctaves);
        }
        let renormalize = Smoothstep::new(contrast)?;

        let weights = precompute(octaves, LawKind::Weight, weight)?;
        let frequencies = precompute(octaves, LawKind::Frequency, frequency)?;
        debug!(octaves, contrast, "precomputed fractal octaves");

        Ok(Self {
            inner,
            weights,
            frequencies,
            contrast: renormalize,
        })
    }

    pub fn octaves(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    pub fn frequencies(&self) -> &[T] {
        &self.frequencies
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }
}

impl<T: Real, const D: usize> Fractal<Perlin<T, D>, T> {
    // Fractal noise over a freshly seeded Perlin generator
    pub fn perlin(
        seed: u64,
        perlin: &PerlinConfig,
        fractal: &FractalConfig,
    ) -> Result<Self, NoiseError> {
        Self::new(Perlin::with_config(seed, perlin)?, fractal)
    }
}

fn precompute<T: Real>(
    octaves: usize,
    kind: LawKind,
    law: impl Fn(usize) -> f64,
) -> Result<Vec<T>, NoiseError> {
    (0..octaves)
        .map(|octave| {
            let value = T::from_f64(law(octave));
            if value.is_finite() {
                Ok(value)
            } else {
                Err(NoiseError::NonFiniteOctave { octave, kind })
            }
        })
        .collect()
}

impl<G, T, const D: usize> NoiseGenerator<T, D> for Fractal<G, T>
where
    T: Real,
    G: NoiseGenerator<T, D>,
{
    fn at(&self, p: &Point<T, D>) -> T {
        let sum = self
            .weights
            .iter()
            .zip(&self.frequencies)
            .fold(T::zero(), |acc, (&w, &f)| acc + w * self.inner.at(&p.scale(f)));

        let two = T::from_f64(2.0);
        self.contrast.apply((sum + T::one()) / two) * two - T::one()
    }
}
