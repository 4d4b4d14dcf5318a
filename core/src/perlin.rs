use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::NoiseGenerator;
use crate::error::NoiseError;
use crate::math::{MAX_SMOOTHNESS, Real, Smoothstep, floor_mod, lerp};
use crate::point::Point;
use crate::vector::Vector;

// Static configuration of a Perlin generator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerlinConfig {
    // Order of the smoothstep used to blend across a cell
    pub smoothness: u32,
    // Size of the gradient and permutation tables
    pub gradients: usize,
}

impl Default for PerlinConfig {
    fn default() -> Self {
        Self {
            smoothness: 2,
            gradients: 256,
        }
    }
}

impl PerlinConfig {
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.gradients == 0 {
            return Err(NoiseError::NoGradients);
        }
        if self.smoothness > MAX_SMOOTHNESS {
            return Err(NoiseError::SmoothnessTooHigh {
                order: self.smoothness,
                max: MAX_SMOOTHNESS,
            });
        }
        Ok(())
    }
}

// Gradient noise in D dimensions.
//
// Every integer grid node is hashed through a seeded permutation table onto one
// of a fixed set of random unit gradients. A sample blends the dot products of
// the 2^D surrounding gradients with their offsets to the sample point.
// Output lies in [-1, 1]; the tables never change after construction, so one
// instance can be shared between threads.
#[derive(Clone, Debug)]
pub struct Perlin<T, const D: usize> {
    seed: u64,
    permutations: Vec<usize>,
    gradients: Vec<Vector<T, D>>,
    smoothstep: Smoothstep<T>,
}

impl<T: Real, const D: usize> Perlin<T, D> {
    // Generator with the default configuration (quintic blend, 256 gradients)
    pub fn new(seed: u64) -> Self {
        Self::build(seed, &PerlinConfig::default())
    }

    pub fn with_config(seed: u64, config: &PerlinConfig) -> Result<Self, NoiseError> {
        config.validate()?;
        Ok(Self::build(seed, config))
    }

    // config must already be validated
    fn build(seed: u64, config: &PerlinConfig) -> Self {
        const { assert!(D > 0, "Perlin noise needs at least one dimension") };

        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut permutations: Vec<usize> = (0..config.gradients).collect();
        permutations.shuffle(&mut rng);

        let mut rejected = 0;
        let gradients = (0..config.gradients)
            .map(|_| {
                let (gradient, misses) = Vector::sample_unit(&mut rng);
                rejected += misses;
                gradient
            })
            .collect();

        debug!(
            seed,
            dimensions = D,
            gradients = config.gradients,
            smoothness = config.smoothness,
            rejected,
            "built perlin tables"
        );

        Self {
            seed,
            permutations,
            gradients,
            smoothstep: Smoothstep::from_validated(config.smoothness),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn smoothness(&self) -> u32 {
        self.smoothstep.order()
    }

    pub fn permutations(&self) -> &[usize] {
        &self.permutations
    }

    pub fn gradients(&self) -> &[Vector<T, D>] {
        &self.gradients
    }

    // Gradient assigned to a grid node. Grid coordinates are i64.
    // The coordinates are folded right to left through the permutation table,
    // each step reduced with floor-mod so negative nodes hash like positive ones.
    pub fn gradient_at(&self, node: &Point<i64, D>) -> &Vector<T, D> {
        let n = self.permutations.len() as i64;
        let mut idx = floor_mod(node[D - 1], n);
        for d in (0..D - 1).rev() {
            idx = floor_mod(node[d].wrapping_add(self.permutations[idx as usize] as i64), n);
        }
        &self.gradients[idx as usize]
    }
}

impl<T: Real, const D: usize> NoiseGenerator<T, D> for Perlin<T, D> {
    fn at(&self, p: &Point<T, D>) -> T {
        let base: Point<i64, D> = p.floor();
        let corners = 1usize << D;

        // corner i offsets axis d by bit d of i
        let mut values: SmallVec<[T; 16]> = (0..corners)
            .map(|corner| {
                let mut node = base;
                for d in 0..D {
                    if (corner >> d) & 1 == 1 {
                        node[d] = node[d].wrapping_add(1);
                    }
                }
                let offset = *p - node.map(T::from_grid);
                self.gradient_at(&node).dot(&offset)
            })
            .collect();

        // collapse one axis at a time, axis 0 first
        let mut len = corners;
        for d in 0..D {
            let t = self.smoothstep.apply(p[d] - T::from_grid(base[d]));
            for i in (0..len).step_by(2) {
                values[i / 2] = lerp(values[i], values[i + 1], t);
            }
            len /= 2;
        }

        // rounding may push the blend slightly past the theoretical range
        num_traits::clamp(values[0], -T::one(), T::one())
    }
}
