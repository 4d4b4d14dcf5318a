use num_traits::AsPrimitive;

use crate::NoiseGenerator;
use crate::error::NoiseError;
use crate::fractal::{Fractal, FractalConfig};
use crate::math::Real;
use crate::perlin::{Perlin, PerlinConfig};
use crate::point::Point;

// 2D noise that tiles with period `width` along x and `height` along y.
//
// A point (x, y) is lifted onto two circles in 4D,
//   (cos 2πs, sin 2πs) * width / 2π  with s = x / width
//   (cos 2πt, sin 2πt) * height / 2π with t = y / height
// and the inner 4D generator is sampled there. The circumferences equal the
// tile size, so the lifted path covers as much noise as the flat tile would.
#[derive(Clone, Debug)]
pub struct Seamless2D<G, T> {
    inner: G,
    width: T,
    height: T,
}

impl<G, T> Seamless2D<G, T>
where
    T: Real,
    G: NoiseGenerator<T, 4>,
{
    pub fn new(inner: G, width: T, height: T) -> Result<Self, NoiseError> {
        let valid = |v: T| v > T::zero() && v.is_finite();
        if !valid(width) || !valid(height) {
            return Err(NoiseError::InvalidTileSize {
                width: AsPrimitive::<f64>::as_(width),
                height: AsPrimitive::<f64>::as_(height),
            });
        }
        Ok(Self {
            inner,
            width,
            height,
        })
    }

    pub fn width(&self) -> T {
        self.width
    }

    pub fn height(&self) -> T {
        self.height
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    // Position on the 4D torus the inner generator is sampled at
    pub fn lift(&self, p: &Point<T, 2>) -> Point<T, 4> {
        let two_pi = T::TAU();
        let (sin_s, cos_s) = (p[0] / self.width * two_pi).sin_cos();
        let (sin_t, cos_t) = (p[1] / self.height * two_pi).sin_cos();
        let rx = self.width / two_pi;
        let ry = self.height / two_pi;
        Point::new([cos_s * rx, cos_t * ry, sin_s * rx, sin_t * ry])
    }
}

impl<T: Real> Seamless2D<Fractal<Perlin<T, 4>, T>, T> {
    // Tileable fractal Perlin noise, the stack used for world maps
    pub fn world(
        seed: u64,
        perlin: &PerlinConfig,
        fractal: &FractalConfig,
        width: T,
        height: T,
    ) -> Result<Self, NoiseError> {
        Self::new(Fractal::perlin(seed, perlin, fractal)?, width, height)
    }
}

impl<G, T> NoiseGenerator<T, 2> for Seamless2D<G, T>
where
    T: Real,
    G: NoiseGenerator<T, 4>,
{
    fn at(&self, p: &Point<T, 2>) -> T {
        self.inner.at(&self.lift(p))
    }
}
