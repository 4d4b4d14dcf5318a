// noise-core holds the coherent noise generators and the math they share
pub mod error;
pub mod fractal;
pub mod math;
pub mod perlin;
pub mod point;
pub mod seamless;
pub mod vector;

pub use error::{LawKind, NoiseError};
pub use fractal::{Fractal, FractalConfig, OctaveLaw};
pub use math::{MAX_SMOOTHNESS, Real, Smoothstep, smoothstep};
pub use perlin::{Perlin, PerlinConfig};
pub use point::Point;
pub use seamless::Seamless2D;
pub use vector::Vector;

// A coherent noise function over D-dimensional points with scalar type T.
//
// Implementations are pure: the same point always yields the same value,
// and the value lies in [-1, 1] for every finite input.
pub trait NoiseGenerator<T: Real, const D: usize> {
    fn at(&self, p: &Point<T, D>) -> T;
}

impl<T: Real, const D: usize, G: NoiseGenerator<T, D> + ?Sized> NoiseGenerator<T, D> for &G {
    fn at(&self, p: &Point<T, D>) -> T {
        (**self).at(p)
    }
}

impl<T: Real, const D: usize, G: NoiseGenerator<T, D> + ?Sized> NoiseGenerator<T, D> for Box<G> {
    fn at(&self, p: &Point<T, D>) -> T {
        (**self).at(p)
    }
}
