use std::fmt::{Debug, Display};
use std::marker::PhantomData;

use num_traits::{AsPrimitive, Float, FloatConst, PrimInt};
use rand::distr::uniform::SampleUniform;

use crate::error::NoiseError;

// Highest smoothstep order the generators accept.
// The Bernstein coefficients C(2N+1, k) stay exact in f64 up to this order.
pub const MAX_SMOOTHNESS: u32 = 16;

// Floating point scalar the generators compute in (f32 or f64)
pub trait Real:
    Float
    + FloatConst
    + SampleUniform
    + AsPrimitive<i64>
    + AsPrimitive<f64>
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    fn from_f64(value: f64) -> Self;

    // Grid coordinates back into the scalar domain
    fn from_grid(coord: i64) -> Self;
}

impl Real for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn from_grid(coord: i64) -> Self {
        coord as f32
    }
}

impl Real for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn from_grid(coord: i64) -> Self {
        coord as f64
    }
}

// Integer power with non-negative exponent (exponentiation by squaring).
// ipow(0, 0) is 1.
pub fn ipow<T: PrimInt>(base: T, exp: u32) -> T {
    let mut result = T::one();
    let mut base = base;
    let mut exp = exp;
    while exp != 0 {
        if exp & 1 == 1 {
            result = result * base;
        }
        exp >>= 1;
        // skip the final squaring, it is never used and may overflow
        if exp != 0 {
            base = base * base;
        }
    }
    result
}

// Binomial coefficient C(n, k), 0 when k > n.
// The multiplicative form rounds each intermediate ratio to the nearest integer.
pub fn binomial(n: u32, k: u32) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    if k == 0 {
        return 1;
    }

    let mut val: u64 = 1;
    for i in 1..=u64::from(k) {
        let factor = u64::from(n - k) + i;
        val = (val as f64 * factor as f64 / i as f64).round() as u64;
    }
    val
}

// k mod n with the result in [0, n), also for negative k. n must be positive.
#[inline]
pub fn floor_mod<T: PrimInt>(k: T, n: T) -> T {
    let r = k % n;
    if r < T::zero() { r + n } else { r }
}

#[inline]
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + t * (b - a)
}

// Generalized smoothstep of order N.
//
// Maps [0, 1] onto [0, 1]; inputs <= 0 give 0 and inputs >= 1 give 1.
// In between it is the polynomial of degree m = 2N+1 whose first N derivatives
// vanish at both ends, written in Bernstein form
//   sum_{k=N+1..m} C(m, k) * x^k * (1-x)^(m-k)
// so every term is non-negative. The sum is taken in f64 on the lower half only
// and mirrored through S(x) = 1 - S(1-x) above 0.5; the result is monotone and
// bounded in f32 as well as f64. Order 0 is the identity clamp, 1 the cubic
// 3x^2 - 2x^3, 2 the quintic 6x^5 - 15x^4 + 10x^3. NaN input propagates.
#[derive(Clone, Debug, PartialEq)]
pub struct Smoothstep<T> {
    order: u32,
    // C(2N+1, k) for k = N+1..=2N+1
    coefficients: Vec<f64>,
    _scalar: PhantomData<T>,
}

impl<T: Real> Smoothstep<T> {
    pub fn new(order: u32) -> Result<Self, NoiseError> {
        if order > MAX_SMOOTHNESS {
            return Err(NoiseError::SmoothnessTooHigh {
                order,
                max: MAX_SMOOTHNESS,
            });
        }
        Ok(Self::from_validated(order))
    }

    // order must already be checked against MAX_SMOOTHNESS
    pub(crate) fn from_validated(order: u32) -> Self {
        debug_assert!(order <= MAX_SMOOTHNESS);
        let degree = 2 * order + 1;
        let coefficients = (order + 1..=degree)
            .map(|k| binomial(degree, k) as f64)
            .collect();
        Self {
            order,
            coefficients,
            _scalar: PhantomData,
        }
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    #[inline]
    pub fn apply(&self, x: T) -> T {
        if x <= T::zero() {
            return T::zero();
        }
        if x >= T::one() {
            return T::one();
        }
        let x = AsPrimitive::<f64>::as_(x);
        let y = match self.order {
            0 => x,
            1 => x * x * (3.0 - 2.0 * x),
            2 => x * x * x * (x * (x * 6.0 - 15.0) + 10.0),
            _ if x <= 0.5 => self.lower_half(x),
            _ => 1.0 - self.lower_half(1.0 - x),
        };
        T::from_f64(y.clamp(0.0, 1.0))
    }

    // Bernstein sum for x in (0, 0.5], where the value stays below one half
    fn lower_half(&self, x: f64) -> f64 {
        let first = self.order as i32 + 1;
        let degree = 2 * self.order as i32 + 1;
        let y = 1.0 - x;
        self.coefficients
            .iter()
            .zip(first..)
            .map(|(&c, k)| c * x.powi(k) * y.powi(degree - k))
            .sum()
    }
}

// One-off smoothstep evaluation. Generators keep a `Smoothstep` instead.
pub fn smoothstep<T: Real>(order: u32, x: T) -> Result<T, NoiseError> {
    Ok(Smoothstep::new(order)?.apply(x))
}
