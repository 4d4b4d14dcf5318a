use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use num_traits::Float;
use rand::Rng;
use rand::distr::uniform::SampleUniform;

use crate::point::Point;

// A displacement in D-dimensional space. Only floating point components are
// allowed; conversion to and from `Point` is explicit and lossless.
//
// Division by a zero scalar and normalizing the zero vector are not checked,
// they yield NaN/inf components per IEEE-754.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<T, const D: usize>([T; D]);

impl<T: Float, const D: usize> Vector<T, D> {
    pub const fn new(elems: [T; D]) -> Self {
        Self(elems)
    }

    pub fn from_point(p: Point<T, D>) -> Self {
        Self(p.into_array())
    }

    pub fn into_point(self) -> Point<T, D> {
        Point::new(self.0)
    }

    pub fn from_value(value: T) -> Self {
        Self([value; D])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn dot(&self, other: &Self) -> T {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    pub fn magnitude(&self) -> T {
        self.dot(self).sqrt()
    }

    pub fn normalized(&self) -> Self {
        *self / self.magnitude()
    }

    // Random direction drawn uniformly from the unit sphere.
    pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Self
    where
        T: SampleUniform,
    {
        Self::sample_unit(rng).0
    }

    // Rejection sampling: draw each component from [-1, 1] until the vector
    // falls inside the unit ball, then scale it to unit length. Returns the
    // number of rejected draws alongside the vector. Termination is only
    // probabilistic; the acceptance rate is the ball/cube volume ratio
    // (about 0.31 in 4D, 0.16 in 6D).
    pub(crate) fn sample_unit<R: Rng + ?Sized>(rng: &mut R) -> (Self, usize)
    where
        T: SampleUniform,
    {
        let mut rejected = 0;
        loop {
            let v = Self(std::array::from_fn(|_| {
                rng.random_range(-T::one()..=T::one())
            }));
            let mag = v.magnitude();
            if mag > T::zero() && mag <= T::one() {
                return (v / mag, rejected);
            }
            rejected += 1;
        }
    }
}

impl<T, const D: usize> Index<usize> for Vector<T, D> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T, const D: usize> IndexMut<usize> for Vector<T, D> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

// Elementwise vector (op) vector, in both the plain and the assigning form
macro_rules! elementwise_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident) => {
        impl<T: Float, const D: usize> $assign for Vector<T, D> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                for (a, b) in self.0.iter_mut().zip(rhs.0) {
                    *a = a.$method(b);
                }
            }
        }

        impl<T: Float, const D: usize> $op for Vector<T, D> {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: Self) -> Self {
                self.$assign_method(rhs);
                self
            }
        }
    };
}

// Vector (op) scalar, applied to every component
macro_rules! scalar_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident) => {
        impl<T: Float, const D: usize> $assign<T> for Vector<T, D> {
            #[inline]
            fn $assign_method(&mut self, rhs: T) {
                for a in self.0.iter_mut() {
                    *a = a.$method(rhs);
                }
            }
        }

        impl<T: Float, const D: usize> $op<T> for Vector<T, D> {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: T) -> Self {
                self.$assign_method(rhs);
                self
            }
        }
    };
}

elementwise_op!(Add, add, AddAssign, add_assign);
elementwise_op!(Sub, sub, SubAssign, sub_assign);
elementwise_op!(Mul, mul, MulAssign, mul_assign);
elementwise_op!(Div, div, DivAssign, div_assign);
scalar_op!(Mul, mul, MulAssign, mul_assign);
scalar_op!(Div, div, DivAssign, div_assign);

impl<T: Float, const D: usize> Neg for Vector<T, D> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.map(|e| -e))
    }
}

// Displacement between two locations
impl<T: Float, const D: usize> Sub for Point<T, D> {
    type Output = Vector<T, D>;

    #[inline]
    fn sub(self, rhs: Self) -> Vector<T, D> {
        Vector::from_point(self) - Vector::from_point(rhs)
    }
}

// A location moved by a displacement
impl<T: Float, const D: usize> Add<Vector<T, D>> for Point<T, D> {
    type Output = Point<T, D>;

    #[inline]
    fn add(self, rhs: Vector<T, D>) -> Point<T, D> {
        (Vector::from_point(self) + rhs).into_point()
    }
}

impl<T: fmt::Display, const D: usize> fmt::Display for Vector<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, " {e}")?;
        }
        f.write_str(" ]")
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::Vector;
    use crate::point::Point;

    #[test]
    fn arithmetic_is_elementwise() {
        let a = Vector::new([1.0f64, 2.0, 3.0]);
        let b = Vector::new([4.0, 5.0, 6.0]);
        assert_eq!(a + b, Vector::new([5.0, 7.0, 9.0]));
        assert_eq!(b - a, Vector::from_value(3.0));
        assert_eq!(-a, Vector::new([-1.0, -2.0, -3.0]));
        assert_eq!(a * 2.0, Vector::new([2.0, 4.0, 6.0]));
        assert_eq!(a * b, Vector::new([4.0, 10.0, 18.0]));
        assert_eq!(b / 2.0, Vector::new([2.0, 2.5, 3.0]));
        assert_eq!(b / a, Vector::new([4.0, 2.5, 2.0]));

        let mut c = a;
        c += b;
        c -= a;
        c *= 2.0;
        c /= b;
        assert_eq!(c, Vector::from_value(2.0));
    }

    #[test]
    fn dot_and_magnitude() {
        let a = Vector::new([3.0f32, 4.0]);
        assert_eq!(a.dot(&Vector::new([1.0, 1.0])), 7.0);
        assert_eq!(a.magnitude(), 5.0);
        let n = a.normalized();
        assert!((n.magnitude() - 1.0).abs() < 1e-6);
        assert!((n[0] - 0.6).abs() < 1e-6);
    }

    #[test]
    fn normalizing_zero_gives_nan() {
        let z = Vector::<f64, 2>::from_value(0.0).normalized();
        assert!(z.iter().all(|e| e.is_nan()));
    }

    #[test]
    fn points_and_vectors_convert_losslessly() {
        let p = Point::new([0.25f64, -3.5]);
        let v = Vector::from_point(p);
        assert_eq!(v.into_point(), p);

        let q = Point::new([1.0, 1.0]);
        assert_eq!(q - p, Vector::new([0.75, 4.5]));
        assert_eq!(p + (q - p), q);
    }

    #[test]
    fn random_unit_vectors_have_unit_length() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let v = Vector::<f64, 4>::random_unit(&mut rng);
            assert!((v.magnitude() - 1.0).abs() < 1e-12);
            assert!(v.iter().all(|e| (-1.0..=1.0).contains(e)));
        }
        for _ in 0..100 {
            let v = Vector::<f32, 1>::random_unit(&mut rng);
            assert!(v[0] == 1.0 || v[0] == -1.0);
        }
    }

    #[test]
    fn display_lists_components() {
        assert_eq!(Vector::new([1.5f32, -2.0]).to_string(), "[ 1.5, -2 ]");
    }
}
