use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use num_traits::{AsPrimitive, Float};

// A location in D-dimensional space, compared component by component.
// Grid points use integer components, evaluation points use floats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point<T, const D: usize>([T; D]);

impl<T, const D: usize> Point<T, D> {
    pub const fn new(elems: [T; D]) -> Self {
        Self(elems)
    }

    pub const fn dimensions(&self) -> usize {
        D
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    pub fn as_array(&self) -> &[T; D] {
        &self.0
    }

    pub fn into_array(self) -> [T; D] {
        self.0
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Point<U, D> {
        Point(self.0.map(f))
    }
}

impl<T: Copy + 'static, const D: usize> Point<T, D> {
    // Plain numeric conversion with `as` semantics (truncation toward zero,
    // saturation at the target's bounds)
    pub fn convert<U>(self) -> Point<U, D>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(|e| e.as_())
    }

    // Every component multiplied by the same factor
    pub fn scale(self, factor: T) -> Self
    where
        T: Mul<Output = T>,
    {
        self.map(|e| e * factor)
    }
}

impl<T: Float, const D: usize> Point<T, D> {
    pub fn floor<U>(self) -> Point<U, D>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(|e| e.floor().as_())
    }

    pub fn ceil<U>(self) -> Point<U, D>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(|e| e.ceil().as_())
    }
}

impl<T: Default, const D: usize> Default for Point<T, D> {
    fn default() -> Self {
        Self(std::array::from_fn(|_| T::default()))
    }
}

impl<T, const D: usize> From<[T; D]> for Point<T, D> {
    fn from(elems: [T; D]) -> Self {
        Self(elems)
    }
}

impl<T, const D: usize> Index<usize> for Point<T, D> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T, const D: usize> IndexMut<usize> for Point<T, D> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

impl<'a, T, const D: usize> IntoIterator for &'a Point<T, D> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: fmt::Display, const D: usize> fmt::Display for Point<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, " {e}")?;
        }
        f.write_str(" )")
    }
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn floor_and_ceil_round_each_component() {
        let p = Point::new([1.5f64, -1.5, 2.0, -0.25]);
        assert_eq!(p.floor::<i64>(), Point::new([1, -2, 2, -1]));
        assert_eq!(p.ceil::<i64>(), Point::new([2, -1, 2, 0]));
        // floor into the same float type keeps the fractional part gone
        assert_eq!(p.floor::<f64>(), Point::new([1.0, -2.0, 2.0, -1.0]));
    }

    #[test]
    fn convert_truncates() {
        let p = Point::new([1.9f32, -1.9]);
        assert_eq!(p.convert::<i32>(), Point::new([1, -1]));

        let q = Point::new([3i64, -4]);
        assert_eq!(q.convert::<f64>(), Point::new([3.0, -4.0]));
    }

    #[test]
    fn scale_and_index() {
        let mut p = Point::from([1.0f32, 2.0, 3.0]).scale(2.0);
        assert_eq!(p[2], 6.0);
        p[0] = -1.0;
        assert_eq!(p.into_array(), [-1.0, 4.0, 6.0]);
        assert_eq!(p.dimensions(), 3);
    }

    #[test]
    fn display_lists_components() {
        assert_eq!(Point::new([1, 2, 3]).to_string(), "( 1, 2, 3 )");
        assert_eq!(Point::new([7]).to_string(), "( 7 )");
    }

    #[test]
    fn default_is_origin() {
        let p: Point<i64, 4> = Point::default();
        assert!(p.iter().all(|&c| c == 0));
    }
}
