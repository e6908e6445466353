/*!
# Edge Weights & Costs

Edge weights can be any numeric type that supports addition, a zero-element and a (partial)
ordering, i.e. all primitive integers and floats. Nothing checks for overflow: choose a weight
type large enough to hold the sum of all weights along a path.

Missing edges and not-yet-reached vertices are represented by [`Cost::Infinite`] instead of a
large sentinel value, so that "no edge" can never be confused with "expensive edge".
*/

use std::{
    fmt::{Debug, Display},
    ops::Add,
};

use num::Zero;

/// Numeric edge weight
pub trait Weight: Copy + PartialOrd + Debug + Zero + Add<Output = Self> {}

impl<T> Weight for T where T: Copy + PartialOrd + Debug + Zero + Add<Output = T> {}

/// A weight extended by `+infinity`.
///
/// The derived ordering places every `Finite(_)` below `Infinite`, which is exactly the order
/// shortest-path algorithms need.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub enum Cost<W> {
    Finite(W),
    #[default]
    Infinite,
}

impl<W: Weight> Cost<W> {
    /// Cost of the empty path
    pub fn zero() -> Self {
        Cost::Finite(W::zero())
    }

    /// Returns *true* if the cost is not `Infinite`
    pub fn is_finite(&self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    /// Returns the underlying weight if it is finite
    pub fn finite(self) -> Option<W> {
        match self {
            Cost::Finite(w) => Some(w),
            Cost::Infinite => None,
        }
    }

    /// Returns the cheaper of both costs. If they compare equal (or are incomparable), `self`
    /// is kept.
    pub fn min(self, other: Self) -> Self {
        if other < self { other } else { self }
    }
}

impl<W: Weight> Add for Cost<W> {
    type Output = Cost<W>;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Cost::Finite(a), Cost::Finite(b)) => Cost::Finite(a + b),
            _ => Cost::Infinite,
        }
    }
}

impl<W: Weight> Add<W> for Cost<W> {
    type Output = Cost<W>;

    fn add(self, rhs: W) -> Self::Output {
        self + Cost::Finite(rhs)
    }
}

impl<W: Weight> From<W> for Cost<W> {
    fn from(value: W) -> Self {
        Cost::Finite(value)
    }
}

impl<W: Weight> From<Option<W>> for Cost<W> {
    fn from(value: Option<W>) -> Self {
        value.map_or(Cost::Infinite, Cost::Finite)
    }
}

impl<W: Display> Display for Cost<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cost::Finite(w) => write!(f, "{w}"),
            Cost::Infinite => write!(f, "inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinite_is_largest() {
        assert!(Cost::Finite(i64::MAX) < Cost::Infinite);
        assert!(Cost::Finite(-3) < Cost::Finite(2));
        assert!(Cost::<f64>::Infinite > Cost::Finite(1e300));
        assert_eq!(Cost::<u32>::default(), Cost::Infinite);
    }

    #[test]
    fn infinite_absorbs_addition() {
        assert_eq!(Cost::Finite(3) + 4, Cost::Finite(7));
        assert_eq!(Cost::Finite(3) + Cost::Finite(-4), Cost::Finite(-1));
        assert_eq!(Cost::<i32>::Infinite + 4, Cost::Infinite);
        assert_eq!(Cost::Finite(1) + Cost::<i32>::Infinite, Cost::Infinite);
    }

    #[test]
    fn min_prefers_cheaper() {
        assert_eq!(Cost::Finite(5).min(Cost::Finite(2)), Cost::Finite(2));
        assert_eq!(Cost::Infinite.min(Cost::Finite(2)), Cost::Finite(2));
        assert_eq!(Cost::Finite(2).min(Cost::Infinite), Cost::Finite(2));
        assert_eq!(Cost::<u8>::zero().finite(), Some(0));
        assert_eq!(Cost::<u8>::Infinite.finite(), None);
        assert_eq!(Cost::from(None::<u8>), Cost::Infinite);
    }
}
