//! The (item, weight) pair a [`Chooser`](crate::Chooser) is built from.

use crate::weight::Weight;

/// An item paired with its relative selection weight.
///
/// Weights are relative, not probabilities: `{a: 1, b: 3}` picks `b` three
/// times as often as `a`. A zero weight makes the item unreachable; a negative
/// weight excludes it entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Choice<T, W: Weight> {
    pub item: T,
    pub weight: W,
}

impl<T, W: Weight> Choice<T, W> {
    pub fn new(item: T, weight: W) -> Self {
        Self { item, weight }
    }
}

impl<T, W: Weight> From<(T, W)> for Choice<T, W> {
    fn from((item, weight): (T, W)) -> Self {
        Self { item, weight }
    }
}
