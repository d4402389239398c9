//! Presorted, prefix-summed weighted chooser.
//!
//! A [`Chooser`] is built once from a set of [`Choice`]s and then drawn from
//! many times. Construction sorts the choices by weight and records the
//! running total after each one; a draw picks a uniform integer in
//! `[1, total]` and binary-searches the running totals for it, so every draw
//! is O(log n) regardless of how many draws came before.
//!
//! Choice `i` owns the half-open range `(totals[i - 1], totals[i]]`, whose
//! width is exactly its weight. Zero and negative weights own an empty range
//! and can never be picked.

use rand::Rng;
use thiserror::Error;

use crate::choice::Choice;
use crate::weight::Weight;

/// Errors from building a [`Chooser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChooserError {
    /// A single weight, or the sum of all non-negative weights, exceeds
    /// `u64::MAX`.
    #[error("weight overflow: total weight exceeds {max}", max = u64::MAX)]
    WeightOverflow,

    /// No choice has a positive weight (including the empty input).
    #[error("no valid choices: at least one choice needs a weight >= 1")]
    NoValidChoices,
}

/// An immutable weighted chooser optimized for repeated draws.
///
/// Safe to share between threads: drawing never mutates the chooser. Use
/// [`pick_with`](Chooser::pick_with) with one generator per thread for
/// contention-free, reproducible draws.
#[derive(Debug, Clone)]
pub struct Chooser<T, W: Weight> {
    /// Sorted ascending by weight. Order among equal weights is unspecified.
    choices: Vec<Choice<T, W>>,
    /// Running totals; `totals[i]` covers `choices[..=i]`, negatives count as 0.
    totals: Vec<u64>,
    max: u64,
}

impl<T, W: Weight> Chooser<T, W> {
    /// Build a chooser from the given choices.
    ///
    /// Negative weights are kept but skipped when accumulating. Fails with
    /// [`ChooserError::WeightOverflow`] if the total would exceed `u64::MAX`
    /// (a total of exactly `u64::MAX` is fine), and with
    /// [`ChooserError::NoValidChoices`] if the total is zero.
    pub fn new<I>(choices: I) -> Result<Self, ChooserError>
    where
        I: IntoIterator<Item = Choice<T, W>>,
    {
        let mut choices: Vec<Choice<T, W>> = choices.into_iter().collect();
        choices.sort_unstable_by_key(|c| c.weight);

        let mut totals = Vec::with_capacity(choices.len());
        let mut running: u64 = 0;
        let mut excluded = 0usize;

        for choice in &choices {
            if choice.weight.is_negative() {
                excluded += 1;
                totals.push(running);
                continue;
            }

            // Compare against the remaining headroom so the check itself can't overflow.
            match choice.weight.to_total() {
                Some(weight) if weight <= u64::MAX - running => running += weight,
                _ => {
                    log::debug!(
                        "rejecting chooser: weight {:?} overflows running total {}",
                        choice.weight,
                        running
                    );
                    return Err(ChooserError::WeightOverflow);
                }
            }
            totals.push(running);
        }

        if running < 1 {
            log::debug!(
                "rejecting chooser: {} choices ({} negative) sum to zero weight",
                choices.len(),
                excluded
            );
            return Err(ChooserError::NoValidChoices);
        }

        log::debug!(
            "built chooser: {} choices, {} excluded, total weight {}",
            choices.len(),
            excluded,
            running
        );

        Ok(Self {
            choices,
            totals,
            max: running,
        })
    }

    /// Pick one item using the calling thread's thread-local generator.
    pub fn pick(&self) -> &T {
        self.pick_with(&mut rand::thread_rng())
    }

    /// Pick one item using a caller-supplied generator.
    ///
    /// Identical to [`pick`](Chooser::pick) apart from where the randomness
    /// comes from. Pass a seeded generator for reproducible draws.
    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        let r = rng.gen_range(1..=self.max);
        &self.choices[self.search(r)].item
    }

    /// An endless iterator of picks drawn from `rng`.
    ///
    /// Picked items borrow the chooser only, so they outlive the generator.
    pub fn picks<'r, R: Rng + ?Sized>(&self, rng: &'r mut R) -> Picks<'_, 'r, T, W, R> {
        Picks { chooser: self, rng }
    }

    /// Index of the first choice whose running total reaches `r`.
    ///
    /// `r` must lie in `[1, max]`; the last total equals `max`, so the index
    /// is always in bounds.
    #[inline]
    fn search(&self, r: u64) -> usize {
        self.totals.partition_point(|&total| total < r)
    }

    /// Sum of all non-negative weights. Always at least 1.
    pub fn total_weight(&self) -> u64 {
        self.max
    }

    /// Number of choices held, including unreachable ones.
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Always false for a built chooser; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// The choices sorted ascending by weight.
    pub fn choices(&self) -> &[Choice<T, W>] {
        &self.choices
    }

    /// Running totals, parallel to [`choices`](Chooser::choices).
    pub fn totals(&self) -> &[u64] {
        &self.totals
    }

    pub fn into_choices(self) -> Vec<Choice<T, W>> {
        self.choices
    }
}

/// Endless iterator of picks, created by [`Chooser::picks`].
pub struct Picks<'c, 'r, T, W: Weight, R: ?Sized> {
    chooser: &'c Chooser<T, W>,
    rng: &'r mut R,
}

impl<'c, T, W: Weight, R: Rng + ?Sized> Iterator for Picks<'c, '_, T, W, R> {
    type Item = &'c T;

    #[inline]
    fn next(&mut self) -> Option<&'c T> {
        let chooser: &'c Chooser<T, W> = self.chooser;
        Some(chooser.pick_with(&mut *self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T, W: Weight> TryFrom<Vec<Choice<T, W>>> for Chooser<T, W> {
    type Error = ChooserError;

    fn try_from(choices: Vec<Choice<T, W>>) -> Result<Self, Self::Error> {
        Self::new(choices)
    }
}
