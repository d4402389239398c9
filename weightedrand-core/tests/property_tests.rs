//! Property tests for chooser invariants.
//!
//! Uses proptest to verify:
//! 1. Construction outcome — builds iff the weight sum fits in u64 and is >= 1
//! 2. Running totals — non-decreasing, parallel to choices, ending at the total
//! 3. Reachability — picks only ever return positively weighted items
//! 4. Negative weights — excluded without shifting anyone else's range

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use weightedrand_core::{Choice, Chooser, ChooserError};

// ── Strategies (proptest) ────────────────────────────────────────────

/// Mostly small weights, with enough huge ones to exercise overflow.
fn arb_u64_weight() -> impl Strategy<Value = u64> {
    prop_oneof![
        6 => 0..10u64,
        2 => any::<u64>(),
        1 => Just(u64::MAX / 2 + 1),
        1 => Just(u64::MAX),
    ]
}

fn arb_u64_weights() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(arb_u64_weight(), 0..16)
}

fn arb_i64_weights() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1000..1000i64, 1..32)
}

fn indexed<W: weightedrand_core::Weight>(weights: &[W]) -> Vec<Choice<usize, W>> {
    weights
        .iter()
        .enumerate()
        .map(|(i, &w)| Choice::new(i, w))
        .collect()
}

// ── 1. Construction Outcome ──────────────────────────────────────────

proptest! {
    /// `new` succeeds exactly when the sum fits and is positive, and fails
    /// with the matching error otherwise. It never panics.
    #[test]
    fn builds_iff_sum_fits_and_is_positive(weights in arb_u64_weights()) {
        let expected_sum = weights.iter().try_fold(0u64, |acc, &w| acc.checked_add(w));

        match (Chooser::new(indexed(&weights)), expected_sum) {
            (Ok(chooser), Some(sum)) => {
                prop_assert!(sum >= 1);
                prop_assert_eq!(chooser.total_weight(), sum);
            }
            (Err(ChooserError::WeightOverflow), None) => {}
            (Err(ChooserError::NoValidChoices), Some(0)) => {}
            (outcome, sum) => {
                prop_assert!(false, "unexpected outcome {:?} for sum {:?}", outcome.map(|c| c.total_weight()), sum);
            }
        }
    }

    /// Narrow signed weights can never overflow a u64 accumulator.
    #[test]
    fn narrow_signed_weights_never_overflow(weights in prop::collection::vec(any::<i8>(), 0..64)) {
        let result = Chooser::new(indexed(&weights));
        prop_assert_ne!(result.err(), Some(ChooserError::WeightOverflow));
    }

    /// Every item shares one sentinel value, so any pick must return it.
    #[test]
    fn sentinel_items_always_returned(weights in arb_u64_weights(), seed in any::<u64>()) {
        const SENTINEL: u8 = 1;
        let choices = weights.iter().map(|&w| Choice::new(SENTINEL, w));

        if let Ok(chooser) = Chooser::new(choices) {
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..16 {
                prop_assert_eq!(*chooser.pick_with(&mut rng), SENTINEL);
            }
        }
    }
}

// ── 2. Running Totals ────────────────────────────────────────────────

proptest! {
    #[test]
    fn totals_are_monotonic_and_end_at_total(weights in arb_i64_weights()) {
        let Ok(chooser) = Chooser::new(indexed(&weights)) else {
            return Ok(());
        };

        let totals = chooser.totals();
        prop_assert_eq!(totals.len(), chooser.len());
        prop_assert_eq!(chooser.len(), weights.len());
        prop_assert!(totals.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(totals.last().copied(), Some(chooser.total_weight()));

        let sorted = chooser.choices().windows(2).all(|w| w[0].weight <= w[1].weight);
        prop_assert!(sorted, "choices not sorted by weight");
    }
}

// ── 3. Reachability ──────────────────────────────────────────────────

proptest! {
    /// Zero and negative weights are never picked.
    #[test]
    fn picks_only_positive_weights(weights in arb_i64_weights(), seed in any::<u64>()) {
        let Ok(chooser) = Chooser::new(indexed(&weights)) else {
            prop_assert!(weights.iter().all(|&w| w <= 0));
            return Ok(());
        };

        let mut rng = StdRng::seed_from_u64(seed);
        for &item in chooser.picks(&mut rng).take(200) {
            prop_assert!(weights[item] > 0, "picked item {} with weight {}", item, weights[item]);
        }
    }
}

// ── 4. Negative Weights ──────────────────────────────────────────────

proptest! {
    /// Adding negatively weighted choices leaves every other range unchanged:
    /// the same draw lands on a choice of the same weight.
    #[test]
    fn negative_weights_do_not_shift_ranges(
        positives in prop::collection::vec(1..100i64, 1..16),
        negatives in prop::collection::vec(-100..0i64, 1..8),
        seed in any::<u64>(),
    ) {
        let without = Chooser::new(indexed(&positives)).unwrap();
        let mixed: Vec<i64> = positives.iter().chain(negatives.iter()).copied().collect();
        let with = Chooser::new(indexed(&mixed)).unwrap();

        prop_assert_eq!(with.total_weight(), without.total_weight());
        prop_assert_eq!(&with.totals()[negatives.len()..], without.totals());

        let mut rng_a = StdRng::seed_from_u64(seed);
        let mut rng_b = StdRng::seed_from_u64(seed);
        for _ in 0..32 {
            let a = *with.pick_with(&mut rng_a);
            let b = *without.pick_with(&mut rng_b);
            prop_assert_eq!(mixed[a], positives[b]);
        }
    }
}
