//! Frequency demonstration: draw many times and compare observed shares with
//! the shares implied by the weights.

use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use weightedrand_core::{Chooser, RngHierarchy, Weight};

const STREAM: &str = "frequency";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FrequencyRow {
    pub item: String,
    /// Sum of the item's non-negative weights; never exceeds the total.
    pub weight: u64,
    pub count: u64,
    pub observed: f64,
    pub expected: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FrequencyReport {
    pub draws: u64,
    pub workers: u64,
    pub seed: u64,
    pub total_weight: u64,
    /// One row per distinct item, in ascending weight order.
    pub rows: Vec<FrequencyRow>,
}

/// Draws assigned to `worker` when `draws` are split across `workers`.
/// The remainder goes to the lowest-numbered workers.
pub fn worker_share(draws: u64, workers: u64, worker: u64) -> u64 {
    draws / workers + u64::from(worker < draws % workers)
}

/// Draw `draws` times from `chooser`, split across `workers` rayon tasks, each
/// with its own generator from `hierarchy`.
pub fn run_frequency(
    chooser: &Chooser<String, i64>,
    draws: u64,
    workers: u64,
    hierarchy: RngHierarchy,
) -> FrequencyReport {
    let workers = workers.max(1);
    log::info!(
        "drawing {draws} times across {workers} workers (seed {})",
        hierarchy.master_seed()
    );

    let counts: HashMap<&str, u64> = (0..workers)
        .into_par_iter()
        .map(|worker| {
            let mut rng = hierarchy.rng_for(STREAM, worker);
            let mut counts: HashMap<&str, u64> = HashMap::new();
            for item in chooser.picks(&mut rng).take(worker_share(draws, workers, worker) as usize) {
                *counts.entry(item.as_str()).or_insert(0) += 1;
            }
            counts
        })
        .reduce(HashMap::new, |mut acc, other| {
            for (item, n) in other {
                *acc.entry(item).or_insert(0) += n;
            }
            acc
        });

    let total_weight = chooser.total_weight();
    let mut rows: Vec<FrequencyRow> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for choice in chooser.choices() {
        let i = *index.entry(choice.item.as_str()).or_insert_with(|| {
            rows.push(FrequencyRow {
                item: choice.item.clone(),
                weight: 0,
                count: counts.get(choice.item.as_str()).copied().unwrap_or(0),
                observed: 0.0,
                expected: 0.0,
            });
            rows.len() - 1
        });
        if !choice.weight.is_negative() {
            rows[i].weight += choice.weight.to_total().unwrap_or(0);
        }
    }

    for row in &mut rows {
        row.observed = if draws == 0 {
            0.0
        } else {
            row.count as f64 / draws as f64
        };
        row.expected = row.weight as f64 / total_weight as f64;
    }

    FrequencyReport {
        draws,
        workers,
        seed: hierarchy.master_seed(),
        total_weight,
        rows,
    }
}

impl FrequencyReport {
    pub fn render_table(&self) -> String {
        let width = self
            .rows
            .iter()
            .map(|r| r.item.chars().count())
            .max()
            .unwrap_or(0)
            .max("item".len());

        let mut out = format!(
            "{:<width$}  {:>8}  {:>12}  {:>9}  {:>9}\n",
            "item", "weight", "count", "observed", "expected"
        );
        for row in &self.rows {
            out.push_str(&format!(
                "{:<width$}  {:>8}  {:>12}  {:>8.3}%  {:>8.3}%\n",
                row.item,
                row.weight,
                row.count,
                row.observed * 100.0,
                row.expected * 100.0
            ));
        }
        out.push_str(&format!(
            "{} draws, {} workers, seed {}, total weight {}\n",
            self.draws, self.workers, self.seed, self.total_weight
        ));
        out
    }
}
