//! Deterministic per-worker generators.
//!
//! A master seed generates independent sub-seeds for each `(stream, worker)`
//! pair. Sub-seeds are derived via BLAKE3 hashing rather than by drawing from
//! a shared generator, so a multi-threaded draw run is reproducible no matter
//! how the workers are scheduled.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Expands one master seed into many explicit randomness sources.
///
/// Hand each thread its own generator from [`rng_for`](RngHierarchy::rng_for)
/// and draw with [`Chooser::pick_with`](crate::Chooser::pick_with): the
/// threads share the chooser but nothing mutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngHierarchy {
    master_seed: u64,
}

impl RngHierarchy {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    /// Seed the hierarchy from OS entropy, for runs that needn't be repeatable.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Derive the sub-seed for one worker of a named stream.
    ///
    /// Independent of derivation order: deriving worker 3 before worker 0
    /// yields the same seeds as the reverse.
    pub fn sub_seed(&self, stream: &str, worker: u64) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(&(stream.len() as u64).to_le_bytes());
        hasher.update(stream.as_bytes());
        hasher.update(&worker.to_le_bytes());
        let hash = hasher.finalize();
        let mut seed = [0u8; 8];
        seed.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(seed)
    }

    /// Create a seeded `StdRng` for one worker of a named stream.
    pub fn rng_for(&self, stream: &str, worker: u64) -> StdRng {
        StdRng::seed_from_u64(self.sub_seed(stream, worker))
    }
}
