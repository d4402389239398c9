//! weightedrand — fast weighted random selection for repeated draws.
//!
//! Build a [`Chooser`] once from a set of [`Choice`]s, then draw from it as
//! often as needed. Construction sorts the choices and precomputes running
//! weight totals; each draw is a binary search over those totals, O(log n).
//!
//! - [`Choice`]: an item paired with an integer weight of any width
//! - [`Chooser`]: the immutable precomputed structure and its draw operations
//! - [`RngHierarchy`]: reproducible per-worker generators for concurrent draws
//!
//! ```
//! use weightedrand_core::{Choice, Chooser};
//!
//! let chooser = Chooser::new([
//!     Choice::new('🍋', 0),
//!     Choice::new('🍊', 0),
//!     Choice::new('🍉', 0),
//!     Choice::new('🥑', 42),
//! ])
//! .unwrap();
//! assert_eq!(*chooser.pick(), '🥑');
//! ```

pub mod choice;
pub mod chooser;
pub mod rng;
pub mod weight;

pub use choice::Choice;
pub use chooser::{Chooser, ChooserError, Picks};
pub use rng::RngHierarchy;
pub use weight::Weight;
