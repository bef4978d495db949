//! Search module - query normalization and per-entry filtering
//!
//! Provides the stateless half of the engine:
//! 1. Normalize a free-text query once per run
//! 2. Evaluate every entry against query, tags and categories

pub mod filter;
pub mod normalize;
pub mod traits;

pub use filter::{Evaluator, category_match, combine, evaluate, evaluate_normalized, tag_match};
pub use normalize::{MAX_QUERY_CHARS, canonicalize, fold, matches, matches_with_labels, normalize, normalize_with_limit};
pub use traits::{AsEntry, EntryView, FilterExt};
