//! Query pipeline for browse workflows
//!
//! This module ties the pieces together for one query cycle:
//!
//! ```text
//! Action ──► apply() ──► SelectionState (category sync on tag removal)
//!                              │
//! dataset ──► Evaluator (query normalized once) ──► sort() ──► QueryResult
//! ```
//!
//! Everything is synchronous and pure given its inputs. A caller that wants
//! to debounce keystrokes or memoize results does so on top of [`query`].

use super::models::{Action, ActionOutcome};
use super::sort::sort;
use super::state::SelectionState;
use crate::search::normalize::MAX_QUERY_CHARS;
use crate::search::{AsEntry, Evaluator, FilterExt};
use crate::taxonomy::Taxonomy;
use std::time::Instant;

/// Ordered entries that passed the filter, plus their count
///
/// The count is what views announce through a live region or status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult<'a, T> {
    pub entries: Vec<&'a T>,
    pub count: usize,
}

impl<'a, T> QueryResult<'a, T> {
    fn new(entries: Vec<&'a T>) -> Self {
        let count = entries.len();
        Self { entries, count }
    }

    /// Check if nothing matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Filter and sort a dataset with the current selection
///
/// # Examples
/// ```
/// # use facetr::browse::{query, SelectionState};
/// # use facetr::taxonomy::Taxonomy;
/// # use facetr::Entry;
/// let taxonomy = Taxonomy::builder()
///     .category("cat1", 1, "One")
///     .tag("x", "cat1")
///     .build()?;
/// let dataset = vec![Entry::new("A", "Alpha", vec!["x".into()])];
///
/// let result = query(&dataset, &taxonomy, &SelectionState::new());
/// assert_eq!(result.count, 1);
/// # Ok::<(), facetr::taxonomy::TaxonomyError>(())
/// ```
#[must_use]
pub fn query<'a, T: AsEntry>(
    dataset: &'a [T],
    taxonomy: &Taxonomy,
    state: &SelectionState,
) -> QueryResult<'a, T> {
    query_with_limit(dataset, taxonomy, state, MAX_QUERY_CHARS)
}

/// Like [`query`], capping the normalized query at `limit` code points
#[must_use]
pub fn query_with_limit<'a, T: AsEntry>(
    dataset: &'a [T],
    taxonomy: &Taxonomy,
    state: &SelectionState,
    limit: usize,
) -> QueryResult<'a, T> {
    let started = Instant::now();

    let evaluator = Evaluator::with_query_limit(state, taxonomy, limit);
    let filtered: Vec<&'a T> = dataset.apply_filter(&evaluator).collect();
    let entries = sort(filtered, state.sort_key, state.sort_direction, taxonomy);

    tracing::debug!(
        total = dataset.len(),
        matched = entries.len(),
        query = evaluator.query(),
        tags = state.selected_tags.len(),
        categories = state.selected_categories.len(),
        mode = ?state.tag_mode,
        elapsed_us = started.elapsed().as_micros(),
        "query complete"
    );

    QueryResult::new(entries)
}

/// Apply a user action to the selection
///
/// Category sync runs only when the action removed a tag; toggling a
/// category or editing the query never triggers it.
pub fn apply(state: &mut SelectionState, action: Action, taxonomy: &Taxonomy) -> ActionOutcome {
    tracing::trace!(?action, "applying action");
    match action {
        Action::ToggleTag(tag) => state.toggle_tag(&tag, taxonomy),
        Action::ToggleCategory(category) => {
            if state.toggle_category(&category) {
                ActionOutcome {
                    categories_added: vec![category],
                    ..ActionOutcome::default()
                }
            } else {
                ActionOutcome {
                    categories_removed: vec![category],
                    ..ActionOutcome::default()
                }
            }
        }
        Action::SetQuery(text) => {
            state.set_query(text);
            ActionOutcome::default()
        }
        Action::SetTagMode(mode) => {
            state.set_tag_mode(mode);
            ActionOutcome::default()
        }
        Action::ToggleTagMode => {
            state.toggle_tag_mode();
            ActionOutcome::default()
        }
        Action::SetSort(key, direction) => {
            state.set_sort(key, direction);
            ActionOutcome::default()
        }
        Action::Clear => state.clear(),
        Action::Refresh => ActionOutcome::default(),
    }
}
