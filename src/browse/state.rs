//! Caller-owned selection state
//!
//! `SelectionState` is the single source of truth for what a user has chosen
//! in one browse session. The engine never stores it; views own it and pass it
//! by reference into the pure query functions.
//!
//! Field assignment alone does not keep the category invariant. Use the
//! mutators (or [`apply`](crate::browse::query::apply)): removing a tag
//! through them runs category sync.
//!
//! ```
//! use facetr::browse::SelectionState;
//! # use facetr::taxonomy::Taxonomy;
//! # let taxonomy = Taxonomy::builder()
//! #     .category("cat1", 1, "One")
//! #     .tag("x", "cat1")
//! #     .build()?;
//! let mut state = SelectionState::new();
//! state.toggle_tag("x", &taxonomy);
//! state.toggle_category("cat1");
//!
//! // Deselecting the last tag of cat1 drops the category too
//! let dropped = state.toggle_tag("x", &taxonomy);
//! assert_eq!(dropped.categories_auto_removed, vec!["cat1".to_string()]);
//! assert!(state.selected_categories.is_empty());
//! # Ok::<(), facetr::taxonomy::TaxonomyError>(())
//! ```

use super::models::{ActionOutcome, SortDirection, SortKey, TagMode};
use super::sync::{dropped_categories, sync_categories};
use crate::config::FacetrConfig;
use crate::taxonomy::Taxonomy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The user's current query, tag, category, mode and sort choices
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    /// Raw free-text query as typed; normalized once per query run
    #[serde(default)]
    pub query: String,

    /// Individually selected tags
    #[serde(default)]
    pub selected_tags: BTreeSet<String>,

    /// Selected category ids
    #[serde(default)]
    pub selected_categories: BTreeSet<String>,

    /// How selected tags combine
    #[serde(default)]
    pub tag_mode: TagMode,

    /// Sort key for results
    #[serde(default)]
    pub sort_key: SortKey,

    /// Sort direction for results
    #[serde(default)]
    pub sort_direction: SortDirection,
}

impl SelectionState {
    /// Create an empty selection with default mode and sort
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty selection using the configured defaults
    #[must_use]
    pub fn from_config(config: &FacetrConfig) -> Self {
        Self {
            tag_mode: config.default_tag_mode,
            sort_key: config.default_sort_key,
            sort_direction: config.default_sort_direction,
            ..Self::default()
        }
    }

    /// Select a tag, or deselect it if already selected
    ///
    /// Deselecting runs category sync; the returned outcome lists any
    /// categories that were dropped as a result.
    pub fn toggle_tag(&mut self, tag: &str, taxonomy: &Taxonomy) -> ActionOutcome {
        if self.selected_tags.remove(tag) {
            let auto_removed = self.sync(taxonomy);
            ActionOutcome {
                tags_removed: vec![tag.to_string()],
                categories_auto_removed: auto_removed,
                ..ActionOutcome::default()
            }
        } else {
            self.selected_tags.insert(tag.to_string());
            ActionOutcome {
                tags_added: vec![tag.to_string()],
                ..ActionOutcome::default()
            }
        }
    }

    /// Preview which categories deselecting `tag` would drop
    ///
    /// Returns an empty list if the tag is not selected.
    #[must_use]
    pub fn preview_tag_removal(&self, tag: &str, taxonomy: &Taxonomy) -> Vec<String> {
        if !self.selected_tags.contains(tag) {
            return Vec::new();
        }
        let mut remaining = self.selected_tags.clone();
        remaining.remove(tag);
        dropped_categories(&remaining, &self.selected_categories, taxonomy)
    }

    /// Select a category, or deselect it if already selected
    ///
    /// Never touches tags and never runs sync. Returns true if the category
    /// was added, false if removed.
    pub fn toggle_category(&mut self, category: &str) -> bool {
        if self.selected_categories.remove(category) {
            false
        } else {
            self.selected_categories.insert(category.to_string());
            true
        }
    }

    /// Replace the free-text query
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Set how selected tags combine
    pub const fn set_tag_mode(&mut self, mode: TagMode) {
        self.tag_mode = mode;
    }

    /// Toggle search mode (ANY ↔ ALL)
    pub const fn toggle_tag_mode(&mut self) {
        self.tag_mode = self.tag_mode.flipped();
    }

    /// Change the sort order
    pub const fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.sort_key = key;
        self.sort_direction = direction;
    }

    /// Clear query, tags and categories, keeping mode and sort order
    pub fn clear(&mut self) -> ActionOutcome {
        let outcome = ActionOutcome {
            tags_removed: self.selected_tags.iter().cloned().collect(),
            categories_removed: self.selected_categories.iter().cloned().collect(),
            ..ActionOutcome::default()
        };
        self.query.clear();
        self.selected_tags.clear();
        self.selected_categories.clear();
        outcome
    }

    /// Check if nothing narrows the result
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.selected_tags.is_empty()
            && self.selected_categories.is_empty()
    }

    /// Check if tag is selected
    #[must_use]
    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.selected_tags.contains(tag)
    }

    /// Check if category is selected
    #[must_use]
    pub fn is_category_selected(&self, category: &str) -> bool {
        self.selected_categories.contains(category)
    }

    /// Drop unjustified categories, returning the ones removed
    fn sync(&mut self, taxonomy: &Taxonomy) -> Vec<String> {
        let kept = sync_categories(&self.selected_tags, &self.selected_categories, taxonomy);
        let removed: Vec<String> = self.selected_categories.difference(&kept).cloned().collect();
        if !removed.is_empty() {
            tracing::debug!(?removed, "category sync dropped unjustified categories");
        }
        self.selected_categories = kept;
        removed
    }
}
