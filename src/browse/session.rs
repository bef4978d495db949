//! Browse session management
//!
//! A `BrowseSession` bundles the read-only dataset and taxonomy with one
//! caller's `SelectionState`, so a view can feed it discrete actions and get
//! a fresh ordered result back each time.
//!
//! # Workflow
//!
//! ```text
//! Session Created (state from config defaults)
//!     ↓
//! ┌─→ User Action
//! │       ↓
//! │   dispatch(action)
//! │   ├─ apply()   → ActionOutcome (auto-removed categories to announce)
//! │   └─ query()   → QueryResult   (entries to render, count to announce)
//! └───────┘
//! ```
//!
//! Sessions are independent: two sessions over the same dataset share nothing
//! mutable.

use super::models::{Action, ActionOutcome};
use super::query::{QueryResult, apply, query_with_limit};
use super::state::SelectionState;
use crate::config::FacetrConfig;
use crate::search::AsEntry;
use crate::search::normalize::MAX_QUERY_CHARS;
use crate::taxonomy::Taxonomy;

/// One user's view over a dataset
pub struct BrowseSession<'a, T> {
    dataset: &'a [T],
    taxonomy: &'a Taxonomy,
    state: SelectionState,
    query_limit: usize,
}

impl<'a, T: AsEntry> BrowseSession<'a, T> {
    /// Start a session with an empty default selection
    #[must_use]
    pub fn new(dataset: &'a [T], taxonomy: &'a Taxonomy) -> Self {
        Self {
            dataset,
            taxonomy,
            state: SelectionState::new(),
            query_limit: MAX_QUERY_CHARS,
        }
    }

    /// Start a session seeded from configuration
    #[must_use]
    pub fn from_config(dataset: &'a [T], taxonomy: &'a Taxonomy, config: &FacetrConfig) -> Self {
        Self {
            dataset,
            taxonomy,
            state: SelectionState::from_config(config),
            query_limit: config.max_query_chars,
        }
    }

    /// Resume a session from a previously saved selection
    #[must_use]
    pub fn with_state(mut self, state: SelectionState) -> Self {
        self.state = state;
        self
    }

    /// Get the current selection
    #[must_use]
    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Get the taxonomy
    #[must_use]
    pub const fn taxonomy(&self) -> &Taxonomy {
        self.taxonomy
    }

    /// Replace the dataset (e.g. after a reload); the selection is kept
    pub const fn set_dataset(&mut self, dataset: &'a [T]) {
        self.dataset = dataset;
    }

    /// Preview which categories deselecting `tag` would drop
    #[must_use]
    pub fn preview_tag_removal(&self, tag: &str) -> Vec<String> {
        self.state.preview_tag_removal(tag, self.taxonomy)
    }

    /// Run the query for the current selection
    #[must_use]
    pub fn results(&self) -> QueryResult<'a, T> {
        query_with_limit(self.dataset, self.taxonomy, &self.state, self.query_limit)
    }

    /// Apply an action and re-run the query
    pub fn dispatch(&mut self, action: Action) -> (ActionOutcome, QueryResult<'a, T>) {
        let outcome = apply(&mut self.state, action, self.taxonomy);
        (outcome, self.results())
    }

    /// End the session, handing back the selection for persistence
    #[must_use]
    pub fn into_state(self) -> SelectionState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::models::{SortDirection, SortKey, TagMode};
    use crate::testing::{scenario_dataset, scenario_taxonomy};
    use crate::Entry;

    fn ids(result: &QueryResult<'_, Entry>) -> Vec<String> {
        result.entries.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_dispatch_flow() {
        let taxonomy = scenario_taxonomy();
        let dataset = scenario_dataset();
        let mut session = BrowseSession::new(&dataset, &taxonomy);

        let (_, result) = session.dispatch(Action::ToggleTag("x".into()));
        assert_eq!(ids(&result), vec!["A"]);

        let (_, result) = session.dispatch(Action::ToggleCategory("cat2".into()));
        // x selected and cat2 selected: union
        assert_eq!(ids(&result), vec!["A", "C"]);

        let (outcome, result) = session.dispatch(Action::ToggleTag("x".into()));
        assert_eq!(outcome.categories_auto_removed, vec!["cat2".to_string()]);
        assert_eq!(result.count, 3);
    }

    #[test]
    fn test_from_config() {
        let taxonomy = scenario_taxonomy();
        let dataset = scenario_dataset();
        let config = FacetrConfig {
            default_tag_mode: TagMode::All,
            default_sort_key: SortKey::Name,
            default_sort_direction: SortDirection::Desc,
            max_query_chars: 3,
            ..FacetrConfig::default()
        };
        let mut session = BrowseSession::from_config(&dataset, &taxonomy, &config);
        assert_eq!(session.state().tag_mode, TagMode::All);

        // "alphabet" is capped to "alp"
        let (_, result) = session.dispatch(Action::SetQuery("alphabet".into()));
        assert_eq!(ids(&result), vec!["A"]);
    }

    #[test]
    fn test_with_state_and_into_state() {
        let taxonomy = scenario_taxonomy();
        let dataset = scenario_dataset();
        let mut saved = SelectionState::new();
        saved.set_query("bravo");

        let session = BrowseSession::new(&dataset, &taxonomy).with_state(saved.clone());
        assert_eq!(ids(&session.results()), vec!["B"]);
        assert_eq!(session.into_state(), saved);
    }

    #[test]
    fn test_set_dataset_keeps_selection() {
        let taxonomy = scenario_taxonomy();
        let dataset = scenario_dataset();
        let reloaded = vec![Entry::new("D", "Delta", vec!["x".into()])];

        let mut session = BrowseSession::new(&dataset, &taxonomy);
        session.dispatch(Action::ToggleTag("x".into()));
        session.set_dataset(&reloaded);

        let (_, result) = session.dispatch(Action::Refresh);
        assert_eq!(ids(&result), vec!["D"]);
    }

    #[test]
    fn test_preview() {
        let taxonomy = scenario_taxonomy();
        let dataset = scenario_dataset();
        let mut session = BrowseSession::new(&dataset, &taxonomy);
        session.dispatch(Action::ToggleTag("y".into()));
        session.dispatch(Action::ToggleCategory("cat1".into()));

        assert_eq!(session.preview_tag_removal("y"), vec!["cat1".to_string()]);
        assert_eq!(session.taxonomy().categories().len(), 2);
    }
}
