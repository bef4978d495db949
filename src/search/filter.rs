//! Per-entry filter evaluation
//!
//! An entry passes when it matches the free-text query AND the tag/category
//! selection. The tag/category part has an asymmetric rule:
//!
//! | tags selected | categories selected | tag/category result        |
//! |---------------|---------------------|----------------------------|
//! | no            | no                  | true                       |
//! | yes           | no                  | tag match                  |
//! | no            | yes                 | category match             |
//! | yes           | yes                 | tag match OR category match |
//!
//! With both facets active the result is a union; with one active it is
//! whichever side has a selection. The query is always intersected and never
//! joins the union.
//!
//! Tag match honours [`TagMode`]; category match is always OR across the
//! selected categories. Unknown tag or category ids never match anything.

use super::normalize::{matches_with_labels, normalize_with_limit, MAX_QUERY_CHARS};
use super::traits::AsEntry;
use crate::browse::models::TagMode;
use crate::browse::SelectionState;
use crate::taxonomy::Taxonomy;
use std::collections::BTreeSet;

/// Tag sub-predicate
///
/// Vacuously true with no selected tags. Under [`TagMode::Any`] the entry
/// needs at least one selected tag, under [`TagMode::All`] every one.
#[must_use]
pub fn tag_match(entry_tags: &[String], selected_tags: &BTreeSet<String>, mode: TagMode) -> bool {
    if selected_tags.is_empty() {
        return true;
    }
    let has = |tag: &String| entry_tags.contains(tag);
    match mode {
        TagMode::Any => selected_tags.iter().any(has),
        TagMode::All => selected_tags.iter().all(has),
    }
}

/// Category sub-predicate
///
/// Vacuously true with no selected categories. Otherwise true iff one of the
/// entry's tags belongs to one of the selected categories.
#[must_use]
pub fn category_match(
    entry_tags: &[String],
    selected_categories: &BTreeSet<String>,
    taxonomy: &Taxonomy,
) -> bool {
    if selected_categories.is_empty() {
        return true;
    }
    entry_tags
        .iter()
        .filter_map(|tag| taxonomy.category_of(tag))
        .any(|category| selected_categories.contains(category))
}

/// Combine the tag and category sub-predicates
///
/// Union when both facets have a selection, intersection otherwise. Since an
/// empty facet is vacuously true, the intersection reduces to the active side.
#[must_use]
pub const fn combine(has_tags: bool, has_categories: bool, tag_ok: bool, category_ok: bool) -> bool {
    if has_tags && has_categories {
        tag_ok || category_ok
    } else {
        tag_ok && category_ok
    }
}

/// Evaluate one entry against a selection
///
/// Normalizes the query on every call; when filtering many entries build an
/// [`Evaluator`] once instead.
#[must_use]
pub fn evaluate<T: AsEntry + ?Sized>(entry: &T, state: &SelectionState, taxonomy: &Taxonomy) -> bool {
    Evaluator::new(state, taxonomy).matches(entry)
}

/// Evaluate one entry with a query that is already normalized
///
/// `state.query` is ignored in favour of `normalized_query`.
#[must_use]
pub fn evaluate_normalized<T: AsEntry + ?Sized>(
    entry: &T,
    normalized_query: &str,
    state: &SelectionState,
    taxonomy: &Taxonomy,
) -> bool {
    if !matches_with_labels(entry, normalized_query, taxonomy) {
        return false;
    }

    let view = entry.as_entry();
    let tags = &state.selected_tags;
    let categories = &state.selected_categories;

    combine(
        !tags.is_empty(),
        !categories.is_empty(),
        tag_match(view.tags, tags, state.tag_mode),
        category_match(view.tags, categories, taxonomy),
    )
}

/// A selection prepared for evaluating many entries
///
/// Holds the normalized query so one filter pass normalizes exactly once.
#[derive(Debug, Clone)]
pub struct Evaluator<'a> {
    query: String,
    state: &'a SelectionState,
    taxonomy: &'a Taxonomy,
}

impl<'a> Evaluator<'a> {
    /// Prepare an evaluator with the default query length cap
    #[must_use]
    pub fn new(state: &'a SelectionState, taxonomy: &'a Taxonomy) -> Self {
        Self::with_query_limit(state, taxonomy, MAX_QUERY_CHARS)
    }

    /// Prepare an evaluator, capping the normalized query at `limit` code points
    #[must_use]
    pub fn with_query_limit(state: &'a SelectionState, taxonomy: &'a Taxonomy, limit: usize) -> Self {
        let query = normalize_with_limit(&state.query, limit);
        tracing::trace!(raw = %state.query, normalized = %query, "prepared query");
        Self {
            query,
            state,
            taxonomy,
        }
    }

    /// The normalized query used for matching
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether an entry passes the whole selection
    #[must_use]
    pub fn matches<T: AsEntry + ?Sized>(&self, entry: &T) -> bool {
        evaluate_normalized(entry, &self.query, self.state, self.taxonomy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{scenario_dataset, scenario_taxonomy};
    use crate::Entry;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    fn passing(state: &SelectionState) -> Vec<String> {
        let taxonomy = scenario_taxonomy();
        let evaluator = Evaluator::new(state, &taxonomy);
        scenario_dataset()
            .iter()
            .filter(|e| evaluator.matches(*e))
            .map(|e| e.id.clone())
            .collect()
    }

    #[test]
    fn test_tag_match_modes() {
        let entry = tags(&["x", "y"]);
        assert!(tag_match(&entry, &set(&[]), TagMode::All));
        assert!(tag_match(&entry, &set(&["x", "z"]), TagMode::Any));
        assert!(!tag_match(&entry, &set(&["x", "z"]), TagMode::All));
        assert!(tag_match(&entry, &set(&["x", "y"]), TagMode::All));
    }

    #[test]
    fn test_category_match() {
        let taxonomy = scenario_taxonomy();
        assert!(category_match(&tags(&["z"]), &set(&[]), &taxonomy));
        assert!(category_match(&tags(&["y"]), &set(&["cat1"]), &taxonomy));
        assert!(!category_match(&tags(&["z"]), &set(&["cat1"]), &taxonomy));
        assert!(category_match(&tags(&["z"]), &set(&["cat1", "cat2"]), &taxonomy));
    }

    #[test]
    fn test_combine_truth_table() {
        assert!(combine(false, false, true, true));
        assert!(!combine(true, false, false, true));
        assert!(!combine(false, true, true, false));
        assert!(combine(true, true, false, true));
        assert!(combine(true, true, true, false));
        assert!(!combine(true, true, false, false));
    }

    #[test]
    fn test_single_tag_any() {
        let mut state = SelectionState::new();
        state.selected_tags = set(&["x"]);
        assert_eq!(passing(&state), vec!["A"]);
    }

    #[test]
    fn test_two_tags_all() {
        let mut state = SelectionState::new();
        state.selected_tags = set(&["x", "y"]);
        state.tag_mode = TagMode::All;
        assert_eq!(passing(&state), vec!["A"]);
    }

    #[test]
    fn test_category_only() {
        let mut state = SelectionState::new();
        state.selected_categories = set(&["cat1"]);
        assert_eq!(passing(&state), vec!["A", "B"]);
    }

    #[test]
    fn test_tags_and_categories_union() {
        let mut state = SelectionState::new();
        state.selected_tags = set(&["z"]);
        state.selected_categories = set(&["cat1"]);
        assert_eq!(passing(&state), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_query_is_intersected_with_union() {
        let mut state = SelectionState::new();
        state.selected_tags = set(&["z"]);
        state.selected_categories = set(&["cat1"]);
        state.query = "bravo".into();
        assert_eq!(passing(&state), vec!["B"]);
    }

    #[test]
    fn test_category_match_ignores_tag_mode() {
        let mut state = SelectionState::new();
        state.selected_categories = set(&["cat1", "cat2"]);
        state.tag_mode = TagMode::All;
        assert_eq!(passing(&state), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_unknown_selection_matches_nothing() {
        let mut state = SelectionState::new();
        state.selected_tags = set(&["ghost"]);
        assert!(passing(&state).is_empty());

        let mut state = SelectionState::new();
        state.selected_categories = set(&["nowhere"]);
        assert!(passing(&state).is_empty());
    }

    #[test]
    fn test_empty_selection_matches_everything() {
        assert_eq!(passing(&SelectionState::new()), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_evaluate_free_function() {
        let taxonomy = scenario_taxonomy();
        let entry = Entry::new("Q", "Quartz", vec!["z".into()]);
        let mut state = SelectionState::new();
        state.query = "  QUA ".into();
        assert!(evaluate(&entry, &state, &taxonomy));
        state.query = "<b>zzz</b>".into();
        assert!(!evaluate(&entry, &state, &taxonomy));
    }

    #[test]
    fn test_evaluate_normalized_ignores_raw_query() {
        let taxonomy = scenario_taxonomy();
        let entry = Entry::new("Q", "Quartz", vec!["z".into()]);
        let mut state = SelectionState::new();
        state.query = "no match here".into();
        assert!(evaluate_normalized(&entry, "quartz", &state, &taxonomy));

        state.selected_tags = set(&["x"]);
        assert!(!evaluate_normalized(&entry, "", &state, &taxonomy));
    }

    #[test]
    fn test_query_limit() {
        let taxonomy = scenario_taxonomy();
        let mut state = SelectionState::new();
        state.query = "alphabet soup".into();
        let evaluator = Evaluator::with_query_limit(&state, &taxonomy, 5);
        assert_eq!(evaluator.query(), "alpha");
    }
}
