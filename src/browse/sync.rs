//! Category synchronization
//!
//! A selected category stays selected only while some selected tag belongs to
//! it. This module recomputes that after tags are deselected. It never adds a
//! category: choosing a category is always an explicit user action, and a
//! category chosen with no tags at all is valid until a tag removal triggers a
//! sync.

use crate::taxonomy::Taxonomy;
use std::collections::BTreeSet;

/// Keep only the categories justified by at least one selected tag
///
/// Unknown tags justify nothing and unknown category ids are never justified,
/// so both simply fall out. With no selected tags the result is empty.
///
/// # Examples
/// ```
/// # use facetr::browse::sync::sync_categories;
/// # use facetr::taxonomy::Taxonomy;
/// # use std::collections::BTreeSet;
/// let taxonomy = Taxonomy::builder()
///     .category("cat1", 1, "One")
///     .category("cat2", 2, "Two")
///     .tag("x", "cat1")
///     .tag("z", "cat2")
///     .build()
///     .unwrap();
///
/// let tags = BTreeSet::from(["x".to_string()]);
/// let categories = BTreeSet::from(["cat1".to_string(), "cat2".to_string()]);
///
/// let synced = sync_categories(&tags, &categories, &taxonomy);
/// assert_eq!(synced, BTreeSet::from(["cat1".to_string()]));
/// ```
#[must_use]
pub fn sync_categories(
    selected_tags: &BTreeSet<String>,
    selected_categories: &BTreeSet<String>,
    taxonomy: &Taxonomy,
) -> BTreeSet<String> {
    let justified: BTreeSet<&str> = selected_tags
        .iter()
        .filter_map(|tag| taxonomy.category_of(tag))
        .collect();

    selected_categories
        .iter()
        .filter(|category| justified.contains(category.as_str()))
        .cloned()
        .collect()
}

/// Categories a sync would drop, in id order
///
/// Lets a view preview a tag toggle before committing it, e.g. to decide
/// whether to announce that a category was removed.
#[must_use]
pub fn dropped_categories(
    selected_tags: &BTreeSet<String>,
    selected_categories: &BTreeSet<String>,
    taxonomy: &Taxonomy,
) -> Vec<String> {
    let kept = sync_categories(selected_tags, selected_categories, taxonomy);
    selected_categories.difference(&kept).cloned().collect()
}
