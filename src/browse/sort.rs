//! Result ordering
//!
//! Every ordering produced here is total, so sorting the same entries twice,
//! or the same entries in a different input order, gives identical output.
//!
//! # Field keys (`Name`, `Descriptor`, `Description`)
//!
//! 1. Folded field (case- and accent-insensitive), then raw field
//! 2. Entry id
//!
//! `Desc` reverses the whole chain, so a descending sort is exactly the
//! ascending sort read backwards.
//!
//! # Category key
//!
//! 1. Category rank of the entry, always ascending (entries with no known tag last)
//! 2. Name as above; reversed by `Desc`
//! 3. The entry's own `rank`, ascending (entries without one last)
//! 4. Entry id, always ascending
//!
//! An entry's category rank is the lowest display rank among the categories
//! its tags belong to.

use super::models::{SortDirection, SortKey};
use crate::search::normalize::fold;
use crate::search::{AsEntry, EntryView};
use crate::taxonomy::Taxonomy;
use std::cmp::Ordering;

/// Category rank of an entry: the lowest rank among its tags' categories
#[must_use]
pub fn category_rank(entry: &EntryView<'_>, taxonomy: &Taxonomy) -> Option<u32> {
    entry.tags.iter().filter_map(|tag| taxonomy.rank_of_tag(tag)).min()
}

/// An entry with its sort keys computed once
struct Keyed<'a, T> {
    item: &'a T,
    view: EntryView<'a>,
    folded: String,
    group: u32,
}

impl<'a, T: AsEntry> Keyed<'a, T> {
    fn new(item: &'a T, key: SortKey, taxonomy: &Taxonomy) -> Self {
        let view = item.as_entry();
        let group = match key {
            SortKey::Category => category_rank(&view, taxonomy).unwrap_or(u32::MAX),
            _ => 0,
        };
        Self {
            item,
            folded: fold(view.field(key)),
            view,
            group,
        }
    }

    /// Field comparison, the part `direction` applies to
    fn cmp_field(&self, other: &Self, key: SortKey) -> Ordering {
        self.folded
            .cmp(&other.folded)
            .then_with(|| self.view.field(key).cmp(other.view.field(key)))
    }

    fn cmp_entry_rank(&self, other: &Self) -> Ordering {
        let rank = |view: &EntryView<'_>| view.rank.map_or((1, 0), |r| (0, r));
        rank(&self.view).cmp(&rank(&other.view))
    }
}

/// Order entries by key and direction
///
/// # Examples
/// ```
/// # use facetr::browse::sort::sort;
/// # use facetr::browse::models::{SortDirection, SortKey};
/// # use facetr::taxonomy::Taxonomy;
/// # use facetr::Entry;
/// let taxonomy = Taxonomy::default();
/// let entries = vec![
///     Entry::new("2", "beta", vec!["t".into()]),
///     Entry::new("1", "Alpha", vec!["t".into()]),
/// ];
///
/// let sorted = sort(entries.iter().collect(), SortKey::Name, SortDirection::Asc, &taxonomy);
/// assert_eq!(sorted[0].name, "Alpha");
/// ```
#[must_use]
pub fn sort<'a, T: AsEntry>(
    entries: Vec<&'a T>,
    key: SortKey,
    direction: SortDirection,
    taxonomy: &Taxonomy,
) -> Vec<&'a T> {
    let mut keyed: Vec<Keyed<'a, T>> = entries
        .into_iter()
        .map(|item| Keyed::new(item, key, taxonomy))
        .collect();

    let directed = |ord: Ordering| match direction {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    };

    keyed.sort_by(|a, b| match key {
        SortKey::Category => a
            .group
            .cmp(&b.group)
            .then_with(|| directed(a.cmp_field(b, key)))
            .then_with(|| a.cmp_entry_rank(b))
            .then_with(|| a.view.id.cmp(b.view.id)),
        SortKey::Name | SortKey::Descriptor | SortKey::Description => {
            directed(a.cmp_field(b, key).then_with(|| a.view.id.cmp(b.view.id)))
        }
    });

    tracing::trace!(?key, ?direction, count = keyed.len(), "sorted entries");
    keyed.into_iter().map(|k| k.item).collect()
}
