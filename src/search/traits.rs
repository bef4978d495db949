//! Trait-based view of entries for unified filtering
//!
//! The engine never owns entries; the data loader does. Any type that can lend
//! out its id, text fields and tags can be filtered and sorted by implementing
//! [`AsEntry`]:
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │  AsEntry Trait                      │  ← Adaptation layer
//! │  - as_entry() -> EntryView<'_>      │
//! └─────────────────────────────────────┘
//!            ▲
//!            │ implements
//!            │
//!    ┌───────┴────────┬─────────────┐
//!    │                │             │
//!  Entry        EntryView      CustomType
//!
//! ┌─────────────────────────────────────┐
//! │  FilterExt<T: AsEntry>              │  ← Filtering logic
//! │  - apply_filter(&Evaluator)         │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```
//! use facetr::search::{AsEntry, EntryView, Evaluator, FilterExt};
//! use facetr::browse::SelectionState;
//! use facetr::taxonomy::Taxonomy;
//!
//! struct Spell {
//!     key: String,
//!     title: String,
//!     tags: Vec<String>,
//! }
//!
//! impl AsEntry for Spell {
//!     fn as_entry(&self) -> EntryView<'_> {
//!         EntryView::new(&self.key, &self.title, &self.tags)
//!     }
//! }
//!
//! let taxonomy = Taxonomy::builder()
//!     .category("school", 1, "School")
//!     .tag("fire", "school")
//!     .build()?;
//! let spells = vec![Spell { key: "1".into(), title: "Fireball".into(), tags: vec!["fire".into()] }];
//!
//! let mut state = SelectionState::new();
//! state.set_query("fire");
//! let evaluator = Evaluator::new(&state, &taxonomy);
//! assert_eq!(spells.apply_filter(&evaluator).count(), 1);
//! # Ok::<(), facetr::taxonomy::TaxonomyError>(())
//! ```

use super::filter::Evaluator;
use crate::browse::models::SortKey;

/// Borrowed view of one entry
///
/// This is the core DTO for filtering and sorting. It costs nothing to build
/// and holds no owned data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryView<'a> {
    /// Unique identifier
    pub id: &'a str,
    /// Display name
    pub name: &'a str,
    /// Short descriptor line
    pub descriptor: &'a str,
    /// Free-text description
    pub description: &'a str,
    /// Tags from the taxonomy vocabulary
    pub tags: &'a [String],
    /// Optional rank used only to break ties when sorting by category
    pub rank: Option<u32>,
}

impl<'a> EntryView<'a> {
    /// Create a view with empty descriptor and description
    #[must_use]
    pub const fn new(id: &'a str, name: &'a str, tags: &'a [String]) -> Self {
        Self {
            id,
            name,
            descriptor: "",
            description: "",
            tags,
            rank: None,
        }
    }

    #[must_use]
    pub const fn with_descriptor(mut self, descriptor: &'a str) -> Self {
        self.descriptor = descriptor;
        self
    }

    #[must_use]
    pub const fn with_description(mut self, description: &'a str) -> Self {
        self.description = description;
        self
    }

    #[must_use]
    pub const fn with_rank(mut self, rank: Option<u32>) -> Self {
        self.rank = rank;
        self
    }

    /// The fields free-text search looks at
    #[must_use]
    pub const fn searchable_fields(&self) -> [&'a str; 3] {
        [self.name, self.descriptor, self.description]
    }

    /// The text field a sort key orders by
    ///
    /// The category key orders by category rank first and by name within a
    /// group, so it maps to the name here.
    #[must_use]
    pub const fn field(&self, key: SortKey) -> &'a str {
        match key {
            SortKey::Name | SortKey::Category => self.name,
            SortKey::Descriptor => self.descriptor,
            SortKey::Description => self.description,
        }
    }
}

/// Trait for types that can be viewed as an entry
///
/// # Examples
///
/// ```ignore
/// impl AsEntry for MyType {
///     fn as_entry(&self) -> EntryView<'_> {
///         EntryView::new(&self.id, &self.title, &self.tags)
///     }
/// }
/// ```
pub trait AsEntry {
    /// Return a borrowed view of this item
    fn as_entry(&self) -> EntryView<'_>;
}

impl AsEntry for EntryView<'_> {
    fn as_entry(&self) -> EntryView<'_> {
        *self
    }
}

impl<T: AsEntry + ?Sized> AsEntry for &T {
    fn as_entry(&self) -> EntryView<'_> {
        (**self).as_entry()
    }
}

/// Extension trait for filtering collections of entries
///
/// Applies the query, tag and category combination rules of [`Evaluator`]
/// to every item, lazily and in input order.
pub trait FilterExt<T: AsEntry> {
    /// Filter items with a prepared evaluator
    ///
    /// # Returns
    /// Iterator over items that match the selection
    fn apply_filter<'a, 'e, 's>(&'a self, evaluator: &'e Evaluator<'s>) -> impl Iterator<Item = &'a T>
    where
        T: 'a;
}

impl<T: AsEntry> FilterExt<T> for [T] {
    fn apply_filter<'a, 'e, 's>(&'a self, evaluator: &'e Evaluator<'s>) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter().filter(move |item| evaluator.matches(*item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::SelectionState;
    use crate::testing::{scenario_dataset, scenario_taxonomy};

    // Mock type for testing
    #[derive(Debug)]
    struct MockEntry {
        key: String,
        title: String,
        tags: Vec<String>,
    }

    impl MockEntry {
        fn new(key: &str, title: &str, tags: Vec<&str>) -> Self {
            Self {
                key: key.to_string(),
                title: title.to_string(),
                tags: tags.into_iter().map(String::from).collect(),
            }
        }
    }

    impl AsEntry for MockEntry {
        fn as_entry(&self) -> EntryView<'_> {
            EntryView::new(&self.key, &self.title, &self.tags)
        }
    }

    #[test]
    fn test_entry_view_creation() {
        let tags = vec!["x".to_string(), "y".to_string()];
        let view = EntryView::new("a", "Alpha", &tags)
            .with_descriptor("first")
            .with_rank(Some(2));
        assert_eq!(view.id, "a");
        assert_eq!(view.searchable_fields(), ["Alpha", "first", ""]);
        assert_eq!(view.rank, Some(2));
        assert_eq!(view.tags, ["x", "y"]);
    }

    #[test]
    fn test_field_by_sort_key() {
        let tags = vec![];
        let view = EntryView::new("a", "Alpha", &tags)
            .with_descriptor("desc")
            .with_description("long");
        assert_eq!(view.field(SortKey::Name), "Alpha");
        assert_eq!(view.field(SortKey::Category), "Alpha");
        assert_eq!(view.field(SortKey::Descriptor), "desc");
        assert_eq!(view.field(SortKey::Description), "long");
    }

    #[test]
    fn test_filter_ext_custom_type() {
        let taxonomy = scenario_taxonomy();
        let items = vec![
            MockEntry::new("1", "One", vec!["x", "y"]),
            MockEntry::new("2", "Two", vec!["y"]),
            MockEntry::new("3", "Three", vec!["z"]),
        ];

        let mut state = SelectionState::new();
        state.toggle_tag("y", &taxonomy);

        let evaluator = Evaluator::new(&state, &taxonomy);
        let results: Vec<_> = items.apply_filter(&evaluator).map(|m| m.key.as_str()).collect();
        assert_eq!(results, vec!["1", "2"]);
    }

    #[test]
    fn test_filter_ext_no_criteria() {
        let taxonomy = scenario_taxonomy();
        let dataset = scenario_dataset();
        let state = SelectionState::new();

        let evaluator = Evaluator::new(&state, &taxonomy);
        assert_eq!(dataset.apply_filter(&evaluator).count(), 3);
    }
}
