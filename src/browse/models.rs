//! Domain models for browse sessions
//!
//! Plain value types shared by the selection state, the filter evaluator and
//! the sort engine. Everything here is `Copy` or cheaply cloneable and carries
//! serde derives so a caller can persist a session's choices.

use serde::{Deserialize, Serialize};

// ============================================================================
// Selection Modes
// ============================================================================

/// How to combine multiple selected tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagMode {
    /// Match entries with ANY of the selected tags (OR logic)
    #[default]
    Any,

    /// Match entries with ALL of the selected tags (AND logic)
    All,
}

impl TagMode {
    /// The other mode
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Any => Self::All,
            Self::All => Self::Any,
        }
    }
}

// ============================================================================
// Sorting
// ============================================================================

/// What to order results by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Entry name
    #[default]
    Name,

    /// Short descriptor line
    Descriptor,

    /// Free-text description
    Description,

    /// Display rank of the entry's category, then name
    Category,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

// ============================================================================
// Actions
// ============================================================================

/// A discrete user action that changes the selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Select the tag, or deselect it if already selected
    ToggleTag(String),

    /// Select the category, or deselect it if already selected
    ToggleCategory(String),

    /// Replace the free-text query
    SetQuery(String),

    /// Set how selected tags combine
    SetTagMode(TagMode),

    /// Flip between ANY and ALL
    ToggleTagMode,

    /// Change the sort order
    SetSort(SortKey, SortDirection),

    /// Clear query, tags and categories, keeping the tag mode and sort order
    Clear,

    /// Re-run the query without changing the selection (e.g. dataset reloaded)
    Refresh,
}

/// What an [`Action`] did to the selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionOutcome {
    /// Tags that became selected
    pub tags_added: Vec<String>,

    /// Tags that were deselected
    pub tags_removed: Vec<String>,

    /// Categories the user toggled on
    pub categories_added: Vec<String>,

    /// Categories the user toggled off
    pub categories_removed: Vec<String>,

    /// Categories dropped automatically because no selected tag justified them
    pub categories_auto_removed: Vec<String>,
}

impl ActionOutcome {
    /// Whether the selected tags or categories changed
    #[must_use]
    pub fn selection_changed(&self) -> bool {
        !(self.tags_added.is_empty()
            && self.tags_removed.is_empty()
            && self.categories_added.is_empty()
            && self.categories_removed.is_empty()
            && self.categories_auto_removed.is_empty())
    }

    /// Whether sync dropped any category, which views usually announce
    #[must_use]
    pub fn auto_removed_any(&self) -> bool {
        !self.categories_auto_removed.is_empty()
    }
}
