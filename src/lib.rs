//! Facetr - faceted filtering over small tagged reference datasets
//!
//! This library narrows a static dataset by free-text search, individual tag
//! selection and category selection, then orders the result by one of several
//! keys. The engine is pure and synchronous; callers own the selection state
//! and the data.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod browse;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod output;
pub mod search;
pub mod taxonomy;

#[cfg(test)]
pub mod testing;

pub use browse::{BrowseSession, QueryResult, SelectionState, query, sync_categories};
pub use search::{AsEntry, EntryView};
pub use taxonomy::{Category, Taxonomy};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FacetrError {
    /// Taxonomy could not be loaded or is inconsistent
    #[error("Taxonomy error: {0}")]
    TaxonomyError(#[from] taxonomy::TaxonomyError),
    /// Dataset could not be loaded or is inconsistent
    #[error("Dataset error: {0}")]
    DatasetError(#[from] dataset::DatasetError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Results could not be rendered as JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// One record of the browsable dataset
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub descriptor: String,
    #[serde(default)]
    pub description: String,
    pub tags: Vec<String>,
    /// Optional tie-break when sorting by category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

impl Entry {
    /// Create a new Entry with empty descriptor and description
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            descriptor: String::new(),
            description: String::new(),
            tags,
            rank: None,
        }
    }

    #[must_use]
    pub fn with_descriptor(mut self, descriptor: impl Into<String>) -> Self {
        self.descriptor = descriptor.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub const fn with_rank(mut self, rank: Option<u32>) -> Self {
        self.rank = rank;
        self
    }
}

impl AsEntry for Entry {
    fn as_entry(&self) -> EntryView<'_> {
        EntryView::new(&self.id, &self.name, &self.tags)
            .with_descriptor(&self.descriptor)
            .with_description(&self.description)
            .with_rank(self.rank)
    }
}
