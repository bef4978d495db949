//! Dataset loading
//!
//! The engine assumes well-formed entries. This is the loader that makes that
//! true for the command line: it reads a JSON array of entries and rejects
//! anything the engine's preconditions rule out.
//!
//! ```json
//! [
//!   { "id": "fireball", "name": "Fireball", "descriptor": "Hurls flame",
//!     "description": "Deals fire damage in a radius.", "tags": ["damage"] }
//! ]
//! ```

use crate::Entry;
use crate::taxonomy::Taxonomy;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two entries share an id
    #[error("Entry id '{0}' appears more than once")]
    DuplicateId(String),

    /// An entry has no tags
    #[error("Entry '{0}' has no tags")]
    NoTags(String),

    /// An entry uses a tag outside the taxonomy vocabulary
    #[error("Entry '{id}' uses unknown tag '{tag}'")]
    UnknownTag { id: String, tag: String },
}

/// Check entries against the engine's preconditions
///
/// # Errors
/// Returns the first problem found: a duplicate id, an entry with no tags, or
/// a tag the taxonomy does not know.
pub fn validate(entries: &[Entry], taxonomy: &Taxonomy) -> Result<(), DatasetError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.id.as_str()) {
            return Err(DatasetError::DuplicateId(entry.id.clone()));
        }
        if entry.tags.is_empty() {
            return Err(DatasetError::NoTags(entry.id.clone()));
        }
        if let Some(tag) = entry.tags.iter().find(|t| !taxonomy.contains_tag(t)) {
            return Err(DatasetError::UnknownTag {
                id: entry.id.clone(),
                tag: tag.clone(),
            });
        }
    }
    Ok(())
}

/// Parse and validate entries from JSON text
///
/// # Errors
/// Returns error if the text is not a JSON array of entries or fails [`validate`]
pub fn from_json_str(content: &str, taxonomy: &Taxonomy) -> Result<Vec<Entry>, DatasetError> {
    let entries: Vec<Entry> = serde_json::from_str(content)?;
    validate(&entries, taxonomy)?;
    Ok(entries)
}

/// Load and validate entries from a JSON file
///
/// # Errors
/// Returns error if the file cannot be read, parsed or validated
pub fn load(path: &Path, taxonomy: &Taxonomy) -> Result<Vec<Entry>, DatasetError> {
    let content = std::fs::read_to_string(path)?;
    let entries = from_json_str(&content, taxonomy)?;
    tracing::debug!(path = %path.display(), entries = entries.len(), "loaded dataset");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::scenario_taxonomy;

    #[test]
    fn test_from_json_str() {
        let taxonomy = scenario_taxonomy();
        let json = r#"[
            {"id": "A", "name": "Alpha", "tags": ["x", "y"]},
            {"id": "B", "name": "Bravo", "descriptor": "second", "tags": ["y"], "rank": 4}
        ]"#;

        let entries = from_json_str(json, &taxonomy).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].description, "");
        assert_eq!(entries[1].descriptor, "second");
        assert_eq!(entries[1].rank, Some(4));
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let taxonomy = scenario_taxonomy();
        let entries = vec![
            Entry::new("A", "Alpha", vec!["x".into()]),
            Entry::new("A", "Again", vec!["y".into()]),
        ];
        assert!(matches!(validate(&entries, &taxonomy), Err(DatasetError::DuplicateId(id)) if id == "A"));
    }

    #[test]
    fn test_rejects_untagged_entry() {
        let taxonomy = scenario_taxonomy();
        let entries = vec![Entry::new("A", "Alpha", vec![])];
        assert!(matches!(validate(&entries, &taxonomy), Err(DatasetError::NoTags(_))));
    }

    #[test]
    fn test_rejects_unknown_tag() {
        let taxonomy = scenario_taxonomy();
        let entries = vec![Entry::new("A", "Alpha", vec!["x".into(), "w".into()])];
        assert!(matches!(
            validate(&entries, &taxonomy),
            Err(DatasetError::UnknownTag { tag, .. }) if tag == "w"
        ));
    }

    #[test]
    fn test_rejects_bad_json() {
        let taxonomy = scenario_taxonomy();
        assert!(matches!(
            from_json_str("{not json", &taxonomy),
            Err(DatasetError::Json(_))
        ));
    }

    #[test]
    fn test_empty_array_is_valid() {
        let taxonomy = scenario_taxonomy();
        assert!(from_json_str("[]", &taxonomy).unwrap().is_empty());
    }
}
