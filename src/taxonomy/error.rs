use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaxonomyError {
    /// I/O error when reading the taxonomy file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Two categories share the same id
    #[error("Category '{0}' is defined more than once")]
    DuplicateCategory(String),

    /// Two categories share the same display rank
    #[error("Display rank {rank} is used by both '{first}' and '{second}'")]
    DuplicateRank {
        rank: u32,
        first: String,
        second: String,
    },

    /// Display ranks start at 1
    #[error("Category '{0}' has display rank 0; ranks must be positive")]
    InvalidRank(String),

    /// A tag was assigned to two categories
    #[error("Tag '{tag}' belongs to both '{first}' and '{second}'")]
    DuplicateTag {
        tag: String,
        first: String,
        second: String,
    },

    /// A tag was assigned to a category that does not exist
    #[error("Tag '{tag}' maps to unknown category '{category}'")]
    UnknownCategory { tag: String, category: String },

    /// A label was given for a tag that is not in the vocabulary
    #[error("Label given for unknown tag '{0}'")]
    UnknownLabelTag(String),
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, TaxonomyError>;
