//! Tag taxonomy: the closed tag vocabulary and its categories
//!
//! This module provides the `Taxonomy` type which holds:
//! - **Categories**: Coarse groupings with a unique, positive display rank
//! - **Tag mapping**: Every tag belongs to exactly one category
//! - **Labels**: Optional human readable names for tags
//!
//! A taxonomy is validated once when it is built and is read-only afterwards.
//!
//! # Examples
//!
//! ```
//! use facetr::taxonomy::Taxonomy;
//!
//! let taxonomy = Taxonomy::builder()
//!     .category("offense", 1, "Offense")
//!     .category("defense", 2, "Defense")
//!     .tag("damage", "offense")
//!     .tag("shield", "defense")
//!     .build()?;
//!
//! assert_eq!(taxonomy.category_of("shield"), Some("defense"));
//! assert_eq!(taxonomy.rank_of_tag("damage"), Some(1));
//! # Ok::<(), facetr::taxonomy::TaxonomyError>(())
//! ```

pub mod error;
pub mod types;

pub use error::{Result, TaxonomyError};
pub use types::{Category, CategoryTagCounts, TagCount, Taxonomy, TaxonomyBuilder};
