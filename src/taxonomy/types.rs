use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use super::error::{Result, TaxonomyError};
use crate::search::AsEntry;

/// A coarse grouping of tags with a unique display rank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier used in selections
    pub id: String,
    /// Display rank, unique and positive; lower ranks are shown first
    pub rank: u32,
    /// Human readable name
    pub name: String,
}

impl Category {
    #[must_use]
    pub fn new(id: impl Into<String>, rank: u32, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rank,
            name: name.into(),
        }
    }
}

/// On-disk form of a category: the definition plus the tags it owns
#[derive(Debug, Clone, Deserialize)]
struct CategoryDef {
    id: String,
    rank: u32,
    name: String,
    #[serde(default)]
    tags: Vec<String>,
}

/// On-disk form of a taxonomy file
#[derive(Debug, Clone, Deserialize)]
struct TaxonomyFile {
    #[serde(default)]
    categories: Vec<CategoryDef>,
    #[serde(default)]
    labels: HashMap<String, String>,
}

/// Static tag → category mapping plus category metadata
///
/// A `Taxonomy` can only be obtained through [`TaxonomyBuilder::build`] (or the
/// loaders built on it), which checks that every tag maps to exactly one
/// existing category and that category ids and ranks are unique. After that
/// it is read-only.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    /// Categories ordered by display rank
    categories: Vec<Category>,

    /// Maps tag → owning category id
    tag_categories: HashMap<String, String>,

    /// Maps tag → human label (tags without one display as themselves)
    labels: HashMap<String, String>,
}

impl Taxonomy {
    /// Start building a taxonomy
    #[must_use]
    pub fn builder() -> TaxonomyBuilder {
        TaxonomyBuilder::default()
    }

    /// Parse a taxonomy from TOML text
    ///
    /// ```toml
    /// [[categories]]
    /// id = "offense"
    /// rank = 1
    /// name = "Offense"
    /// tags = ["damage", "crit"]
    ///
    /// [labels]
    /// crit = "Critical Strike"
    /// ```
    ///
    /// # Errors
    /// Returns error if the text is not valid TOML or the taxonomy is inconsistent
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: TaxonomyFile = toml::from_str(content)?;
        let mut builder = Self::builder();
        for def in file.categories {
            for tag in def.tags {
                builder = builder.tag(tag, def.id.clone());
            }
            builder = builder.category(def.id, def.rank, def.name);
        }
        for (tag, label) in file.labels {
            builder = builder.label(tag, label);
        }
        builder.build()
    }

    /// Load a taxonomy from a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed or validated
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let taxonomy = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            categories = taxonomy.categories.len(),
            tags = taxonomy.tag_categories.len(),
            "loaded taxonomy"
        );
        Ok(taxonomy)
    }

    /// All categories, ordered by display rank
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by id
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Id of the category a tag belongs to, if the tag is known
    #[must_use]
    pub fn category_of(&self, tag: &str) -> Option<&str> {
        self.tag_categories.get(tag).map(String::as_str)
    }

    /// Display rank of the category a tag belongs to
    #[must_use]
    pub fn rank_of_tag(&self, tag: &str) -> Option<u32> {
        self.category_of(tag)
            .and_then(|id| self.category(id))
            .map(|c| c.rank)
    }

    /// Human label for a tag, falling back to the tag itself
    #[must_use]
    pub fn label<'a>(&'a self, tag: &'a str) -> &'a str {
        self.labels.get(tag).map_or(tag, String::as_str)
    }

    /// Whether the tag is part of the vocabulary
    #[must_use]
    pub fn contains_tag(&self, tag: &str) -> bool {
        self.tag_categories.contains_key(tag)
    }

    /// Whether a category with this id exists
    #[must_use]
    pub fn contains_category(&self, id: &str) -> bool {
        self.category(id).is_some()
    }

    /// Tags belonging to a category, sorted alphabetically
    #[must_use]
    pub fn tags_in(&self, category: &str) -> Vec<&str> {
        let mut tags: Vec<&str> = self
            .tag_categories
            .iter()
            .filter(|(_, c)| c.as_str() == category)
            .map(|(t, _)| t.as_str())
            .collect();
        tags.sort_unstable();
        tags
    }

    /// Count how many entries carry each tag, grouped by category in rank order
    ///
    /// Tags no entry carries are still listed with a count of zero.
    #[must_use]
    pub fn tag_counts<T: AsEntry>(&self, dataset: &[T]) -> Vec<CategoryTagCounts> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for item in dataset {
            for tag in item.as_entry().tags {
                *counts.entry(tag.as_str()).or_default() += 1;
            }
        }

        self.categories
            .iter()
            .map(|category| CategoryTagCounts {
                category: category.clone(),
                tags: self
                    .tags_in(&category.id)
                    .into_iter()
                    .map(|tag| TagCount {
                        tag: tag.to_string(),
                        label: self.label(tag).to_string(),
                        count: counts.get(tag).copied().unwrap_or(0),
                    })
                    .collect(),
            })
            .collect()
    }
}

/// A tag together with the number of entries that carry it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub label: String,
    pub count: usize,
}

/// Tag counts for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTagCounts {
    pub category: Category,
    pub tags: Vec<TagCount>,
}

/// Builder for [`Taxonomy`]
///
/// Collects categories, tag assignments and labels in any order and validates
/// them together in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct TaxonomyBuilder {
    categories: Vec<Category>,
    assignments: Vec<(String, String)>,
    labels: Vec<(String, String)>,
}

impl TaxonomyBuilder {
    /// Define a category
    #[must_use]
    pub fn category(mut self, id: impl Into<String>, rank: u32, name: impl Into<String>) -> Self {
        self.categories.push(Category::new(id, rank, name));
        self
    }

    /// Assign a tag to a category
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>, category: impl Into<String>) -> Self {
        self.assignments.push((tag.into(), category.into()));
        self
    }

    /// Give a tag a human label
    #[must_use]
    pub fn label(mut self, tag: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.push((tag.into(), label.into()));
        self
    }

    /// Validate and build the taxonomy
    ///
    /// # Errors
    /// Returns error if:
    /// - A category id or display rank is used twice, or a rank is 0
    /// - A tag is assigned to two different categories
    /// - A tag is assigned to a category that was never defined
    /// - A label names a tag that has no category
    pub fn build(self) -> Result<Taxonomy> {
        let mut by_rank: BTreeMap<u32, String> = BTreeMap::new();
        for category in &self.categories {
            if category.rank == 0 {
                return Err(TaxonomyError::InvalidRank(category.id.clone()));
            }
            if self.categories.iter().filter(|c| c.id == category.id).count() > 1 {
                return Err(TaxonomyError::DuplicateCategory(category.id.clone()));
            }
            if let Some(first) = by_rank.insert(category.rank, category.id.clone()) {
                return Err(TaxonomyError::DuplicateRank {
                    rank: category.rank,
                    first,
                    second: category.id.clone(),
                });
            }
        }

        let mut tag_categories: HashMap<String, String> = HashMap::new();
        for (tag, category) in self.assignments {
            if !by_rank.values().any(|id| *id == category) {
                return Err(TaxonomyError::UnknownCategory { tag, category });
            }
            match tag_categories.get(&tag) {
                Some(first) if *first != category => {
                    return Err(TaxonomyError::DuplicateTag {
                        first: first.clone(),
                        tag,
                        second: category,
                    });
                }
                Some(_) => {}
                None => {
                    tag_categories.insert(tag, category);
                }
            }
        }

        let mut labels = HashMap::new();
        for (tag, label) in self.labels {
            if !tag_categories.contains_key(&tag) {
                return Err(TaxonomyError::UnknownLabelTag(tag));
            }
            labels.insert(tag, label);
        }

        let mut categories = self.categories;
        categories.sort_by_key(|c| c.rank);

        Ok(Taxonomy {
            categories,
            tag_categories,
            labels,
        })
    }
}
