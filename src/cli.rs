//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for facetr using the `clap` crate.
//! The CLI is a thin view over the engine: it loads a dataset and taxonomy,
//! builds a `SelectionState` from flags, and prints the ordered result.
//!
//! # Commands
//!
//! - **query**: Filter and sort entries (default)
//! - **tags**: List the taxonomy with per-tag entry counts
//!
//! # Examples
//!
//! ```bash
//! facetr query fire -t damage -c control --any --sort category
//! facetr tags
//! ```

use crate::browse::models::{SortDirection, SortKey, TagMode};
use crate::browse::SelectionState;
use crate::config::FacetrConfig;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Sort key as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortArg {
    /// Entry name
    Name,
    /// Short descriptor
    Descriptor,
    /// Free-text description
    Description,
    /// Category rank, then name
    Category,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => Self::Name,
            SortArg::Descriptor => Self::Descriptor,
            SortArg::Description => Self::Description,
            SortArg::Category => Self::Category,
        }
    }
}

/// Selection flags for the query command
#[derive(Parser, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Free-text query matched against names, descriptors, descriptions and tags
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Tags to select (can specify multiple: -t tag1 -t tag2)
    #[arg(short = 't', long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Categories to select (can specify multiple: -c cat1 -c cat2)
    #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Match entries with ANY of the selected tags (OR logic)
    #[arg(long = "any", conflicts_with = "all")]
    pub any: bool,

    /// Match entries with ALL of the selected tags (AND logic)
    #[arg(long = "all", conflicts_with = "any")]
    pub all: bool,

    /// Sort key (overrides config)
    #[arg(short = 's', long = "sort", value_enum)]
    pub sort: Option<SortArg>,

    /// Sort descending
    #[arg(long = "desc")]
    pub desc: bool,

    /// Print results as JSON
    #[arg(long = "json")]
    pub json: bool,
}

impl QueryArgs {
    /// Build a selection from these flags on top of configured defaults
    ///
    /// Tags and categories are inserted directly: a fresh selection has
    /// nothing to deselect, so no category sync is involved.
    #[must_use]
    pub fn to_selection(&self, config: &FacetrConfig) -> SelectionState {
        let mut state = SelectionState::from_config(config);
        if let Some(query) = &self.query {
            state.set_query(query.clone());
        }
        state.selected_tags.extend(self.tags.iter().cloned());
        state.selected_categories.extend(self.categories.iter().cloned());

        if self.any {
            state.set_tag_mode(TagMode::Any);
        } else if self.all {
            state.set_tag_mode(TagMode::All);
        }

        let key = self.sort.map_or(state.sort_key, SortKey::from);
        let direction = if self.desc {
            SortDirection::Desc
        } else {
            state.sort_direction
        };
        state.set_sort(key, direction);
        state
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "facetr")]
#[command(about = "Faceted filtering over tagged reference data", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Dataset file, a JSON array of entries (overrides config)
    #[arg(long = "dataset", value_name = "FILE", global = true)]
    pub dataset: Option<PathBuf>,

    /// Taxonomy file in TOML (overrides config)
    #[arg(long = "taxonomy", value_name = "FILE", global = true)]
    pub taxonomy: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Filter and sort entries (default)
    #[command(visible_alias = "q")]
    Query(QueryArgs),

    /// List categories and tags with entry counts
    #[command(visible_alias = "t")]
    Tags,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command to run, defaulting to an unfiltered query
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Query(QueryArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        let cli = Cli::try_parse_from([
            "facetr", "query", "fire", "-t", "damage", "-t", "burn", "-c", "offense", "--all",
            "--sort", "category", "--desc",
        ])
        .unwrap();

        let Commands::Query(args) = cli.get_command() else {
            panic!("Expected query command");
        };
        assert_eq!(args.query.as_deref(), Some("fire"));
        assert_eq!(args.tags, vec!["damage", "burn"]);
        assert_eq!(args.categories, vec!["offense"]);
        assert!(args.all);
        assert_eq!(args.sort, Some(SortArg::Category));
        assert!(args.desc);
    }

    #[test]
    fn test_any_and_all_conflict() {
        assert!(Cli::try_parse_from(["facetr", "query", "--any", "--all"]).is_err());
    }

    #[test]
    fn test_default_command() {
        let cli = Cli::try_parse_from(["facetr", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.get_command(), Commands::Query(_)));
    }

    #[test]
    fn test_global_paths() {
        let cli = Cli::try_parse_from(["facetr", "tags", "--taxonomy", "tax.toml"]).unwrap();
        assert_eq!(cli.taxonomy, Some(PathBuf::from("tax.toml")));
        assert!(matches!(cli.get_command(), Commands::Tags));
    }

    #[test]
    fn test_to_selection() {
        let config = FacetrConfig {
            default_tag_mode: TagMode::All,
            default_sort_key: SortKey::Descriptor,
            ..FacetrConfig::default()
        };

        let args = QueryArgs {
            query: Some("  Fire ".into()),
            tags: vec!["damage".into()],
            categories: vec!["offense".into()],
            any: true,
            ..QueryArgs::default()
        };
        let state = args.to_selection(&config);
        assert_eq!(state.query, "  Fire ");
        assert!(state.is_tag_selected("damage"));
        assert!(state.is_category_selected("offense"));
        assert_eq!(state.tag_mode, TagMode::Any);
        assert_eq!(state.sort_key, SortKey::Descriptor);
        assert_eq!(state.sort_direction, SortDirection::Asc);

        let defaults = QueryArgs::default().to_selection(&config);
        assert_eq!(defaults.tag_mode, TagMode::All);
    }
}
