//! Output formatting for CLI display
//!
//! This module provides utilities for formatting query results and tag
//! listings in the CLI.

use crate::search::AsEntry;
use crate::taxonomy::{CategoryTagCounts, Taxonomy};
use colored::Colorize;
use serde::Serialize;

/// Format an entry with its tags for display
#[must_use]
pub fn entry_line<T: AsEntry + ?Sized>(entry: &T, taxonomy: &Taxonomy, quiet: bool) -> String {
    let view = entry.as_entry();
    if quiet {
        return view.id.to_string();
    }

    let tags: Vec<&str> = view.tags.iter().map(|t| taxonomy.label(t)).collect();
    let mut line = format!("  {}", view.name.bold());
    if !view.descriptor.is_empty() {
        line.push_str(&format!(" - {}", view.descriptor));
    }
    line.push_str(&format!(" [{}]", tags.join(", ").cyan()));
    line
}

/// Render result entries as a pretty-printed JSON array
///
/// # Errors
/// Returns error if an entry cannot be serialized
pub fn entries_json<T: Serialize>(entries: &[&T]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}

/// Format the number of results the way a status line announces it
#[must_use]
pub fn result_count(count: usize) -> String {
    match count {
        0 => "No entries match".yellow().to_string(),
        1 => "1 entry".green().to_string(),
        n => format!("{n} entries").green().to_string(),
    }
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &str, label: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else if label == tag {
        format!("    {tag} ({count})")
    } else {
        format!("    {tag} - {label} ({count})")
    }
}

/// Format per-category tag counts as an indented listing
#[must_use]
pub fn tag_listing(counts: &[CategoryTagCounts], quiet: bool) -> Vec<String> {
    let mut lines = Vec::new();
    for group in counts {
        if !quiet {
            lines.push(format!(
                "{} {}",
                group.category.name.bold(),
                format!("(#{})", group.category.rank).dimmed()
            ));
        }
        for tag in &group.tags {
            lines.push(tag_with_count(&tag.tag, &tag.label, tag.count, quiet));
        }
    }
    lines
}
