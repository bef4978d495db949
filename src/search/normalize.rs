//! Free-text query normalization and matching
//!
//! Queries arrive straight from a text box. Before matching they are
//! sanitized and folded so that comparison is insensitive to case, accents
//! and spacing:
//!
//! 1. Text is lowercased, decomposed (NFD) and stripped of combining marks
//! 2. HTML-like markup (`<b>`, `<script ...>`) is replaced by a space
//! 3. Stray `<` / `>` and control characters are dropped
//! 4. Whitespace runs collapse to one space and the ends are trimmed
//! 5. The result is capped at [`MAX_QUERY_CHARS`] code points
//!
//! Folding runs before markup removal because decomposition can produce
//! `<` and `>` (`≮` is `<` plus a combining solidus).
//!
//! Entry fields and tag labels go through the same canonical form (steps
//! 1-4) at match time, so a normalized query is a plain substring test
//! against them.

use super::traits::AsEntry;
use crate::taxonomy::Taxonomy;
use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Default cap on a normalized query, in code points
pub const MAX_QUERY_CHARS: usize = 500;

static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("markup pattern is a valid regex"));

/// Normalize a raw query with the default length cap
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
///
/// # Examples
/// ```
/// # use facetr::search::normalize::normalize;
/// assert_eq!(normalize("  Fire   <b>Ball</b> "), "fire ball");
/// assert_eq!(normalize("Éclair"), "eclair");
/// assert_eq!(normalize("\t\n"), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    normalize_with_limit(raw, MAX_QUERY_CHARS)
}

/// Normalize a raw query, keeping at most `limit` code points
#[must_use]
pub fn normalize_with_limit(raw: &str, limit: usize) -> String {
    let canonical = canonicalize(raw);
    if canonical.chars().count() <= limit {
        return canonical;
    }

    let truncated: String = canonical.chars().take(limit).collect();
    tracing::trace!(limit, "query truncated");
    truncated.trim_end().to_string()
}

/// Folded text with markup, angle brackets and control characters removed
///
/// This is [`normalize`] without the length cap; entry fields are compared
/// in this form.
///
/// # Examples
/// ```
/// # use facetr::search::normalize::canonicalize;
/// assert_eq!(canonicalize("a<b"), "ab");
/// assert_eq!(canonicalize("\u{226E}script\u{226F}"), "");
/// ```
#[must_use]
pub fn canonicalize(text: &str) -> String {
    let folded = fold(text);
    let unmarked = MARKUP.replace_all(&folded, " ");
    let cleaned: String = unmarked
        .chars()
        .filter_map(|c| match c {
            '<' | '>' => None,
            c if c.is_whitespace() => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-, accent- and whitespace-insensitive form of a text
///
/// # Examples
/// ```
/// # use facetr::search::normalize::fold;
/// assert_eq!(fold("Crème  BRÛLÉE"), "creme brulee");
/// ```
#[must_use]
pub fn fold(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Check an entry against an already-normalized query
///
/// An empty query matches everything. Otherwise the query must be a
/// substring of a searchable field (name, descriptor, description) or of
/// one of the entry's tags, compared in [`canonicalize`]d form.
#[must_use]
pub fn matches<T: AsEntry + ?Sized>(entry: &T, normalized_query: &str) -> bool {
    if normalized_query.is_empty() {
        return true;
    }

    let view = entry.as_entry();
    view.searchable_fields()
        .into_iter()
        .chain(view.tags.iter().map(String::as_str))
        .any(|text| canonicalize(text).contains(normalized_query))
}

/// Like [`matches`], also testing each tag's human label from the taxonomy
#[must_use]
pub fn matches_with_labels<T: AsEntry + ?Sized>(
    entry: &T,
    normalized_query: &str,
    taxonomy: &Taxonomy,
) -> bool {
    if matches(entry, normalized_query) {
        return true;
    }

    entry
        .as_entry()
        .tags
        .iter()
        .map(|tag| taxonomy.label(tag))
        .any(|label| canonicalize(label).contains(normalized_query))
}
