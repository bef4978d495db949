//! Browse module - selection state, ordering and the query pipeline
//!
//! This module provides the stateful half of the engine. It is UI-agnostic:
//! any frontend owns a `SelectionState` (or a `BrowseSession`) and calls into
//! the same pure functions on every user action.
//!
//! # Architecture
//!
//! - `models`: Core value types (`TagMode`, `SortKey`, `Action`, ...)
//! - `state`: Caller-owned selection with mutators
//! - `sync`: Category synchronization after tag removal
//! - `sort`: Total, deterministic result ordering
//! - `query`: Filter → sort pipeline and action application
//! - `session`: Dataset + taxonomy + selection bundled for a view

pub mod models;
pub mod query;
pub mod session;
pub mod sort;
pub mod state;
pub mod sync;

pub use models::{Action, ActionOutcome, SortDirection, SortKey, TagMode};
pub use query::{QueryResult, apply, query, query_with_limit};
pub use session::BrowseSession;
pub use sort::{category_rank, sort};
pub use state::SelectionState;
pub use sync::{dropped_categories, sync_categories};
