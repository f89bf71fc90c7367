//! Structural diff engine for API surface trees
//!
//! Compares two versions of a package's public API surface and produces an
//! annotated tree in which every node is tagged `Unchanged`, `Added` or
//! `Removed`. Two entry points are exposed:
//!
//! - [`compute_forest_diff`]: coarse diff over API element trees
//! - [`find_line_diff`]: fine-grained diff over rendered review lines, with
//!   skip-diff tokens, context-end pairing and overload grouping
//!
//! The engine is pure: it borrows both inputs, allocates the output and keeps
//! no state between calls.

#[macro_use]
mod tracing_macros;

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use artifacts::diff::line_diff::{find_line_diff, find_line_diff_with_options};
pub use artifacts::diff::options::DiffOptions;
pub use artifacts::diff::summary::DiffSummary;
pub use artifacts::diff::tree_diff::compute_forest_diff;
pub use artifacts::model::{ApiTreeNode, DiffKind, ReviewLine, ReviewToken, TokenKind};
