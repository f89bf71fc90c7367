//! CLI command implementations
//!
//! Commands are methods on [`Session`](crate::areas::session::Session),
//! organized into two categories:
//!
//! - `plumbing`: Low-level inspection of the engine's inputs (hash-tree)
//! - `porcelain`: User-facing comparisons (lines, forest)

pub mod plumbing;
pub mod porcelain;
