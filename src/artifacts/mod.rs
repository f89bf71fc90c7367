//! API surface data structures and diff algorithms
//!
//! This module contains the engine's types and algorithms:
//!
//! - `core`: Shared utilities (pager wrapper)
//! - `model`: Review lines, API tree nodes, tokens and diff kinds
//! - `identity`: Content hashing and the per-call hashed arena
//! - `diff`: Sibling alignment, tree/line differs and their output assembly

pub mod core;
pub mod diff;
pub mod identity;
pub mod model;
