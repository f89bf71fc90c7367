//! Plumbing commands
//!
//! ## Commands
//!
//! - `hash-tree`: List the subtree hash of every node of a document

pub mod hash_tree;
