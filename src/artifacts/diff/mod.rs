//! Structural diff over API trees and review lines
//!
//! - `alignment`: order-preserving matching of keyed sibling lists
//! - `tree_diff`: the generic level-by-level differ and the forest rules
//! - `line_diff`: review-line rules (context-end pairing, overload groups)
//! - `token_diff`: Myers over the tokens of a modified line
//! - `summary`: counts and top-most changes of an annotated forest

pub mod alignment;
pub mod assembler;
pub mod diff_algorithm;
pub mod diff_filter;
pub mod diff_node;
pub mod line_diff;
pub mod options;
pub mod summary;
pub mod token_diff;
pub mod tree_diff;
