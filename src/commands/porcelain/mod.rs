//! Porcelain commands
//!
//! ## Commands
//!
//! - `lines`: Diff two review-line documents
//! - `forest`: Diff two API element forests

pub mod diff;
