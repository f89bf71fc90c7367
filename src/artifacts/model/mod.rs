//! API surface data model
//!
//! Two node shapes are compared by the engine:
//!
//! - **ReviewLine**: one rendered declaration line, with nested child lines
//! - **ApiTreeNode**: one coarse API element (namespace, type, member)
//!
//! Both carry typed tokens whose `skip_diff` flag removes them from
//! comparisons, and a `DiffKind` that only the engine assigns.

pub mod api_tree_node;
pub mod diff_kind;
pub mod review_line;
pub mod token;

pub use api_tree_node::ApiTreeNode;
pub use diff_kind::DiffKind;
pub use review_line::ReviewLine;
pub use token::{DIFF_CHANGE_CLASS, ReviewToken, TokenKind};

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

pub(crate) fn non_empty(id: Option<&String>) -> Option<&str> {
    id.map(String::as_str).filter(|id| !id.is_empty())
}
