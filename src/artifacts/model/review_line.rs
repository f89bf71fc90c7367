use crate::artifacts::model::token::render_tokens;
use crate::artifacts::model::{DiffKind, ReviewToken, is_false, non_empty};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One rendered declaration line of an API review
///
/// Lines nest: a class line owns its member lines as children, and the
/// closing brace is a context-end sibling that follows the class line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReviewLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_language_id: Option<String>,
    #[serde(default)]
    pub tokens: Vec<ReviewToken>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ReviewLine>,
    #[serde(default)]
    pub diff_kind: DiffKind,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_context_end_line: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_to_line: Option<String>,
}

impl ReviewLine {
    pub fn new(line_id: impl Into<String>, tokens: Vec<ReviewToken>) -> Self {
        ReviewLine {
            line_id: Some(line_id.into()),
            tokens,
            ..Default::default()
        }
    }

    /// A line that cannot be addressed across revisions, e.g. a blank separator
    pub fn anonymous(tokens: Vec<ReviewToken>) -> Self {
        ReviewLine {
            tokens,
            ..Default::default()
        }
    }

    pub fn context_end(tokens: Vec<ReviewToken>) -> Self {
        ReviewLine {
            tokens,
            is_context_end_line: true,
            ..Default::default()
        }
    }

    pub fn with_line_id(mut self, line_id: impl Into<String>) -> Self {
        self.line_id = Some(line_id.into());
        self
    }

    pub fn with_children(mut self, children: Vec<ReviewLine>) -> Self {
        self.children = children;
        self
    }

    pub fn related_to(mut self, line_id: impl Into<String>) -> Self {
        self.related_to_line = Some(line_id.into());
        self
    }

    pub fn with_cross_language_id(mut self, id: impl Into<String>) -> Self {
        self.cross_language_id = Some(id.into());
        self
    }

    /// The line id, treating an empty id as absent
    pub fn id(&self) -> Option<&str> {
        non_empty(self.line_id.as_ref())
    }

    pub fn is_block_opener(&self) -> bool {
        !self.children.is_empty() && !self.is_context_end_line
    }

    /// Full rendered text, skip-diff tokens included
    pub fn text(&self) -> String {
        render_tokens(&self.tokens)
    }
}

impl fmt::Display for ReviewLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
