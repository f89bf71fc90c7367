use crate::artifacts::model::token::{diff_values, render_tokens};
use crate::artifacts::model::{DiffKind, ReviewToken, non_empty};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Coarse API element: a namespace, type or member with its nested members
///
/// `top_tokens` render the declaration, `bottom_tokens` the block that closes
/// it. For a matched node whose own tokens changed, the engine keeps the old
/// tokens in `top_tokens`/`bottom_tokens` and stores the new ones in
/// `diff_top_tokens`/`diff_bottom_tokens`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiTreeNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
    #[serde(default)]
    pub top_tokens: Vec<ReviewToken>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bottom_tokens: Vec<ReviewToken>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diff_top_tokens: Vec<ReviewToken>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diff_bottom_tokens: Vec<ReviewToken>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ApiTreeNode>,
    #[serde(default)]
    pub diff_kind: DiffKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_language_id: Option<String>,
}

impl ApiTreeNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: impl Into<String>) -> Self {
        ApiTreeNode {
            id: Some(id.into()),
            name: name.into(),
            kind: kind.into(),
            ..Default::default()
        }
    }

    pub fn with_children(mut self, children: Vec<ApiTreeNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_top_tokens(mut self, tokens: Vec<ReviewToken>) -> Self {
        self.top_tokens = tokens;
        self
    }

    pub fn with_bottom_tokens(mut self, tokens: Vec<ReviewToken>) -> Self {
        self.bottom_tokens = tokens;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn node_id(&self) -> Option<&str> {
        non_empty(self.id.as_ref())
    }

    pub fn top_text(&self) -> String {
        render_tokens(&self.top_tokens)
    }

    pub fn bottom_text(&self) -> String {
        render_tokens(&self.bottom_tokens)
    }

    /// Whether both nodes carry the same diff-relevant token values
    pub fn same_tokens_as(&self, other: &ApiTreeNode) -> bool {
        diff_values(&self.top_tokens).eq(diff_values(&other.top_tokens))
            && diff_values(&self.bottom_tokens).eq(diff_values(&other.bottom_tokens))
    }
}
