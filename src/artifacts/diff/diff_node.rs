use crate::artifacts::identity::content_hash::ContentDigest;
use crate::artifacts::model::{ApiTreeNode, DiffKind, ReviewLine};

/// A tree node the generic differ can hash, walk and annotate
///
/// Implementors describe how their own content feeds the subtree hash and
/// how to build an annotated copy; the differ owns everything else.
pub trait DiffNode: Clone {
    fn node_id(&self) -> Option<&str>;

    fn children(&self) -> &[Self];

    fn diff_kind(&self) -> DiffKind;

    /// Feed this node's diff-relevant content, excluding children
    fn digest_content(&self, digest: &mut ContentDigest);

    /// Copy of this node carrying `kind` and the given children
    fn annotate(&self, kind: DiffKind, children: Vec<Self>) -> Self;

    /// Output for a matched pair whose subtrees differ
    fn merge_matched(&self, _other: &Self, children: Vec<Self>) -> Self {
        self.annotate(DiffKind::Unchanged, children)
    }

    /// Record that this node's diff status derives from the node `line_id`
    fn set_related_to(&mut self, _line_id: &str) {}
}

impl DiffNode for ReviewLine {
    fn node_id(&self) -> Option<&str> {
        self.id()
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn diff_kind(&self) -> DiffKind {
        self.diff_kind
    }

    fn digest_content(&self, digest: &mut ContentDigest) {
        digest.write_opt_str(self.id());
        digest.write_flag(self.is_context_end_line);
        digest.write_tokens(&self.tokens);
    }

    fn annotate(&self, kind: DiffKind, children: Vec<Self>) -> Self {
        ReviewLine {
            line_id: self.line_id.clone(),
            cross_language_id: self.cross_language_id.clone(),
            tokens: self.tokens.clone(),
            children,
            diff_kind: kind,
            is_context_end_line: self.is_context_end_line,
            related_to_line: self.related_to_line.clone(),
        }
    }

    fn set_related_to(&mut self, line_id: &str) {
        self.related_to_line = Some(line_id.to_string());
    }
}

impl DiffNode for ApiTreeNode {
    fn node_id(&self) -> Option<&str> {
        ApiTreeNode::node_id(self)
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn diff_kind(&self) -> DiffKind {
        self.diff_kind
    }

    fn digest_content(&self, digest: &mut ContentDigest) {
        digest.write_opt_str(ApiTreeNode::node_id(self));
        digest.write_str(&self.name);
        digest.write_str(&self.kind);
        digest.write_tokens(&self.top_tokens);
        digest.write_tokens(&self.bottom_tokens);
    }

    fn annotate(&self, kind: DiffKind, children: Vec<Self>) -> Self {
        ApiTreeNode {
            id: self.id.clone(),
            name: self.name.clone(),
            kind: self.kind.clone(),
            tags: self.tags.clone(),
            properties: self.properties.clone(),
            top_tokens: self.top_tokens.clone(),
            bottom_tokens: self.bottom_tokens.clone(),
            diff_top_tokens: Vec::new(),
            diff_bottom_tokens: Vec::new(),
            children,
            diff_kind: kind,
            cross_language_id: self.cross_language_id.clone(),
        }
    }

    fn merge_matched(&self, other: &Self, children: Vec<Self>) -> Self {
        let mut merged = self.annotate(DiffKind::Unchanged, children);
        if !self.same_tokens_as(other) {
            merged.diff_top_tokens = other.top_tokens.clone();
            merged.diff_bottom_tokens = other.bottom_tokens.clone();
        }
        merged
    }
}
