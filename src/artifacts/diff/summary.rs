use crate::artifacts::diff::diff_filter::DiffFilter;
use crate::artifacts::diff::diff_node::DiffNode;
use crate::artifacts::model::DiffKind;
use std::fmt;

/// Node counts of an annotated forest, by diff kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

impl DiffSummary {
    pub fn of<N: DiffNode>(forest: &[N]) -> Self {
        let mut summary = DiffSummary::default();
        summary.count(forest);
        summary
    }

    fn count<N: DiffNode>(&mut self, nodes: &[N]) {
        for node in nodes {
            match node.diff_kind() {
                DiffKind::Added => self.added += 1,
                DiffKind::Removed => self.removed += 1,
                DiffKind::Unchanged => self.unchanged += 1,
                DiffKind::NoneDiff => {}
            }
            self.count(node.children());
        }
    }

    pub fn changed(&self) -> usize {
        self.added + self.removed
    }

    pub fn has_diff(&self) -> bool {
        self.changed() > 0
    }
}

impl fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} added, {} removed, {} unchanged",
            self.added, self.removed, self.unchanged
        )
    }
}

/// A node whose kind passes the filter while its parent's does not
#[derive(Debug)]
pub struct TopChange<'a, N> {
    pub node: &'a N,
    pub depth: usize,
}

/// Collect the top-most nodes matching `filter`, in document order
///
/// Descendants of a reported node are skipped since they always share its
/// kind.
pub fn top_changes<N: DiffNode>(forest: &[N], filter: DiffFilter) -> Vec<TopChange<'_, N>> {
    let mut changes = Vec::new();
    collect_top_changes(forest, filter, 0, &mut changes);
    changes
}

fn collect_top_changes<'a, N: DiffNode>(
    nodes: &'a [N],
    filter: DiffFilter,
    depth: usize,
    changes: &mut Vec<TopChange<'a, N>>,
) {
    for node in nodes {
        if filter.matches(node.diff_kind()) {
            changes.push(TopChange { node, depth });
        } else {
            collect_top_changes(node.children(), filter, depth + 1, changes);
        }
    }
}
