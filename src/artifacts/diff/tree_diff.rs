use crate::artifacts::diff::alignment::{Alignment, SiblingAligner};
use crate::artifacts::diff::assembler::DiffAssembler;
use crate::artifacts::diff::diff_node::DiffNode;
use crate::artifacts::identity::content_hash::NodeKey;
use crate::artifacts::identity::hashed_forest::{HashedForest, NodeIndex};
use crate::artifacts::model::{ApiTreeNode, DiffKind};
use std::collections::HashMap;

/// How a sibling is attached to the head of its unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Closes the block opened by the head
    ContextEnd,
    /// Anonymous line whose status derives from a line of the unit
    Related,
}

impl Binding {
    pub fn name(self) -> &'static str {
        match self {
            Binding::ContextEnd => "context-end",
            Binding::Related => "related",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundLine {
    pub index: NodeIndex,
    pub binding: Binding,
}

/// A contiguous run of siblings that is aligned as one element
///
/// The head carries the match key. Bound lines and followers are never
/// aligned against the other sibling list: they share the fate of the head.
/// When two units match, bound lines pair by binding and followers by id,
/// each in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiblingUnit {
    pub head: NodeIndex,
    pub key: Option<NodeKey>,
    pub bound: Vec<BoundLine>,
    pub followers: Vec<SiblingUnit>,
}

impl SiblingUnit {
    pub fn single(head: NodeIndex, key: Option<NodeKey>) -> Self {
        SiblingUnit {
            head,
            key,
            bound: Vec::new(),
            followers: Vec::new(),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.bound
            .iter()
            .any(|line| line.binding == Binding::ContextEnd)
    }
}

/// The per-node-kind rules plugged into the generic differ
pub trait DiffStrategy<N: DiffNode> {
    /// Identity used to align a node with its counterpart; `None` never matches
    fn match_key(&self, node: &N) -> Option<NodeKey>;

    /// Split a sibling list into the units the aligner works on
    fn units(&self, forest: &HashedForest<'_, N>, siblings: &[NodeIndex]) -> Vec<SiblingUnit> {
        siblings
            .iter()
            .map(|&index| SiblingUnit::single(index, self.match_key(forest.node(index))))
            .collect()
    }

    /// Post-process an assembled sibling list
    fn finish_siblings(&self, _siblings: &mut [N]) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Old,
    New,
}

/// Generic structural differ over two forests
///
/// Sibling lists are compared level by level: equal subtree hashes are
/// copied as unchanged without descending, keyed units are aligned in
/// order, and matched pairs recurse into their children.
pub struct TreeDiff<'a, N, S> {
    old: HashedForest<'a, N>,
    new: HashedForest<'a, N>,
    strategy: &'a S,
}

impl<'a, N: DiffNode, S: DiffStrategy<N>> TreeDiff<'a, N, S> {
    pub fn new(old: &'a [N], new: &'a [N], strategy: &'a S) -> Self {
        TreeDiff {
            old: HashedForest::build(old),
            new: HashedForest::build(new),
            strategy,
        }
    }

    pub fn diff(&self) -> Vec<N> {
        debug!(
            old_nodes = self.old.len(),
            new_nodes = self.new.len(),
            "diffing forests"
        );
        self.diff_siblings(self.old.roots(), self.new.roots())
    }

    fn forest(&self, side: Side) -> &HashedForest<'a, N> {
        match side {
            Side::Old => &self.old,
            Side::New => &self.new,
        }
    }

    fn diff_siblings(&self, old: &[NodeIndex], new: &[NodeIndex]) -> Vec<N> {
        if self.old.same_siblings(old, &self.new, new) {
            return self.mark_siblings(Side::Old, old, DiffKind::Unchanged);
        }

        let mut out = DiffAssembler::with_capacity(old.len().max(new.len()));
        let old_units = self.strategy.units(&self.old, old);
        let new_units = self.strategy.units(&self.new, new);
        let old_keys = old_units.iter().map(|unit| unit.key).collect::<Vec<_>>();
        let new_keys = new_units.iter().map(|unit| unit.key).collect::<Vec<_>>();

        for alignment in SiblingAligner::new(&old_keys, &new_keys).align() {
            match alignment {
                Alignment::Matched { old, new } => {
                    self.diff_matched_unit(&old_units[old], &new_units[new], &mut out)
                }
                Alignment::RemovedOnly(old) => {
                    self.emit_unit(Side::Old, &old_units[old], DiffKind::Removed, &mut out)
                }
                Alignment::AddedOnly(new) => {
                    self.emit_unit(Side::New, &new_units[new], DiffKind::Added, &mut out)
                }
            }
        }

        let mut siblings = out.finish();
        self.strategy.finish_siblings(&mut siblings);
        siblings
    }

    fn diff_matched(&self, old: NodeIndex, new: NodeIndex) -> N {
        if self.old.hash(old) == self.new.hash(new) {
            return self.mark_subtree(Side::Old, old, DiffKind::Unchanged);
        }

        let old_node = self.old.node(old);
        trace!(
            node_id = old_node.node_id(),
            old_hash = %self.old.hash(old).to_short_hex(),
            new_hash = %self.new.hash(new).to_short_hex(),
            "descending into matched pair"
        );

        let children = self.diff_siblings(self.old.children(old), self.new.children(new));
        old_node.merge_matched(self.new.node(new), children)
    }

    fn diff_matched_unit(&self, old: &SiblingUnit, new: &SiblingUnit, out: &mut DiffAssembler<N>) {
        let head = self.old.node(old.head);
        out.push(self.diff_matched(old.head, new.head));

        // closers pair with closers, related lines with related lines
        let old_keys = ranked_keys(old.bound.iter().map(|line| line.binding.name()));
        let new_keys = ranked_keys(new.bound.iter().map(|line| line.binding.name()));

        for alignment in SiblingAligner::new(&old_keys, &new_keys).align() {
            let start = out.len();
            let binding = match alignment {
                Alignment::Matched { old: at_old, new: at_new } => {
                    self.diff_positional(old.bound[at_old].index, new.bound[at_new].index, out);
                    old.bound[at_old].binding
                }
                Alignment::RemovedOnly(at) => {
                    out.push(self.mark_subtree(Side::Old, old.bound[at].index, DiffKind::Removed));
                    old.bound[at].binding
                }
                Alignment::AddedOnly(at) => {
                    out.push(self.mark_subtree(Side::New, new.bound[at].index, DiffKind::Added));
                    new.bound[at].binding
                }
            };
            for line in out.tail_mut(start) {
                bind_to_head(line, head, binding);
            }
        }

        // the n-th follower with a given id pairs with the n-th on the other side
        let old_keys = ranked_keys(self.follower_ids(Side::Old, old));
        let new_keys = ranked_keys(self.follower_ids(Side::New, new));

        for alignment in SiblingAligner::new(&old_keys, &new_keys).align() {
            let start = out.len();
            match alignment {
                Alignment::Matched { old: at_old, new: at_new } => {
                    self.diff_matched_unit(&old.followers[at_old], &new.followers[at_new], out)
                }
                Alignment::RemovedOnly(at) => {
                    self.emit_unit(Side::Old, &old.followers[at], DiffKind::Removed, out)
                }
                Alignment::AddedOnly(at) => {
                    self.emit_unit(Side::New, &new.followers[at], DiffKind::Added, out)
                }
            }
            follow_leader(out, start, head);
        }
    }

    fn follower_ids(&self, side: Side, unit: &SiblingUnit) -> Vec<&'a str> {
        let forest = self.forest(side);
        unit.followers
            .iter()
            .map(|follower| forest.node(follower.head).node_id().unwrap_or_default())
            .collect()
    }

    /// Compare two lines holding the same position inside matched units
    fn diff_positional(&self, old: NodeIndex, new: NodeIndex, out: &mut DiffAssembler<N>) {
        if self.old.hash(old) == self.new.hash(new) {
            out.push(self.mark_subtree(Side::Old, old, DiffKind::Unchanged));
            return;
        }

        match (
            self.strategy.match_key(self.old.node(old)),
            self.strategy.match_key(self.new.node(new)),
        ) {
            (Some(old_key), Some(new_key)) if old_key == new_key => {
                out.push(self.diff_matched(old, new));
            }
            _ => {
                out.push(self.mark_subtree(Side::Old, old, DiffKind::Removed));
                out.push(self.mark_subtree(Side::New, new, DiffKind::Added));
            }
        }
    }

    /// Copy of a whole subtree carrying `kind`, units bound at every level
    fn mark_subtree(&self, side: Side, index: NodeIndex, kind: DiffKind) -> N {
        let forest = self.forest(side);
        let children = self.mark_siblings(side, forest.children(index), kind);
        forest.node(index).annotate(kind, children)
    }

    fn mark_siblings(&self, side: Side, siblings: &[NodeIndex], kind: DiffKind) -> Vec<N> {
        let mut out = DiffAssembler::with_capacity(siblings.len());
        for unit in self.strategy.units(self.forest(side), siblings) {
            self.emit_unit(side, &unit, kind, &mut out);
        }
        out.finish()
    }

    /// Mark a whole unit, bound lines and followers included
    fn emit_unit(&self, side: Side, unit: &SiblingUnit, kind: DiffKind, out: &mut DiffAssembler<N>) {
        let head = self.forest(side).node(unit.head);
        out.push(self.mark_subtree(side, unit.head, kind));

        for bound in &unit.bound {
            let line = out.push(self.mark_subtree(side, bound.index, kind));
            bind_to_head(line, head, bound.binding);
        }

        for follower in &unit.followers {
            let start = out.len();
            self.emit_unit(side, follower, kind, out);
            follow_leader(out, start, head);
        }
    }
}

fn bind_to_head<N: DiffNode>(line: &mut N, head: &N, binding: Binding) {
    if binding == Binding::ContextEnd
        && let Some(head_id) = head.node_id()
    {
        line.set_related_to(head_id);
    }
}

fn follow_leader<N: DiffNode>(out: &mut DiffAssembler<N>, start: usize, leader: &N) {
    if let (Some(leader_id), Some(follower)) = (leader.node_id(), out.node_mut(start)) {
        follower.set_related_to(leader_id);
    }
}

/// Alignment keys making the n-th entry of each name unique: equal names
/// pair up in order, different names never pair
fn ranked_keys<'n>(names: impl IntoIterator<Item = &'n str>) -> Vec<Option<NodeKey>> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    names
        .into_iter()
        .map(|name| {
            let rank = seen.entry(name).or_default();
            *rank += 1;
            Some(NodeKey::of(&[name, &rank.to_string()]))
        })
        .collect()
}

/// Forest rules: a node is identified by its id alone
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiStrategy;

impl DiffStrategy<ApiTreeNode> for ApiStrategy {
    fn match_key(&self, node: &ApiTreeNode) -> Option<NodeKey> {
        node.node_id().map(|id| NodeKey::of(&[id]))
    }
}

/// Diff two API element forests
pub fn compute_forest_diff(old: &[ApiTreeNode], new: &[ApiTreeNode]) -> Vec<ApiTreeNode> {
    TreeDiff::new(old, new, &ApiStrategy).diff()
}
