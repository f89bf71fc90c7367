use crate::artifacts::diff::diff_node::DiffNode;
use crate::artifacts::diff::options::DiffOptions;
use crate::artifacts::diff::token_diff::TokenDiff;
use crate::artifacts::diff::tree_diff::{
    Binding, BoundLine, DiffStrategy, SiblingUnit, TreeDiff,
};
use crate::artifacts::identity::content_hash::NodeKey;
use crate::artifacts::identity::hashed_forest::{HashedForest, NodeIndex};
use crate::artifacts::model::ReviewLine;
use derive_new::new;

/// Review-line rules for the generic differ
///
/// On top of plain keyed alignment, lines are grouped into units before
/// aligning:
///
/// - a context-end line is bound to the opener it closes
/// - an anonymous line related to a line of the unit is bound to it
/// - consecutive units whose heads carry the same token values form an
///   overload group, led by the first unit; the followers' own ids (often
///   the leader's id with a `_2`, `_3` suffix) do not matter
#[derive(Debug, Clone, new)]
pub struct LineStrategy<'o> {
    options: &'o DiffOptions,
}

impl DiffStrategy<ReviewLine> for LineStrategy<'_> {
    /// Lines match on id, context-end flag and diff-relevant token values,
    /// so an edited line shows as a removed/added pair
    ///
    /// The key is fed exactly like the line's own share of its content hash:
    /// two lines share a key iff they differ only below themselves.
    fn match_key(&self, line: &ReviewLine) -> Option<NodeKey> {
        let id = line.id()?;
        Some(NodeKey::digest(|digest| {
            digest.write_str(id);
            digest.write_flag(line.is_context_end_line);
            digest.write_tokens(&line.tokens);
        }))
    }

    fn units(
        &self,
        forest: &HashedForest<'_, ReviewLine>,
        siblings: &[NodeIndex],
    ) -> Vec<SiblingUnit> {
        let mut units: Vec<SiblingUnit> = Vec::with_capacity(siblings.len());

        for &index in siblings {
            let line = forest.node(index);

            if let Some(unit) = units.last_mut()
                && let Some(binding) = binding_to(forest, unit, line)
            {
                unit.bound.push(BoundLine { index, binding });
                continue;
            }

            units.push(SiblingUnit::single(index, self.match_key(line)));
        }

        group_overloads(forest, units)
    }

    fn finish_siblings(&self, siblings: &mut [ReviewLine]) {
        if self.options.mark_token_changes {
            TokenDiff::mark_modified_lines(siblings);
        }
    }
}

/// How `line` attaches to the unit before it, if at all
fn binding_to(
    forest: &HashedForest<'_, ReviewLine>,
    unit: &SiblingUnit,
    line: &ReviewLine,
) -> Option<Binding> {
    let head = forest.node(unit.head);

    if line.is_context_end_line {
        return (!head.is_context_end_line && !unit.is_closed()).then_some(Binding::ContextEnd);
    }

    if line.id().is_some() {
        return None;
    }

    let related = line.related_to_line.as_deref()?;
    let relates_to_unit = head.id() == Some(related)
        || unit
            .bound
            .iter()
            .any(|bound| forest.node(bound.index).id() == Some(related));

    relates_to_unit.then_some(Binding::Related)
}

fn group_overloads(
    forest: &HashedForest<'_, ReviewLine>,
    units: Vec<SiblingUnit>,
) -> Vec<SiblingUnit> {
    let mut grouped: Vec<SiblingUnit> = Vec::with_capacity(units.len());
    let mut leader_tokens = None;

    for unit in units {
        let head = forest.node(unit.head);
        let tokens = NodeKey::digest(|digest| digest.write_tokens(&head.tokens));

        if let Some(leader) = grouped.last_mut()
            && leader_tokens == Some(tokens)
            && joins_group(forest.node(leader.head), head)
        {
            trace!(
                line_id = head.id(),
                leader_id = forest.node(leader.head).id(),
                "grouping overload"
            );
            leader.followers.push(SiblingUnit { key: None, ..unit });
            continue;
        }

        leader_tokens = Some(tokens);
        grouped.push(unit);
    }

    grouped
}

fn joins_group(leader: &ReviewLine, line: &ReviewLine) -> bool {
    leader.id().is_some() && !leader.is_context_end_line && !line.is_context_end_line
}

/// Diff two review-line forests with the default options
pub fn find_line_diff(old: &[ReviewLine], new: &[ReviewLine]) -> Vec<ReviewLine> {
    find_line_diff_with_options(old, new, &DiffOptions::default())
}

pub fn find_line_diff_with_options(
    old: &[ReviewLine],
    new: &[ReviewLine],
    options: &DiffOptions,
) -> Vec<ReviewLine> {
    let strategy = LineStrategy::new(options);
    let mut lines = TreeDiff::new(old, new, &strategy).diff();

    // stable: everything else keeps its relative order
    lines.sort_by_key(|line| !options.is_global_line(line.node_id()));

    debug!(
        roots = lines.len(),
        changed = lines.iter().filter(|line| line.diff_kind.is_change()).count(),
        "line diff complete"
    );

    lines
}
