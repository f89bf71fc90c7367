use crate::artifacts::diff::diff_algorithm::{DiffAlgorithm, Edit, MyersDiff};
use crate::artifacts::model::{DiffKind, ReviewLine};

/// Token-level comparison of a modified line
///
/// When a line keeps its id but its text changes, the line differ emits the
/// old line as removed and the new one as added. This pass runs Myers over
/// the participating tokens of the pair and tags what actually changed.
pub struct TokenDiff;

impl TokenDiff {
    /// Tag the differing tokens of both lines; returns whether any differ
    pub fn mark(removed: &mut ReviewLine, added: &mut ReviewLine) -> bool {
        let old_positions = participating_positions(removed);
        let new_positions = participating_positions(added);

        let old_values = old_positions
            .iter()
            .map(|&i| removed.tokens[i].value.as_str())
            .collect::<Vec<_>>();
        let new_values = new_positions
            .iter()
            .map(|&i| added.tokens[i].value.as_str())
            .collect::<Vec<_>>();

        let edits = MyersDiff::new(&old_values, &new_values).diff();

        let mut changed = false;
        for edit in edits {
            match edit {
                Edit::Delete { old } => {
                    removed.tokens[old_positions[old]].mark_changed();
                    changed = true;
                }
                Edit::Insert { new } => {
                    added.tokens[new_positions[new]].mark_changed();
                    changed = true;
                }
                Edit::Equal { .. } => {}
            }
        }

        changed
    }

    /// Mark every removed/added pair sharing a line id within each run of changes
    pub fn mark_modified_lines(siblings: &mut [ReviewLine]) {
        let mut start = 0;
        while start < siblings.len() {
            let run = siblings[start..]
                .iter()
                .take_while(|line| line.diff_kind.is_change())
                .count();
            if run > 1 {
                Self::mark_run(&mut siblings[start..start + run]);
            }
            start += run.max(1);
        }
    }

    fn mark_run(run: &mut [ReviewLine]) {
        let mut paired = vec![false; run.len()];

        for removed in 0..run.len() {
            if run[removed].diff_kind != DiffKind::Removed || run[removed].id().is_none() {
                continue;
            }

            let partner = (0..run.len()).find(|&added| {
                !paired[added]
                    && run[added].diff_kind == DiffKind::Added
                    && run[added].id() == run[removed].id()
            });

            if let Some(added) = partner {
                paired[added] = true;
                let (removed_line, added_line) = pair_mut(run, removed, added);
                if Self::mark(removed_line, added_line) {
                    trace!(line_id = removed_line.id(), "marked modified tokens");
                }
            }
        }
    }
}

fn participating_positions(line: &ReviewLine) -> Vec<usize> {
    line.tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.participates_in_diff())
        .map(|(i, _)| i)
        .collect()
}

fn pair_mut(lines: &mut [ReviewLine], a: usize, b: usize) -> (&mut ReviewLine, &mut ReviewLine) {
    if a < b {
        let (left, right) = lines.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = lines.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
