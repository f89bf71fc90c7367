use crate::areas::session::Session;
use crate::areas::store::{read_api_forest, read_review_lines};
use crate::artifacts::core::render::{RenderNode, render_forest};
use crate::artifacts::diff::diff_filter::DiffFilter;
use crate::artifacts::diff::line_diff::find_line_diff_with_options;
use crate::artifacts::diff::options::DiffOptions;
use crate::artifacts::diff::summary::{DiffSummary, top_changes};
use crate::artifacts::diff::tree_diff::compute_forest_diff;
use derive_new::new;
use std::io::Write;
use std::path::Path;

/// How a diff result is presented
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DiffOutput {
    /// Every row of the annotated forest
    #[default]
    Full,
    /// Top-most nodes passing the filter, one `<status>\t<label>` per row
    NameStatus(DiffFilter),
    /// Node counts only
    Stat,
}

#[derive(Debug, Clone, Default, new)]
pub struct DiffArgs {
    pub output: DiffOutput,
    pub options: DiffOptions,
}

impl Session {
    pub fn diff_lines(&self, old: &Path, new: &Path, args: &DiffArgs) -> anyhow::Result<()> {
        let old_lines = read_review_lines(old)?;
        let new_lines = read_review_lines(new)?;

        let diff = find_line_diff_with_options(&old_lines, &new_lines, &args.options);
        self.print_diff(&diff, &args.output)
    }

    pub fn diff_forest(&self, old: &Path, new: &Path, args: &DiffArgs) -> anyhow::Result<()> {
        let old_forest = read_api_forest(old)?;
        let new_forest = read_api_forest(new)?;

        let diff = compute_forest_diff(&old_forest, &new_forest);
        self.print_diff(&diff, &args.output)
    }

    fn print_diff<N: RenderNode>(&self, diff: &[N], output: &DiffOutput) -> anyhow::Result<()> {
        let summary = DiffSummary::of(diff);
        tracing::info!(
            added = summary.added,
            removed = summary.removed,
            unchanged = summary.unchanged,
            "diff computed"
        );

        let mut writer = self.writer();
        match output {
            DiffOutput::Full => render_forest(diff, &mut **writer)?,
            DiffOutput::NameStatus(filter) => {
                for change in top_changes(diff, *filter) {
                    writeln!(
                        writer,
                        "{}\t{}",
                        change.node.diff_kind().status_char(),
                        change.node.label()
                    )?;
                }
            }
            DiffOutput::Stat => writeln!(writer, "{summary}")?,
        }

        Ok(())
    }
}
