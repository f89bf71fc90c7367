use crate::areas::session::Session;
use crate::areas::store::{read_api_forest, read_review_lines};
use crate::artifacts::core::render::RenderNode;
use crate::artifacts::identity::hashed_forest::{HashedForest, NodeIndex};
use std::io::Write;
use std::path::Path;

impl Session {
    /// Print `<short hash> <indent><label>` for every node of a document
    pub fn hash_tree(&self, path: &Path, forest: bool) -> anyhow::Result<()> {
        if forest {
            let nodes = read_api_forest(path)?;
            self.print_hashes(&HashedForest::build(&nodes))
        } else {
            let lines = read_review_lines(path)?;
            self.print_hashes(&HashedForest::build(&lines))
        }
    }

    fn print_hashes<N: RenderNode>(&self, hashed: &HashedForest<'_, N>) -> anyhow::Result<()> {
        for &root in hashed.roots() {
            self.print_hash_entry(hashed, root, 0)?;
        }
        Ok(())
    }

    fn print_hash_entry<N: RenderNode>(
        &self,
        hashed: &HashedForest<'_, N>,
        index: NodeIndex,
        depth: usize,
    ) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} {}{}",
            hashed.hash(index).to_short_hex(),
            "  ".repeat(depth),
            hashed.node(index).label()
        )?;

        for &child in hashed.children(index) {
            self.print_hash_entry(hashed, child, depth + 1)?;
        }

        Ok(())
    }
}
