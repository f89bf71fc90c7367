use crate::artifacts::diff::diff_node::DiffNode;
use crate::artifacts::model::{ApiTreeNode, DiffKind, ReviewLine, ReviewToken};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

const INDENT: &str = "    ";

/// A diff node that can be printed as `+`/`-`/` ` prefixed rows
pub trait RenderNode: DiffNode {
    /// Plain one-line text of the node itself
    fn display_text(&self) -> String;

    /// Name used by the name-status listing
    fn label(&self) -> String {
        match self.node_id() {
            Some(id) => id.to_string(),
            None => self.display_text(),
        }
    }

    /// Write this node and its subtree
    fn render(&self, depth: usize, out: &mut dyn Write) -> io::Result<()>;
}

fn paint(text: &str, kind: DiffKind) -> ColoredString {
    match kind {
        DiffKind::Added => text.green(),
        DiffKind::Removed => text.red(),
        DiffKind::Unchanged | DiffKind::NoneDiff => text.normal(),
    }
}

/// Write one row; tokens tagged as changed are emphasized
pub fn write_row(
    out: &mut dyn Write,
    kind: DiffKind,
    depth: usize,
    tokens: &[ReviewToken],
) -> io::Result<()> {
    let mut row = paint(&format!("{} {}", kind.marker(), INDENT.repeat(depth)), kind).to_string();

    for token in tokens {
        if token.has_prefix_space {
            row.push(' ');
        }
        let value = paint(&token.value, kind);
        let value = if token.is_marked_changed() {
            value.bold().underline()
        } else {
            value
        };
        row.push_str(&value.to_string());
        if token.has_suffix_space {
            row.push(' ');
        }
    }

    writeln!(out, "{}", row.trim_end())
}

impl RenderNode for ReviewLine {
    fn display_text(&self) -> String {
        self.text()
    }

    fn render(&self, depth: usize, out: &mut dyn Write) -> io::Result<()> {
        write_row(out, self.diff_kind, depth, &self.tokens)?;
        for child in &self.children {
            child.render(depth + 1, out)?;
        }
        Ok(())
    }
}

impl RenderNode for ApiTreeNode {
    fn display_text(&self) -> String {
        let text = self.top_text();
        if text.is_empty() {
            format!("{} {}", self.kind, self.name)
        } else {
            text
        }
    }

    /// A matched node whose declaration changed prints as a removed/added pair
    fn render(&self, depth: usize, out: &mut dyn Write) -> io::Result<()> {
        let signature_changed = !self.diff_top_tokens.is_empty() || !self.diff_bottom_tokens.is_empty();

        if signature_changed {
            write_row(out, DiffKind::Removed, depth, &self.top_tokens)?;
            write_row(out, DiffKind::Added, depth, &self.diff_top_tokens)?;
        } else if self.top_tokens.is_empty() {
            let fallback = ReviewToken::text(self.display_text());
            write_row(out, self.diff_kind, depth, std::slice::from_ref(&fallback))?;
        } else {
            write_row(out, self.diff_kind, depth, &self.top_tokens)?;
        }

        for child in &self.children {
            child.render(depth + 1, out)?;
        }

        if signature_changed && self.bottom_tokens != self.diff_bottom_tokens {
            if !self.bottom_tokens.is_empty() {
                write_row(out, DiffKind::Removed, depth, &self.bottom_tokens)?;
            }
            if !self.diff_bottom_tokens.is_empty() {
                write_row(out, DiffKind::Added, depth, &self.diff_bottom_tokens)?;
            }
        } else if !self.bottom_tokens.is_empty() {
            write_row(out, self.diff_kind, depth, &self.bottom_tokens)?;
        }

        Ok(())
    }
}

/// Render a whole annotated forest
pub fn render_forest<N: RenderNode>(forest: &[N], out: &mut dyn Write) -> io::Result<()> {
    for node in forest {
        node.render(0, out)?;
    }
    Ok(())
}
