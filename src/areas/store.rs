use crate::artifacts::model::{ApiTreeNode, ReviewLine};
use anyhow::Context;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Accepted layouts of a review-lines file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LinesDocument {
    Lines(Vec<ReviewLine>),
    Review {
        #[serde(rename = "ReviewLines")]
        review_lines: Vec<ReviewLine>,
    },
}

impl LinesDocument {
    fn into_lines(self) -> Vec<ReviewLine> {
        match self {
            LinesDocument::Lines(lines) => lines,
            LinesDocument::Review { review_lines } => review_lines,
        }
    }
}

pub fn read_review_lines(path: &Path) -> anyhow::Result<Vec<ReviewLine>> {
    let document: LinesDocument = read_json(path)?;
    let lines = document.into_lines();

    tracing::debug!(path = %path.display(), roots = lines.len(), "loaded review lines");
    Ok(lines)
}

pub fn read_api_forest(path: &Path) -> anyhow::Result<Vec<ApiTreeNode>> {
    let forest: Vec<ApiTreeNode> = read_json(path)?;

    tracing::debug!(path = %path.display(), roots = forest.len(), "loaded API forest");
    Ok(forest)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    if !path.is_file() {
        anyhow::bail!("The specified path is not a file: {:?}", path);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))
}
