use derive_new::new;

/// Id of the synthetic line holding file-level preamble content
pub const GLOBAL_LINE_ID: &str = "GLOBAL";

/// Knobs for the optional behaviors of the line differ
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffOptions {
    /// Tag the differing tokens of every modified line with `diff-change`
    pub mark_token_changes: bool,
    /// Line id that is always placed first in the output forest
    pub global_line_id: String,
}

impl DiffOptions {
    pub fn without_token_marks(mut self) -> Self {
        self.mark_token_changes = false;
        self
    }

    pub fn is_global_line(&self, line_id: Option<&str>) -> bool {
        line_id == Some(self.global_line_id.as_str())
    }
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions::new(true, GLOBAL_LINE_ID.to_string())
    }
}
