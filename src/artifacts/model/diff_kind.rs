use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification assigned to a node by the diff engine
///
/// Callers never set this themselves; inputs are expected to carry
/// `NoneDiff` and the engine fills in one of the other three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DiffKind {
    #[default]
    NoneDiff,
    Unchanged,
    Added,
    Removed,
}

impl DiffKind {
    pub fn is_change(&self) -> bool {
        matches!(self, DiffKind::Added | DiffKind::Removed)
    }

    /// Single-character marker used by the line renderer
    pub fn marker(&self) -> char {
        match self {
            DiffKind::Added => '+',
            DiffKind::Removed => '-',
            DiffKind::Unchanged | DiffKind::NoneDiff => ' ',
        }
    }

    /// Status letter used by the name-status listing
    pub fn status_char(&self) -> char {
        match self {
            DiffKind::Added => 'A',
            DiffKind::Removed => 'R',
            DiffKind::Unchanged => 'U',
            DiffKind::NoneDiff => ' ',
        }
    }
}

impl From<&DiffKind> for &str {
    fn from(kind: &DiffKind) -> Self {
        match kind {
            DiffKind::NoneDiff => "NoneDiff",
            DiffKind::Unchanged => "Unchanged",
            DiffKind::Added => "Added",
            DiffKind::Removed => "Removed",
        }
    }
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label: &str = self.into();
        write!(f, "{label}")
    }
}
