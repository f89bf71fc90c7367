use crate::artifacts::model::DiffKind;
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct DiffFilter: u32 {
        const ADDED = 0b0001;
        const REMOVED = 0b0010;
        const UNCHANGED = 0b0100;
        const CHANGED = Self::ADDED.bits() | Self::REMOVED.bits();
    }
}

impl DiffFilter {
    /// Parse a filter such as `AR`; `D` is accepted as an alias of `R`
    pub fn try_parse(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }

        let mut filter = Self::empty();

        for c in s.chars() {
            match c.to_ascii_uppercase() {
                'A' => filter |= Self::ADDED,
                'R' | 'D' => filter |= Self::REMOVED,
                'U' => filter |= Self::UNCHANGED,
                _ => return None,
            }
        }

        Some(filter)
    }

    pub fn matches(&self, kind: DiffKind) -> bool {
        match kind {
            DiffKind::Added => self.contains(Self::ADDED),
            DiffKind::Removed => self.contains(Self::REMOVED),
            DiffKind::Unchanged => self.contains(Self::UNCHANGED),
            DiffKind::NoneDiff => false,
        }
    }
}

impl Default for DiffFilter {
    fn default() -> Self {
        Self::CHANGED
    }
}
