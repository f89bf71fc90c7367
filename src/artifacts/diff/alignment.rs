//! Sibling-list alignment
//!
//! Aligns two ordered sibling lists by their matching keys and classifies
//! every position as matched, added-only or removed-only.
//!
//! ## Algorithm
//!
//! 1. Only the first occurrence of a key in each list is addressable; later
//!    duplicates and keyless entries never match.
//! 2. Every old entry whose key also appears on the new side becomes a
//!    candidate pair `(old, new)`. Candidates are produced in old order.
//! 3. Because addressable keys are unique, the longest common subsequence of
//!    the two lists is the longest run of candidates whose new positions
//!    strictly increase. It is found by patience sorting in `O(n log n)`.
//! 4. The matched pairs are replayed in order. In every gap between two
//!    matches the removed entries are emitted before the added ones, so the
//!    output preserves the relative order of both inputs.

use derive_new::new;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Matched { old: usize, new: usize },
    RemovedOnly(usize),
    AddedOnly(usize),
}

impl Alignment {
    pub fn old_index(&self) -> Option<usize> {
        match self {
            Alignment::Matched { old, .. } | Alignment::RemovedOnly(old) => Some(*old),
            Alignment::AddedOnly(_) => None,
        }
    }

    pub fn new_index(&self) -> Option<usize> {
        match self {
            Alignment::Matched { new, .. } | Alignment::AddedOnly(new) => Some(*new),
            Alignment::RemovedOnly(_) => None,
        }
    }
}

#[derive(Debug, Clone, new)]
pub struct SiblingAligner<'k, K> {
    old: &'k [Option<K>],
    new: &'k [Option<K>],
}

impl<K: Eq + Hash> SiblingAligner<'_, K> {
    pub fn align(&self) -> Vec<Alignment> {
        let matches = self.common_subsequence();
        let mut alignment = Vec::with_capacity(self.old.len() + self.new.len() - matches.len());
        let (mut next_old, mut next_new) = (0, 0);

        for (old, new) in matches {
            alignment.extend((next_old..old).map(Alignment::RemovedOnly));
            alignment.extend((next_new..new).map(Alignment::AddedOnly));
            alignment.push(Alignment::Matched { old, new });
            (next_old, next_new) = (old + 1, new + 1);
        }

        alignment.extend((next_old..self.old.len()).map(Alignment::RemovedOnly));
        alignment.extend((next_new..self.new.len()).map(Alignment::AddedOnly));

        trace!(
            old = self.old.len(),
            new = self.new.len(),
            aligned = alignment.len(),
            "aligned sibling lists"
        );

        alignment
    }

    fn common_subsequence(&self) -> Vec<(usize, usize)> {
        let new_positions = first_occurrences(self.new);
        let mut seen = HashSet::with_capacity(self.old.len());

        let candidates = self
            .old
            .iter()
            .enumerate()
            .filter_map(|(old, key)| {
                let key = key.as_ref()?;
                if !seen.insert(key) {
                    return None;
                }
                new_positions.get(key).map(|&new| (old, new))
            })
            .collect::<Vec<_>>();

        longest_increasing_run(&candidates)
    }
}

fn first_occurrences<K: Eq + Hash>(keys: &[Option<K>]) -> HashMap<&K, usize> {
    let mut positions = HashMap::with_capacity(keys.len());
    for (index, key) in keys.iter().enumerate() {
        if let Some(key) = key {
            positions.entry(key).or_insert(index);
        }
    }
    positions
}

/// Longest subsequence of `candidates` whose second component strictly increases
///
/// `candidates` must already be ordered by their first component.
fn longest_increasing_run(candidates: &[(usize, usize)]) -> Vec<(usize, usize)> {
    // tails[len] = candidate ending the best run of length len + 1
    let mut tails: Vec<usize> = Vec::new();
    let mut predecessors: Vec<Option<usize>> = vec![None; candidates.len()];

    for (index, &(_, new)) in candidates.iter().enumerate() {
        let pile = tails.partition_point(|&tail| candidates[tail].1 < new);
        if pile > 0 {
            predecessors[index] = Some(tails[pile - 1]);
        }
        if pile == tails.len() {
            tails.push(index);
        } else {
            tails[pile] = index;
        }
    }

    let mut run = Vec::with_capacity(tails.len());
    let mut cursor = tails.last().copied();
    while let Some(index) = cursor {
        run.push(candidates[index]);
        cursor = predecessors[index];
    }
    run.reverse();
    run
}
