use crate::artifacts::identity::HASH_SIZE;
use crate::artifacts::model::ReviewToken;
use crate::artifacts::model::token::diff_values;
use sha1::{Digest, Sha1};
use std::fmt;

/// Digest of a node's diff-relevant content
///
/// Two subtrees with the same hash are identical for diffing purposes and
/// can be emitted unchanged without recursing into them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash([u8; HASH_SIZE]);

impl ContentHash {
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    pub fn to_short_hex(&self) -> String {
        self.to_string()[..7].to_string()
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", self.to_short_hex())
    }
}

/// Identity used to align a node against its counterpart on the other side
///
/// Keys are digests of the identifying text so comparing them is cheap no
/// matter how long the rendered signature is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(ContentHash);

impl NodeKey {
    pub fn of(parts: &[&str]) -> Self {
        Self::digest(|digest| {
            for part in parts {
                digest.write_str(part);
            }
        })
    }

    /// Key over whatever `feed` writes into a fresh digest
    pub fn digest(feed: impl FnOnce(&mut ContentDigest)) -> Self {
        let mut digest = ContentDigest::new();
        feed(&mut digest);
        NodeKey(digest.finalize())
    }
}

/// Incremental hasher fed by `DiffNode::digest_content`
///
/// Every variable-length field is length-prefixed so that adjacent fields
/// cannot run into each other.
#[derive(Debug, Clone, Default)]
pub struct ContentDigest {
    digest: Sha1,
}

impl ContentDigest {
    pub fn new() -> Self {
        ContentDigest {
            digest: Sha1::new(),
        }
    }

    pub fn write_str(&mut self, value: &str) {
        self.digest.update((value.len() as u64).to_be_bytes());
        self.digest.update(value.as_bytes());
    }

    pub fn write_opt_str(&mut self, value: Option<&str>) {
        match value {
            Some(value) => {
                self.write_flag(true);
                self.write_str(value);
            }
            None => self.write_flag(false),
        }
    }

    pub fn write_flag(&mut self, flag: bool) {
        self.digest.update([u8::from(flag)]);
    }

    /// Feed the values of every token that participates in diffing
    pub fn write_tokens(&mut self, tokens: &[ReviewToken]) {
        self.write_len(diff_values(tokens).count());
        for value in diff_values(tokens) {
            self.write_str(value);
        }
    }

    pub fn write_hash(&mut self, hash: &ContentHash) {
        self.digest.update(hash.as_bytes());
    }

    pub fn write_len(&mut self, len: usize) {
        self.digest.update((len as u64).to_be_bytes());
    }

    pub fn finalize(self) -> ContentHash {
        let mut bytes = [0u8; HASH_SIZE];
        bytes.copy_from_slice(self.digest.finalize().as_slice());
        ContentHash(bytes)
    }
}
