//! Node identity and content hashing
//!
//! - `content_hash`: SHA-1 digests over the diff-relevant content of a node
//! - `hashed_forest`: per-call arena caching one hash per input node
//!
//! Hashes are computed once per comparison and dropped with it; nothing here
//! is shared between calls.

pub mod content_hash;
pub mod hashed_forest;

/// SHA-1 produces a 20-byte hash
pub const HASH_SIZE: usize = 20;
