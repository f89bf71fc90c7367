use crate::artifacts::diff::diff_node::DiffNode;
use crate::artifacts::identity::content_hash::{ContentDigest, ContentHash};

pub type NodeIndex = usize;

#[derive(Debug)]
pub struct HashedEntry<'a, N> {
    pub node: &'a N,
    pub hash: ContentHash,
    pub children: Vec<NodeIndex>,
}

/// Arena mirroring one input forest, with a cached subtree hash per node
///
/// A node's hash covers its own diff-relevant content followed by the
/// ordered hashes of its children (Merkle style), so equal hashes mean equal
/// subtrees. Built bottom-up once per comparison.
#[derive(Debug)]
pub struct HashedForest<'a, N> {
    entries: Vec<HashedEntry<'a, N>>,
    roots: Vec<NodeIndex>,
}

impl<'a, N: DiffNode> HashedForest<'a, N> {
    pub fn build(forest: impl IntoIterator<Item = &'a N>) -> Self {
        let mut hashed = HashedForest {
            entries: Vec::new(),
            roots: Vec::new(),
        };

        let roots = forest
            .into_iter()
            .map(|node| hashed.insert(node))
            .collect();
        hashed.roots = roots;

        hashed
    }

    fn insert(&mut self, node: &'a N) -> NodeIndex {
        let children = node
            .children()
            .iter()
            .map(|child| self.insert(child))
            .collect::<Vec<_>>();

        let mut digest = ContentDigest::new();
        node.digest_content(&mut digest);
        digest.write_len(children.len());
        for &child in &children {
            digest.write_hash(&self.entries[child].hash);
        }

        self.entries.push(HashedEntry {
            node,
            hash: digest.finalize(),
            children,
        });
        self.entries.len() - 1
    }

    pub fn roots(&self) -> &[NodeIndex] {
        &self.roots
    }

    pub fn node(&self, index: NodeIndex) -> &'a N {
        self.entries[index].node
    }

    pub fn hash(&self, index: NodeIndex) -> ContentHash {
        self.entries[index].hash
    }

    pub fn children(&self, index: NodeIndex) -> &[NodeIndex] {
        &self.entries[index].children
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether two sibling lists hash identically element by element
    pub fn same_siblings(
        &self,
        siblings: &[NodeIndex],
        other: &HashedForest<'_, N>,
        other_siblings: &[NodeIndex],
    ) -> bool {
        siblings.len() == other_siblings.len()
            && siblings
                .iter()
                .zip(other_siblings)
                .all(|(&a, &b)| self.hash(a) == other.hash(b))
    }
}
