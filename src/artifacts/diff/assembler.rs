use crate::artifacts::diff::diff_node::DiffNode;

/// Collects the annotated nodes of one sibling list in output order
///
/// Both the forest differ and the line differ hand every decision to the
/// assembler, so renderers always walk the same owned structure.
#[derive(Debug)]
pub struct DiffAssembler<N> {
    nodes: Vec<N>,
}

impl<N: DiffNode> DiffAssembler<N> {
    pub fn with_capacity(capacity: usize) -> Self {
        DiffAssembler {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, node: N) -> &mut N {
        let index = self.nodes.len();
        self.nodes.push(node);
        &mut self.nodes[index]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_mut(&mut self, index: usize) -> Option<&mut N> {
        self.nodes.get_mut(index)
    }

    /// Nodes pushed since `start`
    pub fn tail_mut(&mut self, start: usize) -> &mut [N] {
        let start = start.min(self.nodes.len());
        &mut self.nodes[start..]
    }

    pub fn finish(self) -> Vec<N> {
        self.nodes
    }
}
