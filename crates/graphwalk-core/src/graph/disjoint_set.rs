//! Disjoint-set forest (union by rank, path compression)

use std::collections::HashMap;

use crate::graph::model::VertexId;

#[derive(Debug, Clone, Copy)]
struct Node {
    parent: VertexId,
    rank: u32,
}

/// Partition of vertices into disjoint components
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    nodes: HashMap<VertexId, Node>,
    components: usize,
}

impl DisjointSet {
    /// One singleton set per vertex
    pub fn new<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = VertexId>,
    {
        let mut set = Self::default();
        for vertex in vertices {
            set.register(vertex);
        }
        set
    }

    fn register(&mut self, vertex: VertexId) {
        if !self.nodes.contains_key(&vertex) {
            self.nodes.insert(
                vertex,
                Node {
                    parent: vertex,
                    rank: 0,
                },
            );
            self.components += 1;
        }
    }

    fn parent(&self, vertex: VertexId) -> VertexId {
        self.nodes.get(&vertex).map_or(vertex, |node| node.parent)
    }

    /// Root of the set containing `vertex`.
    ///
    /// Every vertex on the walk is re-pointed at the root. Unknown vertices
    /// become singletons.
    pub fn find(&mut self, vertex: VertexId) -> VertexId {
        self.register(vertex);

        let mut root = vertex;
        while self.parent(root) != root {
            root = self.parent(root);
        }

        let mut current = vertex;
        while current != root {
            let next = self.parent(current);
            if let Some(node) = self.nodes.get_mut(&current) {
                node.parent = root;
            }
            current = next;
        }

        root
    }

    /// Merge the sets of `a` and `b`. Returns `false` when they already
    /// shared a root, leaving the structure untouched.
    pub fn union(&mut self, a: VertexId, b: VertexId) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let rank_a = self.nodes.get(&root_a).map_or(0, |node| node.rank);
        let rank_b = self.nodes.get(&root_b).map_or(0, |node| node.rank);

        let (child, parent) = if rank_a < rank_b {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };

        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = parent;
        }
        if rank_a == rank_b {
            if let Some(node) = self.nodes.get_mut(&parent) {
                node.rank += 1;
            }
        }

        self.components -= 1;
        true
    }

    pub fn connected(&mut self, a: VertexId, b: VertexId) -> bool {
        self.find(a) == self.find(b)
    }

    pub fn component_count(&self) -> usize {
        self.components
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
