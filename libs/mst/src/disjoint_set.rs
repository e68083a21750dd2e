use crate::Vertex;

/// Partition of `0..n` into disjoint components, supporting representative
/// lookup with path compression and union by rank.
pub struct DisjointSet {
    parent: Vec<Vertex>,
    rank: Vec<u32>,
}

impl DisjointSet {
    pub fn new(num_elements: usize) -> Self {
        Self {
            parent: (0..num_elements).collect(),
            rank: vec![0; num_elements],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of `x`'s component. Every vertex visited on the way to
    /// the root is re-pointed directly at it, so repeated lookups are flat.
    pub fn find(&mut self, x: Vertex) -> Vertex {
        debug_assert!(x < self.parent.len());
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while cur != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge the components of two representatives. The lower-rank root is
    /// attached below the higher-rank one; `ra` wins rank ties and then
    /// grows by one.
    pub fn union(&mut self, ra: Vertex, rb: Vertex) {
        debug_assert_eq!(self.parent[ra], ra, "union expects a representative");
        debug_assert_eq!(self.parent[rb], rb, "union expects a representative");
        if self.rank[ra] < self.rank[rb] {
            self.parent[ra] = rb;
        } else if self.rank[ra] > self.rank[rb] {
            self.parent[rb] = ra;
        } else {
            self.parent[rb] = ra;
            self.rank[ra] += 1;
        }
    }

    pub fn num_components(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &p)| i == p)
            .count()
    }
}
