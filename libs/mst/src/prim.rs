use fixedbitset::FixedBitSet;
use num_traits::{Bounded, NumOps, Zero};

use crate::graph::DenseAdjacency;
use crate::{Edge, Error, SpanningTree, Vertex};

/// Vertex-growing construction: starting from one vertex, repeatedly pull in
/// the out-of-tree vertex with the cheapest known connection. Keys and
/// parents are vertex-indexed, so no disjoint-set is involved.
pub struct PrimBuilder<W> {
    adjacency: DenseAdjacency<W>,
    key: Vec<W>,
    parent: Vec<Option<Vertex>>,
    in_tree: FixedBitSet,
}

impl<W> PrimBuilder<W>
where
    W: Zero + Bounded + NumOps + Copy + PartialOrd,
{
    pub fn new(adjacency: DenseAdjacency<W>) -> Self {
        let n = adjacency.num_vertices();
        Self {
            adjacency,
            key: vec![W::max_value(); n],
            parent: vec![None; n],
            in_tree: FixedBitSet::with_capacity(n),
        }
    }

    /// Consumes the builder; a builder serves exactly one construction.
    ///
    /// On a disconnected graph this returns a partial forest covering only
    /// the component of `start`, without error; callers decide whether that
    /// is acceptable via [`SpanningTree::spans`].
    pub fn build(mut self, start: Vertex) -> Result<SpanningTree<W>, Error> {
        let n = self.adjacency.num_vertices();
        if start >= n {
            return Err(Error::VertexOutOfRange {
                vertex: start,
                num_vertices: n,
            });
        }
        self.key[start] = W::zero();

        for _ in 0..n {
            let u = match self.min_key_vertex() {
                Some(u) => u,
                // the remaining vertices are unreachable from `start`
                None => break,
            };
            self.in_tree.insert(u);
            for v in 0..n {
                if self.in_tree.contains(v) {
                    continue;
                }
                if let Some(w) = self.adjacency.weight(u, v) {
                    if w < self.key[v] {
                        self.key[v] = w;
                        self.parent[v] = Some(u);
                    }
                }
            }
        }

        // keys freeze when a vertex enters the tree, so key[v] is the weight
        // of the edge (parent[v], v) that connected it
        let mut edges = Vec::with_capacity(n.saturating_sub(1));
        let mut total = W::zero();
        for v in 0..n {
            if let Some(u) = self.parent[v] {
                total = total + self.key[v];
                edges.push(Edge {
                    a: u,
                    b: v,
                    w: self.key[v],
                });
            }
        }

        Ok(SpanningTree {
            edges,
            total_weight: total,
        })
    }

    // strict `<` against the running minimum: the lowest index wins ties,
    // and a vertex still at the max sentinel is never selected
    fn min_key_vertex(&self) -> Option<Vertex> {
        let mut best = None;
        let mut best_key = W::max_value();
        for v in 0..self.key.len() {
            if !self.in_tree.contains(v) && self.key[v] < best_key {
                best_key = self.key[v];
                best = Some(v);
            }
        }
        best
    }
}
