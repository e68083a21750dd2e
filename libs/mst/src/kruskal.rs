use num_traits::{Bounded, NumOps, Zero};

use crate::disjoint_set::DisjointSet;
use crate::graph::EdgePool;
use crate::{Edge, Error, SpanningTree, Vertex};

/// Sorted-edge construction: scan the candidate edges by ascending weight
/// and accept every edge that joins two distinct components.
pub struct KruskalBuilder<W> {
    num_vertices: usize,
    pool: EdgePool<W>,
}

impl<W> KruskalBuilder<W>
where
    W: Zero + Bounded + NumOps + Copy + PartialOrd,
{
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            pool: EdgePool::new(),
        }
    }

    pub fn with_pool(num_vertices: usize, pool: EdgePool<W>) -> Self {
        Self { num_vertices, pool }
    }

    pub fn add_edge(&mut self, a: Vertex, b: Vertex, w: W) -> &mut Self {
        self.pool.push(Edge { a, b, w });
        self
    }

    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = Edge<W>>) -> &mut Self {
        self.pool.add_edges(edges);
        self
    }

    /// Consumes the builder; a builder serves exactly one construction.
    ///
    /// All pooled edges are validated before any selection happens, so a
    /// malformed edge fails the call even if it would never be reached.
    pub fn build(self) -> Result<SpanningTree<W>, Error> {
        let n = self.num_vertices;
        for edge in self.pool.iter() {
            if edge.a >= n {
                return Err(Error::VertexOutOfRange {
                    vertex: edge.a,
                    num_vertices: n,
                });
            }
            if edge.b >= n {
                return Err(Error::VertexOutOfRange {
                    vertex: edge.b,
                    num_vertices: n,
                });
            }
            if edge.a == edge.b {
                return Err(Error::SelfLoop { vertex: edge.a });
            }
            if !(edge.w >= W::zero()) {
                return Err(Error::InvalidWeight {
                    a: edge.a,
                    b: edge.b,
                });
            }
        }

        let needed = n.saturating_sub(1);
        let mut components = DisjointSet::new(n);
        let mut accepted = Vec::with_capacity(needed);
        let mut total = W::zero();

        for edge in self.pool.into_sorted_by_weight() {
            if accepted.len() == needed {
                break;
            }
            let ra = components.find(edge.a);
            let rb = components.find(edge.b);
            if ra != rb {
                total = total + edge.w;
                accepted.push(edge);
                components.union(ra, rb);
            }
        }

        if accepted.len() != needed {
            return Err(Error::Disconnected {
                num_vertices: n,
                edges_selected: accepted.len(),
            });
        }

        Ok(SpanningTree {
            edges: accepted,
            total_weight: total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_equal_weights_in_insertion_order() {
        let mut builder = KruskalBuilder::new(4);
        builder
            .add_edge(0, 1, 1)
            .add_edge(2, 3, 1)
            .add_edge(1, 2, 5)
            .add_edge(0, 3, 9);
        let tree = builder.build().unwrap();
        assert_eq!(
            tree.edges,
            vec![
                Edge { a: 0, b: 1, w: 1 },
                Edge { a: 2, b: 3, w: 1 },
                Edge { a: 1, b: 2, w: 5 },
            ]
        );
        assert_eq!(tree.total_weight, 7);
    }

    #[test]
    fn skips_cycle_forming_edges() {
        let mut builder = KruskalBuilder::new(3);
        builder.add_edge(0, 1, 1).add_edge(1, 2, 2).add_edge(0, 2, 3);
        let tree = builder.build().unwrap();
        assert_eq!(tree.num_edges(), 2);
        assert_eq!(tree.total_weight, 3);
        assert!(!tree.edges.contains(&Edge { a: 0, b: 2, w: 3 }));
    }

    #[test]
    fn two_isolated_triangles_are_disconnected() {
        let mut builder = KruskalBuilder::new(6);
        builder
            .add_edge(0, 1, 2)
            .add_edge(1, 2, 3)
            .add_edge(0, 2, 4)
            .add_edge(3, 4, 1)
            .add_edge(4, 5, 1)
            .add_edge(3, 5, 1);
        assert_eq!(
            builder.build().unwrap_err(),
            Error::Disconnected {
                num_vertices: 6,
                edges_selected: 4,
            }
        );
    }

    #[test]
    fn single_vertex_yields_an_empty_tree() {
        let tree = KruskalBuilder::<i64>::new(1).build().unwrap();
        assert!(tree.edges.is_empty());
        assert_eq!(tree.total_weight, 0);
        assert!(tree.spans(1));
    }

    #[test]
    fn rejects_out_of_range_endpoints() {
        let mut builder = KruskalBuilder::new(2);
        builder.add_edge(0, 2, 1);
        assert_eq!(
            builder.build().unwrap_err(),
            Error::VertexOutOfRange {
                vertex: 2,
                num_vertices: 2,
            }
        );
    }

    #[test]
    fn rejects_self_loops() {
        let mut builder = KruskalBuilder::new(3);
        builder.add_edge(1, 1, 1);
        assert_eq!(builder.build().unwrap_err(), Error::SelfLoop { vertex: 1 });
    }

    #[test]
    fn rejects_negative_and_nan_weights() {
        let mut builder = KruskalBuilder::new(2);
        builder.add_edge(0, 1, -1.0);
        assert_eq!(
            builder.build().unwrap_err(),
            Error::InvalidWeight { a: 0, b: 1 }
        );

        let mut builder = KruskalBuilder::new(2);
        builder.add_edge(0, 1, f64::NAN);
        assert_eq!(
            builder.build().unwrap_err(),
            Error::InvalidWeight { a: 0, b: 1 }
        );
    }

    #[test]
    fn validation_runs_before_selection_stops() {
        // the bad edge is heavier than everything the scan would accept
        let mut builder = KruskalBuilder::new(2);
        builder.add_edge(0, 1, 1).add_edge(1, 1, 99);
        assert_eq!(builder.build().unwrap_err(), Error::SelfLoop { vertex: 1 });
    }
}
