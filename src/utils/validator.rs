use fixedbitset::FixedBitSet;

use mst::disjoint_set::DisjointSet;
use mst::SpanningTree;

use crate::problem::Weight;
use crate::utils::Tolerance;

#[derive(Debug)]
pub enum Violation {
    VertexOutOfRange(usize),
    Cycle(usize, usize),
    NotConnected { covered: usize, edges: usize },
    TotalMismatch(Weight),
}

#[derive(Debug)]
pub enum ValidatorResult {
    Valid(Weight),
    ConstraintViolation(Violation),
}

impl ValidatorResult {
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Valid(_) => true,
            _ => false,
        }
    }

    pub fn assert_valid(&self) {
        match self {
            Self::Valid(_) => {}
            Self::ConstraintViolation(violation) => {
                assert!(false, "{:?}", violation)
            }
        }
    }
}

/// Replays the edges through a fresh disjoint-set: every edge must join two
/// distinct components (acyclicity), the edges must touch exactly one more
/// vertex than their count (connectedness of the covered part), and the
/// recomputed total must match the reported one.
pub fn validate_tree(num_vertices: usize, tree: &SpanningTree<Weight>) -> ValidatorResult {
    use ValidatorResult::*;
    use Violation::*;

    let mut components = DisjointSet::new(num_vertices);
    let mut covered = FixedBitSet::with_capacity(num_vertices);
    let mut total = 0.0;

    for edge in &tree.edges {
        if edge.a >= num_vertices || edge.b >= num_vertices {
            return ConstraintViolation(VertexOutOfRange(edge.a.max(edge.b)));
        }
        let ra = components.find(edge.a);
        let rb = components.find(edge.b);
        if ra == rb {
            return ConstraintViolation(Cycle(edge.a, edge.b));
        }
        components.union(ra, rb);
        covered.insert(edge.a);
        covered.insert(edge.b);
        total += edge.w;
    }

    // a connected tree with k edges touches exactly k + 1 vertices
    if !tree.edges.is_empty() && covered.count_ones(..) != tree.num_edges() + 1 {
        return ConstraintViolation(NotConnected {
            covered: covered.count_ones(..),
            edges: tree.num_edges(),
        });
    }

    if (total - tree.total_weight).abs() > Weight::tol() {
        return ConstraintViolation(TotalMismatch(total));
    }

    Valid(total)
}
