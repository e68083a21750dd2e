use anyhow::ensure;
use log::{info, warn};
use took::{Timer, Took};

use mst::kruskal::KruskalBuilder;
use mst::prim::PrimBuilder;
use mst::{SpanningTree, Vertex};

use crate::problem::{GraphInstance, Weight};
use crate::utils::validator::validate_tree;
use crate::utils::Tolerance;

#[derive(Debug)]
pub struct SolverResult {
    pub tree: SpanningTree<Weight>,
    pub time: Took,
}

pub fn kruskal(instance: &GraphInstance) -> anyhow::Result<SolverResult> {
    let timer = Timer::new();
    let pool = instance.adjacency.edge_pool();
    info!(
        "sorted-edge construction over {} candidate edges",
        pool.len()
    );
    let tree = KruskalBuilder::with_pool(instance.num_vertices(), pool).build()?;
    Ok(SolverResult {
        tree,
        time: timer.took(),
    })
}

pub fn prim(instance: &GraphInstance, start: Vertex) -> anyhow::Result<SolverResult> {
    let timer = Timer::new();
    info!("vertex-growing construction from vertex {}", start);
    let tree = PrimBuilder::new(instance.adjacency.clone()).build(start)?;
    if !tree.spans(instance.num_vertices()) {
        // partial forest over the start vertex's component, by contract
        warn!(
            "graph is disconnected: tree covers {} of {} vertices (started from {})",
            tree.num_edges() + 1,
            instance.num_vertices(),
            start
        );
    }
    Ok(SolverResult {
        tree,
        time: timer.took(),
    })
}

/// Runs both strategies and requires them to produce structurally valid
/// trees with equal total weight. The sorted-edge strategy failing with a
/// disconnected-graph error fails the whole check.
pub fn cross_check(
    instance: &GraphInstance,
    start: Vertex,
) -> anyhow::Result<(SolverResult, SolverResult)> {
    let sorted_edge = kruskal(instance)?;
    let vertex_growing = prim(instance, start)?;

    let n = instance.num_vertices();
    ensure!(
        validate_tree(n, &sorted_edge.tree).is_valid(),
        "sorted-edge tree failed validation: {:?}",
        validate_tree(n, &sorted_edge.tree)
    );
    ensure!(
        validate_tree(n, &vertex_growing.tree).is_valid(),
        "vertex-growing tree failed validation: {:?}",
        validate_tree(n, &vertex_growing.tree)
    );

    let diff = (sorted_edge.tree.total_weight - vertex_growing.tree.total_weight).abs();
    ensure!(
        diff <= Weight::tol(),
        "strategies disagree on the total weight: {} vs {}",
        sorted_edge.tree.total_weight,
        vertex_growing.tree.total_weight
    );

    Ok((sorted_edge, vertex_growing))
}
