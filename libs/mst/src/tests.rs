use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::disjoint_set::DisjointSet;
use crate::graph::{DenseAdjacency, DenseAdjacencyBuilder};
use crate::kruskal::KruskalBuilder;
use crate::prim::PrimBuilder;

fn create_random_connected_graph(
    rand: &mut Pcg64,
    num_vertices: usize,
    extra_edges: usize,
    weight_range: RangeInclusive<i64>,
) -> DenseAdjacency<i64> {
    let mut builder = DenseAdjacencyBuilder::with_num_vertices(num_vertices);

    // backbone first: every vertex attaches to an earlier one
    for v in 1..num_vertices {
        let u = rand.gen_range(0..v);
        builder.set_edge(u, v, rand.gen_range(weight_range.clone()));
    }

    let mut added = 0;
    while added < extra_edges {
        let a = rand.gen_range(0..num_vertices);
        let b = rand.gen_range(0..num_vertices);
        if a == b {
            continue;
        }
        builder.set_edge(a, b, rand.gen_range(weight_range.clone()));
        added += 1;
    }

    builder.build()
}

fn assert_both_strategies_agree(adjacency: DenseAdjacency<i64>, num_vertices: usize) {
    let sorted_edge = KruskalBuilder::with_pool(num_vertices, adjacency.edge_pool())
        .build()
        .unwrap();
    let vertex_growing = PrimBuilder::new(adjacency).build(0).unwrap();

    assert!(sorted_edge.spans(num_vertices));
    assert!(vertex_growing.spans(num_vertices));
    assert_eq!(sorted_edge.total_weight, vertex_growing.total_weight);
}

#[test]
fn generic_40_vertex_graph_with_seed_42() {
    let mut rand = Pcg64::seed_from_u64(42);
    let graph = create_random_connected_graph(&mut rand, 40, 200, 1..=1000);
    assert_both_strategies_agree(graph, 40);
}

#[test]
fn generic_40_vertex_graph_with_seed_84() {
    let mut rand = Pcg64::seed_from_u64(84);
    let graph = create_random_connected_graph(&mut rand, 40, 200, 1..=1000);
    assert_both_strategies_agree(graph, 40);
}

#[test]
fn generic_40_vertex_graph_with_seed_842() {
    let mut rand = Pcg64::seed_from_u64(842);
    let graph = create_random_connected_graph(&mut rand, 40, 200, 1..=1000);
    assert_both_strategies_agree(graph, 40);
}

#[test]
fn sparse_graphs_with_heavy_ties_still_agree() {
    // a tiny weight range forces many equal-weight candidates
    let mut rand = Pcg64::seed_from_u64(7);
    for _ in 0..10 {
        let graph = create_random_connected_graph(&mut rand, 25, 30, 1..=3);
        assert_both_strategies_agree(graph, 25);
    }
}

#[test]
fn fractional_weights_agree_between_strategies() {
    let mut rand = Pcg64::seed_from_u64(4242);
    let mut builder = DenseAdjacencyBuilder::with_num_vertices(20);
    for v in 1..20 {
        let u = rand.gen_range(0..v);
        builder.set_edge(u, v, rand.gen_range(0.5..100.0f64));
    }
    for _ in 0..60 {
        let a = rand.gen_range(0..20);
        let b = rand.gen_range(0..20);
        if a != b {
            builder.set_edge(a, b, rand.gen_range(0.5..100.0f64));
        }
    }
    let adjacency = builder.build();

    let sorted_edge = KruskalBuilder::with_pool(20, adjacency.edge_pool())
        .build()
        .unwrap();
    let vertex_growing = PrimBuilder::new(adjacency).build(0).unwrap();

    assert!(sorted_edge.spans(20));
    assert!((sorted_edge.total_weight - vertex_growing.total_weight).abs() < 1e-9);
}

#[test]
fn every_tree_edge_is_a_bridge() {
    let mut rand = Pcg64::seed_from_u64(4711);
    let num_vertices = 30;
    let graph = create_random_connected_graph(&mut rand, num_vertices, 120, 1..=500);
    let tree = KruskalBuilder::with_pool(num_vertices, graph.edge_pool())
        .build()
        .unwrap();

    for excluded in 0..tree.num_edges() {
        let mut components = DisjointSet::new(num_vertices);
        for (idx, edge) in tree.edges.iter().enumerate() {
            if idx == excluded {
                continue;
            }
            let ra = components.find(edge.a);
            let rb = components.find(edge.b);
            assert_ne!(ra, rb, "tree contains a cycle");
            components.union(ra, rb);
        }
        assert_eq!(components.num_components(), 2);
    }
}
