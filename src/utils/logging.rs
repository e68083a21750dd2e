use itertools::Itertools;

use mst::SpanningTree;

use crate::problem::{GraphInstance, Weight};

pub fn format_log_tree(instance: &GraphInstance, tree: &SpanningTree<Weight>) -> String {
    format!(
        "{}/{}/{} (spanning: {})",
        tree.num_edges(),
        instance.num_vertices(),
        tree.total_weight,
        tree.spans(instance.num_vertices()),
    )
}

pub fn format_log_edges(instance: &GraphInstance, tree: &SpanningTree<Weight>) -> String {
    tree.edges
        .iter()
        .map(|e| {
            format!(
                "{} -- {} = {}",
                instance.label(e.a),
                instance.label(e.b),
                e.w
            )
        })
        .join(", ")
}
