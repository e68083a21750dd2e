use mst::graph::DenseAdjacency;
use mst::Vertex;

pub type Weight = f64;

/// A validated graph ready for construction: the reader has already checked
/// symmetry, the zero diagonal and weight signs.
pub struct GraphInstance {
    pub name: String,
    pub labels: Option<Vec<String>>,
    pub adjacency: DenseAdjacency<Weight>,
}

impl GraphInstance {
    pub fn num_vertices(&self) -> usize {
        self.adjacency.num_vertices()
    }

    pub fn label(&self, v: Vertex) -> String {
        match &self.labels {
            Some(labels) => labels[v].clone(),
            None => v.to_string(),
        }
    }
}
