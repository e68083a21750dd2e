use crate::problem::GraphInstance;

pub mod matrix_reader;
pub mod report;

pub fn load_instance(path: impl Into<String>) -> anyhow::Result<GraphInstance> {
    matrix_reader::load_instance(path.into())
}
