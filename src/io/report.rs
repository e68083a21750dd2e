use std::fs::File;
use std::io::{BufWriter, Write};

use serde::Serialize;

use mst::SpanningTree;

use crate::problem::{GraphInstance, Weight};

#[derive(Serialize)]
pub struct SolutionReport {
    pub instance_name: String,
    pub strategy: String,
    pub num_vertices: usize,
    pub edges: Vec<ReportEdge>,
    pub total_weight: Weight,
    pub spanning: bool,
}

#[derive(Serialize)]
pub struct ReportEdge {
    pub a: String,
    pub b: String,
    pub weight: Weight,
}

impl SolutionReport {
    pub fn new(instance: &GraphInstance, strategy: &str, tree: &SpanningTree<Weight>) -> Self {
        Self {
            instance_name: instance.name.clone(),
            strategy: strategy.to_string(),
            num_vertices: instance.num_vertices(),
            edges: tree
                .edges
                .iter()
                .map(|e| ReportEdge {
                    a: instance.label(e.a),
                    b: instance.label(e.b),
                    weight: e.w,
                })
                .collect(),
            total_weight: tree.total_weight,
            spanning: tree.spans(instance.num_vertices()),
        }
    }
}

pub fn write_solution(path: impl Into<String>, report: &SolutionReport) -> anyhow::Result<()> {
    let f = File::create(path.into())?;
    let mut file = BufWriter::new(&f);

    writeln!(file, "Instance name:    {}", report.instance_name)?;
    writeln!(file, "Strategy:         {}", report.strategy)?;
    writeln!(file, "Vertices:         {}", report.num_vertices)?;
    writeln!(file, "Total weight:     {}", report.total_weight)?;
    writeln!(file, "Spanning:         {}", report.spanning)?;
    writeln!(file, "Edges")?;

    // Edge 1 : A -- B = 2
    // Edge 2 : B -- C = 3
    // ...
    for (idx, edge) in report.edges.iter().enumerate() {
        writeln!(
            file,
            "Edge {} : {} -- {} = {}",
            idx + 1,
            edge.a,
            edge.b,
            edge.weight
        )?;
    }

    Ok(())
}

pub fn write_json_report(path: impl Into<String>, report: &SolutionReport) -> anyhow::Result<()> {
    let f = File::create(path.into())?;
    serde_json::to_writer_pretty(BufWriter::new(&f), report)?;
    Ok(())
}
