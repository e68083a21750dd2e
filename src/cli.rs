use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(version)]
pub struct ProgramArguments {
    #[arg(short, long, help = "instance file path")]
    pub instance: String,

    #[arg(short, long, help = "solution file path")]
    pub solution: Option<String>,

    #[arg(
        long,
        help = "directory to store the solution",
        conflicts_with = "solution"
    )]
    pub solution_directory: Option<String>,

    #[arg(long, help = "file to store a machine-readable json report")]
    pub json_report: Option<String>,

    #[command(flatten)]
    pub solver: SolverArguments,

    #[arg(long, help = "print summary to stdout", default_value = "false")]
    pub print_summary_to_stdout: bool,

    #[arg(long, help = "log the selected edges after solving", default_value = "false")]
    pub print_edges: bool,
}

#[derive(clap::Args, Clone, Debug)]
pub struct SolverArguments {
    #[arg(long = "strategy", value_enum, default_value = "kruskal")]
    pub variant: Strategy,

    #[arg(
        long,
        default_value = "0",
        help = "start vertex for the vertex-growing strategy"
    )]
    pub start_vertex: usize,

    #[arg(
        long,
        default_value = "false",
        help = "run both strategies and require equal total weights"
    )]
    pub cross_check: bool,
}

#[derive(Clone, ValueEnum, Debug)]
pub enum Strategy {
    Kruskal,
    Prim,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Kruskal => "kruskal",
            Strategy::Prim => "prim",
        }
    }
}
