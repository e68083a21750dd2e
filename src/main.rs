#![allow(dead_code)]

use clap::Parser;
use log::info;
use took::Timer;

use crate::cli::Strategy;
use crate::io::report::SolutionReport;

mod cli;
mod io;
mod problem;
mod solver;
mod utils;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = cli::ProgramArguments::parse();
    info!("{:?}", &args);

    let load_timer = Timer::new();
    let instance = io::load_instance(&args.instance)?;
    info!(
        "instance '{}' with {} vertices loaded after {}",
        instance.name,
        instance.num_vertices(),
        load_timer.took()
    );

    info!("starting solver {:?}", &args.solver.variant);
    let res = if args.solver.cross_check {
        let (sorted_edge, vertex_growing) =
            solver::cross_check(&instance, args.solver.start_vertex)?;
        info!(
            "both strategies agree on total weight {} within tolerance",
            sorted_edge.tree.total_weight
        );
        match &args.solver.variant {
            Strategy::Kruskal => sorted_edge,
            Strategy::Prim => vertex_growing,
        }
    } else {
        match &args.solver.variant {
            Strategy::Kruskal => solver::kruskal(&instance)?,
            Strategy::Prim => solver::prim(&instance, args.solver.start_vertex)?,
        }
    };

    info!("finished after {}", res.time);
    info!(
        "tree found: {}",
        utils::logging::format_log_tree(&instance, &res.tree)
    );
    if args.print_edges {
        info!(
            "edges: {}",
            utils::logging::format_log_edges(&instance, &res.tree)
        );
    }

    if args.print_summary_to_stdout {
        println!(
            "{},{},{},{}",
            instance.num_vertices(),
            res.tree.num_edges(),
            res.tree.total_weight,
            res.time.as_std().as_millis()
        );
    }

    let report = SolutionReport::new(&instance, args.solver.variant.name(), &res.tree);

    let solution_out = args.solution.clone().or(args.solution_directory.map(|dir| {
        format!(
            "{}/{}.{}_{}.sol",
            dir,
            instance.name,
            res.tree.num_edges(),
            res.tree.total_weight
        )
    }));
    if let Some(solution_path) = solution_out {
        info!("writing solution to {}", &solution_path);
        io::report::write_solution(solution_path, &report)?;
    }

    if let Some(json_path) = args.json_report {
        info!("writing json report to {}", &json_path);
        io::report::write_json_report(json_path, &report)?;
    }

    Ok(())
}
