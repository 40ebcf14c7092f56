use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use icplace::config::PlacementConfig;
use icplace::io::cli::Cli;
use icplace::io::output::PlacementOutput;
use icplace::request::{LayerResult, PlacementRequest, PlacementResponse, solve_request};
use icplace::{EPOCH, io};
use log::{info, warn};
use seqpair::io::svg::floorplan_to_svg;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            PlacementConfig::default()
        }
        Some(config_file) => {
            io::read_json(&config_file).context("incorrect config file format")?
        }
    };
    if let Some(kind) = args.decision_maker {
        config.decision_maker = kind;
    }

    info!("[MAIN] Successfully parsed PlacementConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid stem")?
        .to_owned();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).context(format!(
            "could not create solution folder: {:?}",
            args.solution_folder
        ))?;
    }

    let request: PlacementRequest = io::read_json(args.input_file.as_path())?;
    let results = solve_request(&request, &config);

    write_svgs(&results, &config, &input_file_stem, &args.solution_folder)?;

    let output = PlacementOutput {
        response: PlacementResponse::new(&results, *EPOCH),
        config: request.apply_to(config),
        request,
    };
    let solution_path = args.solution_folder.join(format!("sol_{input_file_stem}.json"));
    io::write_json(&output, Path::new(&solution_path))?;

    Ok(())
}

fn write_svgs(
    results: &[LayerResult],
    config: &PlacementConfig,
    input_stem: &str,
    output_folder: &Path,
) -> Result<()> {
    for res in results {
        if let Ok((problem, solution)) = &res.outcome {
            let svg_path = output_folder.join(format!("sol_{input_stem}_{}.svg", res.layer));
            let svg = floorplan_to_svg(problem, &solution.floorplan, config.svg_draw_options);
            io::write_svg(&svg, Path::new(&svg_path))?;
        }
    }
    Ok(())
}
