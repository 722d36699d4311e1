pub mod cli;
pub mod config;
pub mod csv_loader;
pub mod error;
pub mod logging;
pub mod producer;
pub mod runner;
pub mod simulator;
pub mod types;
pub mod writer;

use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;

use cli::Cli;
use config::{Config, InputKind};
use csv_loader::CsvLoader;
use error::Error;
use producer::Producer;
use runner::PathRunner;
use safest_path_core::{DijkstraSolver, GraphModel};
use simulator::SimulatorSource;
use types::SharedGraph;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "safest-path failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Error> {
    let cli = Cli::parse();
    let mut config = config::load_config(&cli.config)?;
    cli.apply(&mut config);

    logging::init_logging(&config.logging)?;

    let graph: SharedGraph = Arc::new(build_graph(&config).await?);
    let runner = PathRunner::new(graph, DijkstraSolver);

    let reports = runner
        .run(&config.solver.sources, &config.solver.targets)
        .await?;

    writer::write_reports_to(config.output.path.as_deref(), &reports)?;

    tracing::info!(rows = reports.len(), "Pipeline finished.");
    Ok(())
}

/// Builds the graph from whichever edge source the configuration selects.
async fn build_graph(config: &Config) -> Result<GraphModel<String>, Error> {
    let domain = config.graph.domain;
    match config.input.kind {
        InputKind::Csv => {
            let path = config.input.path.clone().ok_or(Error::MissingInputPath)?;
            tracing::info!(path = %path.display(), "Loading edges from CSV");
            Producer::new(CsvLoader::new(path)).build_graph(domain).await
        }
        InputKind::Sim => {
            tracing::info!("Generating simulated network");
            Producer::new(SimulatorSource::new(config.simulator.clone()))
                .build_graph(domain)
                .await
        }
    }
}
