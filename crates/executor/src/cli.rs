use clap::Parser;
use std::path::PathBuf;

use super::config::{Config, InputKind};

/// Safest-path solver: loads a weighted network and reports the best path
/// from each source to each target.
#[derive(Debug, Parser)]
#[command(name = "safest-path", version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "crates/executor/Config.toml")]
    pub config: PathBuf,

    /// Where edges come from (overrides `input.kind`)
    #[arg(long, value_enum)]
    pub input: Option<InputKind>,

    /// CSV edge file (overrides `input.path`)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Source node; repeat for several (overrides `solver.sources`)
    #[arg(long = "source")]
    pub sources: Vec<String>,

    /// Target node; repeat for several (overrides `solver.targets`)
    #[arg(long = "target")]
    pub targets: Vec<String>,

    /// CSV report destination (overrides `output.path`)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `safest_path_core=trace` (overrides `logging.level`)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration.
    pub fn apply(self, config: &mut Config) {
        if let Some(kind) = self.input {
            config.input.kind = kind;
        }
        if let Some(path) = self.path {
            config.input.path = Some(path);
        }
        if !self.sources.is_empty() {
            config.solver.sources = self.sources;
        }
        if !self.targets.is_empty() {
            config.solver.targets = self.targets;
        }
        if let Some(output) = self.output {
            config.output.path = Some(output);
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        GraphConfig, InputConfig, LoggingConfig, OutputConfig, SimulatorConfig, SolverConfig,
    };
    use common::types::WeightDomain;

    fn base_config() -> Config {
        Config {
            graph: GraphConfig {
                domain: WeightDomain::Probability,
            },
            solver: SolverConfig {
                sources: vec!["KTM".to_string()],
                targets: Vec::new(),
            },
            input: InputConfig {
                kind: InputKind::Sim,
                path: None,
            },
            simulator: SimulatorConfig {
                total_nodes: 10,
                edges_per_node: 2,
                min_weight: 0.5,
                max_weight: 1.0,
                seed: None,
            },
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn overrides_replace_config_values() {
        let cli = Cli::parse_from([
            "safest-path",
            "--input",
            "csv",
            "--path",
            "routes.csv",
            "--source",
            "BKT",
            "--source",
            "LAL",
            "--target",
            "PH",
            "--log-level",
            "debug",
        ]);
        let mut config = base_config();
        cli.apply(&mut config);

        assert_eq!(config.input.kind, InputKind::Csv);
        assert_eq!(config.input.path, Some(PathBuf::from("routes.csv")));
        assert_eq!(config.solver.sources, vec!["BKT", "LAL"]);
        assert_eq!(config.solver.targets, vec!["PH"]);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.output.path, None);
    }

    #[test]
    fn no_flags_leave_config_untouched() {
        let cli = Cli::parse_from(["safest-path"]);
        assert_eq!(cli.config, PathBuf::from("crates/executor/Config.toml"));

        let mut config = base_config();
        cli.apply(&mut config);

        assert_eq!(config.input.kind, InputKind::Sim);
        assert_eq!(config.solver.sources, vec!["KTM"]);
        assert_eq!(config.logging.level, "info");
    }
}
