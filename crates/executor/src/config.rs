use clap::ValueEnum;
use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::Error;
use common::types::WeightDomain;

/// Prefix for environment overrides, e.g. `SAFEST_PATH_GRAPH__DOMAIN=cost`.
const ENV_PREFIX: &str = "SAFEST_PATH";

#[derive(Debug, Deserialize, Clone)]
pub struct GraphConfig {
    pub domain: WeightDomain,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SolverConfig {
    /// Nodes to solve from. When empty, the first node of the graph is used.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Nodes to report on. When empty, every reachable node is reported.
    #[serde(default)]
    pub targets: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Csv,
    Sim,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InputConfig {
    pub kind: InputKind,
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulatorConfig {
    pub total_nodes: usize,
    pub edges_per_node: usize,
    pub min_weight: f64,
    pub max_weight: f64,
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    /// CSV report destination. Written to stdout when absent.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub graph: GraphConfig,
    #[serde(default)]
    pub solver: SolverConfig,
    pub input: InputConfig,
    pub simulator: SimulatorConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Loads configuration from a TOML file, overlaid by `SAFEST_PATH_*` environment variables.
///
/// Nested keys use a double underscore (`SAFEST_PATH_SOLVER__SOURCES=KTM,BKT`);
/// the source and target lists accept comma-separated values.
pub fn load_config(config_file_path: &Path) -> Result<Config, Error> {
    if !config_file_path.exists() {
        return Err(Error::ConfigLoadError(format!(
            "Configuration file not found at path: {}",
            config_file_path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .add_source(File::from(config_file_path).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("solver.sources")
                .with_list_parse_key("solver.targets"),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    const FULL_CONFIG: &str = r#"
[graph]
domain = "probability"

[solver]
sources = ["KTM"]
targets = ["PH", "BKT"]

[input]
kind = "csv"
path = "data/emergency_routes.csv"

[simulator]
total_nodes = 20
edges_per_node = 3
min_weight = 0.5
max_weight = 1.0
seed = 7

[output]
path = "report.csv"

[logging]
level = "debug"
json = true
"#;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write config");
        file
    }

    #[test]
    fn loads_full_config() {
        let file = write_config(FULL_CONFIG);
        let config = load_config(file.path()).expect("config should load");

        assert_eq!(config.graph.domain, WeightDomain::Probability);
        assert_eq!(config.solver.sources, vec!["KTM"]);
        assert_eq!(config.solver.targets, vec!["PH", "BKT"]);
        assert_eq!(config.input.kind, InputKind::Csv);
        assert_eq!(
            config.input.path,
            Some(PathBuf::from("data/emergency_routes.csv"))
        );
        assert_eq!(config.simulator.seed, Some(7));
        assert_eq!(config.output.path, Some(PathBuf::from("report.csv")));
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn optional_sections_fall_back_to_defaults() {
        let file = write_config(
            r#"
[graph]
domain = "cost"

[input]
kind = "sim"

[simulator]
total_nodes = 5
edges_per_node = 1
min_weight = 0.0
max_weight = 10.0
"#,
        );
        let config = load_config(file.path()).expect("config should load");

        assert_eq!(config.graph.domain, WeightDomain::Cost);
        assert!(config.solver.sources.is_empty());
        assert!(config.solver.targets.is_empty());
        assert_eq!(config.input.path, None);
        assert_eq!(config.simulator.seed, None);
        assert_eq!(config.output.path, None);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn missing_file_is_reported() {
        let result = load_config(Path::new("does/not/exist/Config.toml"));

        assert!(matches!(result, Err(Error::ConfigLoadError(msg)) if msg.contains("not found")));
    }

    #[test]
    fn unknown_domain_is_rejected() {
        let file = write_config(&FULL_CONFIG.replace("\"probability\"", "\"distance\""));

        assert!(matches!(
            load_config(file.path()),
            Err(Error::ConfigLoadError(_))
        ));
    }
}
