use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use super::config::LoggingConfig;
use super::error::Error;

/// Environment variable that overrides the configured filter, e.g.
/// `SAFEST_PATH_LOG=safest_path_core=trace,info`.
const LOG_ENV_VAR: &str = "SAFEST_PATH_LOG";

/// Installs the global tracing subscriber. Logs go to stderr so the CSV
/// report on stdout stays clean.
pub fn init_logging(config: &LoggingConfig) -> Result<(), Error> {
    let filter = build_filter(&config.level)?;
    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(fmt::format::FmtSpan::CLOSE),
            )
            .try_init()
            .map_err(|e| Error::LoggingError(e.to_string()))?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()
            .map_err(|e| Error::LoggingError(e.to_string()))?;
    }

    Ok(())
}

fn build_filter(level: &str) -> Result<EnvFilter, Error> {
    match EnvFilter::try_from_env(LOG_ENV_VAR) {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| Error::LoggingError(format!("Invalid log level '{}': {}", level, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_levels_and_directives() {
        assert!(build_filter("info").is_ok());
        assert!(build_filter("safest_path_core=trace,warn").is_ok());
    }

    #[test]
    fn rejects_malformed_level() {
        assert!(matches!(
            build_filter("safest_path_core=loud"),
            Err(Error::LoggingError(_))
        ));
    }
}
