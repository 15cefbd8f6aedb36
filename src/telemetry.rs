use crate::error::AssessError;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` takes precedence over `log_level`.
/// Output goes to stderr so that JSON on stdout stays clean.
pub fn init(log_level: &str) -> Result<(), AssessError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level).map_err(|e| {
            AssessError::Config(format!("invalid log level/filter '{}': {}", log_level, e))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| AssessError::Config(format!("telemetry: {}", e)))
}
