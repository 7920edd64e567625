//! tracing-subscriber setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "ETHIOCAL_LOG";

/// Workspace crate targets that receive log output.
const CRATE_TARGETS: &[&str] = &["ethiocal", "ethiocal_core"];

/// Default filter for a `-v` count.
///
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
pub fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing on stderr.
///
/// Precedence: `ETHIOCAL_LOG`, then a `-v` flag, then the config `log`
/// directive, then `warn`.
pub fn init(verbosity: u8, configured: Option<&str>) {
    let fallback = match (verbosity, configured) {
        (0, Some(directive)) => directive.to_string(),
        _ => default_filter(verbosity),
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
