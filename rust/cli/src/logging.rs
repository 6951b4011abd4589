//! Diagnostic logging. Narration goes to stdout; logs go to stderr so the
//! two never interleave on the player's screen.

use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Builds the filter from `RUST_LOG`, falling back to `default_level`
/// (e.g. "warn" or "holdem_engine=debug").
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs the global subscriber. Fails when one is already installed.
pub fn init_logging(default_level: &str) -> Result<(), SetGlobalDefaultError> {
    let subscriber = fmt()
        .with_env_filter(build_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_refused() {
        // another test in this binary may have installed one already
        let _ = init_logging("warn");
        assert!(init_logging("debug").is_err());
    }
}
