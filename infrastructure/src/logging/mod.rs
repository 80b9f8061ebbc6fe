//! Logging infrastructure.
//!
//! Installs the process-wide `tracing` subscriber. `RUST_LOG`, when set,
//! takes precedence over the verbosity level.

use tracing_subscriber::EnvFilter;

/// Filter directive for a verbosity level (count of `-v` flags)
pub fn verbosity_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a `fmt` subscriber. Returns `false` when one was already set.
pub fn init_tracing(verbosity: u8) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_directive() {
        assert_eq!(verbosity_directive(0), "warn");
        assert_eq!(verbosity_directive(1), "info");
        assert_eq!(verbosity_directive(2), "debug");
        assert_eq!(verbosity_directive(7), "trace");
    }

    #[test]
    fn test_init_is_idempotent() {
        init_tracing(0);
        assert!(!init_tracing(2));
    }
}
