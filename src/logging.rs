//! Tracing setup
//!
//! Logs go to stderr so reports on stdout stay clean.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV_VAR: &str = "BUDGET_LEDGER_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber once
///
/// `BUDGET_LEDGER_LOG` wins over `default_filter`; an unparsable directive
/// falls back to warnings only.
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // Another subscriber may already be installed by an embedding host
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_tracing("budget_ledger=debug");
        init_tracing("not a [valid directive");
        tracing::debug!("tracing initialized twice without panicking");
    }
}
