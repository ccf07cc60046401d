//! Tracing initialization.

pub mod spans;

use std::sync::Once;

use lore_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured filter.
/// Format: `LORE_LOG=lore_validation=debug,lore_learning=info`
pub const LOG_ENV: &str = "LORE_LOG";

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// `LORE_LOG` wins over `config.log_level` when set and valid. Output is
/// JSON when `config.json` is true. Idempotent: only the first call in a
/// process installs anything, and it returns `false` if another subscriber
/// was already set.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter_for(config))
            .with_target(true);
        installed = if config.json {
            builder.json().try_init().is_ok()
        } else {
            builder.try_init().is_ok()
        };
    });
    installed
}

/// The filter `init_tracing` would install for `config`.
pub fn filter_for(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}
