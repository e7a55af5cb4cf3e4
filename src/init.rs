//! Initialization helpers for the application startup.

use crate::config::Config;

/// Sets up the tracing subscriber with the configured filters.
pub fn setup_logging(config: &Config) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let mut filter = config.logging.level.clone();

        // Suppress HTTP-stack logs unless explicitly enabled/overridden
        if !filter.contains("hyper") {
            filter.push_str(",hyper=off");
        }
        if !filter.contains("reqwest") {
            filter.push_str(",reqwest=off");
        }

        tracing_subscriber::EnvFilter::new(filter)
    });

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
