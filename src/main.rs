use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::info;

use phish_nope::api::{start_api_server, ApiState, BlocklistStore};
use phish_nope::checker::HostnameChecker;
use phish_nope::config::Config;
use phish_nope::engine::MemoryRuleEngine;
use phish_nope::init::setup_logging;
use phish_nope::scheduler::SyncScheduler;
use phish_nope::sync::RuleSynchronizer;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load Config
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let config = if std::path::Path::new(&config_path).exists() {
        Config::load(&config_path).await?
    } else {
        Config::default()
    };

    // 2. Setup Logging
    setup_logging(&config);
    info!("Starting phish-nope...");

    if !std::path::Path::new(&config_path).exists() {
        info!("Config file not found, using defaults.");
    }

    // 3. Init Rule Engine & Synchronizer
    let engine = Arc::new(MemoryRuleEngine::new());
    let synchronizer = Arc::new(RuleSynchronizer::new(&config, engine.clone()));

    // 4. Start Scheduler (first tick runs the initial synchronization)
    let period = Duration::from_secs(config.updates.interval_seconds);
    let scheduler = SyncScheduler::start(synchronizer, period);

    // 5. Start Embedded Blocklist API
    if config.api.enable {
        let state = Arc::new(ApiState {
            store: Arc::new(BlocklistStore::new()),
            refresh_sender: scheduler.refresh_sender(),
        });
        let host = config.api.host.clone();
        let port = config.api.port;
        tokio::spawn(async move {
            start_api_server(state, host, port).await;
        });
    }

    // 6. Hostname Checker
    // Runs only when a navigation source drives its hook; none exists in this
    // process, so construction is all that happens here.
    let _checker = HostnameChecker::new(config.checker.malicious_domains.clone());

    // 7. Graceful Shutdown
    signal::ctrl_c().await?;
    info!("Shutdown signal received.");
    scheduler.shutdown().await;

    Ok(())
}
