use crate::sync::RuleSynchronizer;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Owns the periodic synchronization task. Started once at process init,
/// shut down explicitly; no ambient interval state.
pub struct SyncScheduler {
    refresh_tx: mpsc::Sender<()>,
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl SyncScheduler {
    /// Spawns the sync loop. The first tick fires immediately, so starting
    /// the scheduler is also the initial synchronization.
    pub fn start(synchronizer: Arc<RuleSynchronizer>, period: Duration) -> Self {
        let (refresh_tx, mut refresh_rx) = mpsc::channel::<()>(1);
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);

            loop {
                tokio::select! {
                    _ = interval.tick() => {}
                    _ = refresh_rx.recv() => {
                        info!("Forced blocklist refresh triggered via API...");
                        interval.reset(); // Avoid a double update right after
                    }
                    _ = shutdown_rx.changed() => {
                        info!("Sync scheduler stopping.");
                        return;
                    }
                }

                if let Err(e) = synchronizer.run_once().await {
                    error!("Rule engine rejected update: {:#}", e);
                }
            }
        });

        Self {
            refresh_tx,
            shutdown_tx,
            handle,
        }
    }

    /// Requests an out-of-band synchronization. Dropped silently if a forced
    /// refresh is already queued.
    pub fn trigger_refresh(&self) {
        let _ = self.refresh_tx.try_send(());
    }

    /// Channel for collaborators (the embedded API) to force a refresh.
    pub fn refresh_sender(&self) -> mpsc::Sender<()> {
        self.refresh_tx.clone()
    }

    /// Signals the loop to stop and waits for it to finish.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        let _ = self.handle.await;
    }
}
