//! Background refresh scheduler
//!
//! Periodically runs `refresh(scope)` on a synchronizer while a session is
//! open. Uses `CancellationToken` for async-native shutdown signaling.

use std::sync::Arc;
use std::time::Duration;

use nsync_application::NotificationSyncServiceInterface;
use nsync_domain::NotificationScope;
use nsync_domain::error::{Error, Result};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

struct Running {
    cancel_token: CancellationToken,
    handle: JoinHandle<()>,
}

/// Periodic refresh of one scope
///
/// The first refresh fires one full interval after [`RefreshScheduler::start`];
/// the session performs the initial fetch itself. A refresh that overruns the
/// interval delays the next tick instead of stacking up calls.
pub struct RefreshScheduler {
    sync: Arc<dyn NotificationSyncServiceInterface>,
    scope: NotificationScope,
    interval: Duration,
    running: Mutex<Option<Running>>,
}

impl RefreshScheduler {
    /// Create a stopped scheduler
    ///
    /// Fails with [`Error::Config`] for a zero interval.
    pub fn new(
        sync: Arc<dyn NotificationSyncServiceInterface>,
        scope: NotificationScope,
        interval: Duration,
    ) -> Result<Self> {
        if interval.is_zero() {
            return Err(Error::config("Refresh interval must be non-zero"));
        }
        Ok(Self {
            sync,
            scope,
            interval,
            running: Mutex::new(None),
        })
    }

    /// Interval between refreshes
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start the background loop; a no-op if it is already running
    pub async fn start(&self) {
        let mut running = self.running.lock().await;
        if running.is_some() {
            return;
        }

        let cancel_token = CancellationToken::new();
        let handle = tokio::spawn(Self::refresh_loop(
            Arc::clone(&self.sync),
            self.scope.clone(),
            self.interval,
            cancel_token.clone(),
        ));
        info!(
            user_id = %self.scope.user_id,
            interval_secs = self.interval.as_secs(),
            "Refresh scheduler started"
        );
        *running = Some(Running {
            cancel_token,
            handle,
        });
    }

    /// Stop the background loop and wait for an in-progress refresh to finish
    pub async fn stop(&self) {
        let Some(Running {
            cancel_token,
            handle,
        }) = self.running.lock().await.take()
        else {
            return;
        };

        cancel_token.cancel();
        if let Err(e) = handle.await {
            warn!(error = %e, "Refresh task ended abnormally");
        }
        info!(user_id = %self.scope.user_id, "Refresh scheduler stopped");
    }

    /// Whether the background loop is running
    pub async fn is_running(&self) -> bool {
        self.running.lock().await.is_some()
    }

    async fn refresh_loop(
        sync: Arc<dyn NotificationSyncServiceInterface>,
        scope: NotificationScope,
        interval: Duration,
        cancel_token: CancellationToken,
    ) {
        let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => break,
                _ = ticker.tick() => {
                    let outcome = sync.refresh(&scope).await;
                    debug!(committed = outcome.is_committed(), "Background refresh finished");
                }
            }
        }
    }
}
