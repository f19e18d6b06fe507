//! Session bootstrap
//!
//! Composition root for one signed-in user: builds the remote provider and
//! the synchronizer, performs the initial fetch and optionally keeps the view
//! fresh in the background. Shutting the session down stops the scheduler and
//! tears the state down.
//!
//! ```text
//! AppConfig → HttpNotificationService → NotificationSynchronizer → RefreshScheduler
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let session = NotificationSession::start(&config, NotificationScope::user("u1")).await?;
//!
//! let mut updates = session.synchronizer().subscribe();
//! // ... render `updates.borrow()` ...
//!
//! session.shutdown().await;
//! ```

use std::sync::Arc;

use nsync_application::{NotificationSyncServiceInterface, NotificationSynchronizer, SyncOutcome};
use nsync_domain::NotificationScope;
use nsync_domain::error::{Error, Result};
use nsync_domain::ports::SharedNotificationService;
use nsync_providers::notification::HttpNotificationService;
use tracing::{info, warn};

use crate::config::loader::{validate_app_config, validate_sync_config};
use crate::config::{AppConfig, SyncConfig};
use crate::scheduler::RefreshScheduler;

/// A running notification session
pub struct NotificationSession {
    scope: NotificationScope,
    synchronizer: Arc<NotificationSynchronizer>,
    scheduler: Option<RefreshScheduler>,
}

impl NotificationSession {
    /// Start a session against the configured REST service
    pub async fn start(config: &AppConfig, scope: NotificationScope) -> Result<Self> {
        validate_app_config(config)?;
        let service = HttpNotificationService::from_config(
            &config.remote.base_url,
            &config.remote.http_client_config(),
        )?;
        Self::start_with_service(&config.sync, Arc::new(service), scope).await
    }

    /// Start a session against any notification service implementation
    ///
    /// A failed initial fetch does not fail the session: the failure is
    /// recorded in the state and the next refresh retries. An invalid
    /// `sync_config` does.
    pub async fn start_with_service(
        sync_config: &SyncConfig,
        service: SharedNotificationService,
        scope: NotificationScope,
    ) -> Result<Self> {
        if scope.user_id.trim().is_empty() {
            return Err(Error::invalid_argument("Session user id cannot be empty"));
        }
        validate_sync_config(sync_config)?;

        let synchronizer = Arc::new(NotificationSynchronizer::new(service));
        info!(
            user_id = %scope.user_id,
            provider = synchronizer.provider_name(),
            "Starting notification session"
        );

        if let SyncOutcome::Failed(failure) = synchronizer.fetch(&scope).await {
            warn!(error = %failure, "Initial fetch failed, session continues");
        }

        let scheduler = if sync_config.auto_refresh {
            let scheduler = RefreshScheduler::new(
                synchronizer.clone(),
                scope.clone(),
                sync_config.refresh_interval(),
            )?;
            scheduler.start().await;
            Some(scheduler)
        } else {
            None
        };

        Ok(Self {
            scope,
            synchronizer,
            scheduler,
        })
    }

    /// Scope this session synchronizes
    pub fn scope(&self) -> &NotificationScope {
        &self.scope
    }

    /// Synchronizer owned by this session
    pub fn synchronizer(&self) -> Arc<NotificationSynchronizer> {
        Arc::clone(&self.synchronizer)
    }

    /// Background refresh, if enabled
    pub fn scheduler(&self) -> Option<&RefreshScheduler> {
        self.scheduler.as_ref()
    }

    /// Stop background refresh and drop all local state (sign-out)
    pub async fn shutdown(self) {
        if let Some(scheduler) = &self.scheduler {
            scheduler.stop().await;
        }
        self.synchronizer.reset();
        info!(user_id = %self.scope.user_id, "Notification session closed");
    }
}
