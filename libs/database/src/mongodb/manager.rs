use mongodb::{Collection, bson::Document};
use std::sync::Arc;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::OnceCell;
use tracing::{debug, error, info, warn};

use super::connector::{ConnectionHandle, MongoError, connect_from_config};
use super::health::{HealthStatus, check_health_detailed};
use super::MongoConfig;

/// Lifecycle of a [`MongoConnectionManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No handshake has succeeded yet
    Disconnected,
    /// A handle is established and shared
    Connected,
    /// `close()` ran; the manager will not connect again
    Closed,
}

/// Owns the process-wide MongoDB connection.
///
/// The connection is opened on first use and reused afterwards. Concurrent first
/// callers wait on a single handshake instead of each opening their own client.
/// A failed handshake is reported to the caller and the next call tries again.
///
/// Cloning is cheap; every clone shares the same connection.
///
/// # Example
/// ```ignore
/// use database::mongodb::{MongoConfig, MongoConnectionManager};
///
/// let manager = MongoConnectionManager::new(MongoConfig::new("mongodb://localhost:27017"));
/// let collection = manager.collection().await?;
/// // ...
/// manager.close().await;
/// ```
#[derive(Clone)]
pub struct MongoConnectionManager {
    inner: Arc<Inner>,
}

struct Inner {
    config: MongoConfig,
    handle: OnceCell<ConnectionHandle>,
    closed: AtomicBool,
    client_shut_down: AtomicBool,
}

impl MongoConnectionManager {
    pub fn new(config: MongoConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                handle: OnceCell::new(),
                closed: AtomicBool::new(false),
                client_shut_down: AtomicBool::new(false),
            }),
        }
    }

    pub fn config(&self) -> &MongoConfig {
        &self.inner.config
    }

    pub fn state(&self) -> ConnectionState {
        if self.inner.closed.load(Ordering::Acquire) {
            ConnectionState::Closed
        } else if self.inner.handle.initialized() {
            ConnectionState::Connected
        } else {
            ConnectionState::Disconnected
        }
    }

    /// Return the shared handle, connecting first if needed.
    pub async fn ensure_connected(&self) -> Result<&ConnectionHandle, MongoError> {
        self.ensure_connected_with(|| async {
            connect_from_config(&self.inner.config)
                .await
                .inspect_err(|e| error!(error = %e, "MongoDB connection failed"))
        })
        .await
    }

    async fn ensure_connected_with<F, Fut>(
        &self,
        connect: F,
    ) -> Result<&ConnectionHandle, MongoError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ConnectionHandle, MongoError>>,
    {
        if self.inner.closed.load(Ordering::Acquire) {
            return Err(MongoError::Closed);
        }

        let handle = self.inner.handle.get_or_try_init(connect).await?;

        // close() may have run while the handshake was in flight and found no client.
        if self.inner.closed.load(Ordering::Acquire) {
            warn!("MongoDB handshake finished after close, shutting the client down");
            self.shutdown_client(handle).await;
            return Err(MongoError::Closed);
        }

        Ok(handle)
    }

    /// The configured collection, connecting first if needed.
    pub async fn collection(&self) -> Result<Collection<Document>, MongoError> {
        Ok(self.ensure_connected().await?.collection().clone())
    }

    /// Ping the store through the shared connection.
    pub async fn check_health(&self) -> HealthStatus {
        match self.ensure_connected().await {
            Ok(handle) => check_health_detailed(handle.client()).await,
            Err(e) => HealthStatus {
                healthy: false,
                message: Some(e.to_string()),
                response_time_ms: 0,
            },
        }
    }

    /// Close the connection if one was opened.
    ///
    /// Only the first call does anything and returns `true`; the manager stays
    /// closed afterwards.
    pub async fn close(&self) -> bool {
        if self.inner.closed.swap(true, Ordering::AcqRel) {
            return false;
        }

        match self.inner.handle.get() {
            Some(handle) => self.shutdown_client(handle).await,
            None => debug!("MongoDB connection was never established, nothing to close"),
        }
        true
    }

    async fn shutdown_client(&self, handle: &ConnectionHandle) {
        if self.inner.client_shut_down.swap(true, Ordering::AcqRel) {
            return;
        }
        info!("Closing MongoDB connection");
        handle.client().clone().shutdown().await;
        info!("MongoDB connection closed");
    }
}
