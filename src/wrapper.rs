use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::{
    connect::{Connector, CredentialProvider},
    error::{AuthRejected, SmelterError},
    retry::RetryClass,
    ClientOptions, OperationRegistry, Params, Result,
};

/// Access layer around a native Smelter client handle.
///
/// The wrapper lazily constructs an authenticated handle through its
/// [`Connector`], caches it for reuse, and dispatches named operations
/// with bounded retry. An authentication rejection mid-call invalidates
/// the cached handle so the next attempt starts from a fresh one; a
/// transient service failure is retried after a fixed backoff interval.
///
/// Safe to share across tasks: handle construction and invalidation are
/// serialized behind an internal async mutex. The lock is not held
/// while an operation runs, so a concurrent invalidation costs at most
/// one extra reconstruction.
pub struct ClientWrapper<P: Connector, S> {
    connector: P,
    credentials: S,
    endpoint: String,
    options: ClientOptions,
    operations: OperationRegistry<P::Client>,
    cached: Mutex<Option<Arc<P::Client>>>,
}

impl<P: Connector, S> fmt::Debug for ClientWrapper<P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientWrapper")
            .field("endpoint", &self.endpoint)
            .field("options", &self.options)
            .field("operations", &self.operations)
            .finish_non_exhaustive()
    }
}

impl<P, S> ClientWrapper<P, S>
where
    P: Connector,
    S: CredentialProvider,
{
    /// Creates a wrapper for one endpoint.
    pub fn new(
        endpoint: impl Into<String>,
        connector: P,
        credentials: S,
        operations: OperationRegistry<P::Client>,
    ) -> Self {
        Self {
            connector,
            credentials,
            endpoint: endpoint.into(),
            options: ClientOptions::default(),
            operations,
            cached: Mutex::new(None),
        }
    }

    /// Applies client options such as the retry backoff interval.
    pub fn with_options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }

    /// Endpoint this wrapper talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Drops the cached handle so the next call reauthenticates.
    ///
    /// Idempotent; a fresh handle is built on next use.
    pub async fn invalidate_cached_client(&self) {
        *self.cached.lock().await = None;
    }

    /// Invokes a named operation, retrying authentication and transient
    /// failures up to `max_attempts` total attempts.
    ///
    /// A `max_attempts` of zero is treated as one attempt. Failures
    /// outside the retryable classes propagate immediately; once the
    /// attempt budget is spent, the last retryable failure is surfaced
    /// as [`SmelterError::RetriesExhausted`].
    pub async fn call(&self, operation: &str, max_attempts: u32, params: Params) -> Result<Value> {
        let total = max_attempts.max(1);
        let interval = Duration::from_millis(self.options.retry_interval_ms);

        for attempt in 1..=total {
            let client = self.get_client().await?;
            let entry = self.operations.resolve(operation)?;

            let failure = match entry(client.as_ref(), params.clone()).await {
                Ok(value) => return Ok(value),
                Err(failure) => failure,
            };

            match failure.retry_class() {
                RetryClass::Auth => {
                    // The cached handle's credentials probably expired.
                    // Invalidate it so the next attempt starts fresh.
                    self.invalidate_cached_client().await;
                    tracing::debug!(
                        operation,
                        error = %failure,
                        "client became unauthorized; will reauthenticate and retry"
                    );
                }
                RetryClass::Transient => {}
                RetryClass::Fatal => return Err(SmelterError::Call(failure)),
            }

            if attempt == total {
                tracing::error!(
                    endpoint = %self.endpoint,
                    operation,
                    attempt,
                    total,
                    error = %failure,
                    "error contacting service; attempts exhausted"
                );
                return Err(SmelterError::RetriesExhausted {
                    operation: operation.to_owned(),
                    attempts: total,
                    source: failure,
                });
            }
            tracing::warn!(
                endpoint = %self.endpoint,
                operation,
                attempt,
                total,
                error = %failure,
                "error contacting service; retrying"
            );
            sleep(interval).await;
        }

        unreachable!("attempt loop returns on success or exhaustion")
    }

    /// Like [`call`](Self::call), deserializing the result into `T`.
    pub async fn call_as<T>(&self, operation: &str, max_attempts: u32, params: Params) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let value = self.call(operation, max_attempts, params).await?;
        serde_json::from_value(value)
            .map_err(|err| SmelterError::Decode(format!("invalid '{operation}' result: {err}")))
    }

    /// Returns the cached handle, constructing and caching one if absent.
    async fn get_client(&self) -> Result<Arc<P::Client>> {
        let mut slot = self.cached.lock().await;
        if let Some(client) = slot.as_ref() {
            return Ok(Arc::clone(client));
        }

        match self.construct().await {
            Ok(client) => {
                // Cache the handle so we don't reconstruct and
                // reauthenticate on every call.
                let client = Arc::new(client);
                *slot = Some(Arc::clone(&client));
                Ok(client)
            }
            Err(rejection) => {
                tracing::error!(
                    endpoint = %self.endpoint,
                    error = %rejection,
                    "unable to authenticate client"
                );
                Err(SmelterError::Auth {
                    endpoint: self.endpoint.clone(),
                    source: rejection,
                })
            }
        }
    }

    async fn construct(&self) -> std::result::Result<P::Client, AuthRejected> {
        let credential = self.credentials.credential().await?;
        self.connector.connect(&self.endpoint, &credential).await
    }
}
