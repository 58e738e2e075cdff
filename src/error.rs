/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum SmelterError {
    /// Construction of an authenticated handle was rejected.
    #[error("unable to authenticate client for {endpoint}")]
    Auth {
        endpoint: String,
        #[source]
        source: AuthRejected,
    },
    /// The operation path does not name a registered operation.
    #[error("operation path '{path}' does not resolve at '{segment}'")]
    UnknownOperation { path: String, segment: String },
    /// Every permitted attempt failed with a retryable error.
    #[error("error contacting service for '{operation}': {attempts} of {attempts} attempts failed")]
    RetriesExhausted {
        /// Dotted path of the failing operation.
        operation: String,
        /// Total attempts performed before giving up.
        attempts: u32,
        #[source]
        source: CallError,
    },
    /// Non-retryable failure surfaced from the resolved operation.
    #[error(transparent)]
    Call(#[from] CallError),
    /// Result decoding error from [`call_as`](crate::ClientWrapper::call_as).
    #[error("decode error: {0}")]
    Decode(String),
}

/// Failure raised by a resolved operation.
///
/// The first four kinds mirror what the service reports; the wrapper
/// classifies them for retry via [`retry_class`](CallError::retry_class).
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// The service rejected the handle's credentials mid-call.
    #[error("authentication rejected: {0}")]
    Unauthorized(String),
    /// The service is temporarily unable to serve the call.
    #[error("service unavailable: {0}")]
    Unavailable(String),
    /// The transport could not reach the service.
    #[error("connection refused: {0}")]
    ConnectionRefused(String),
    /// The service reported a conflicting concurrent change.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Any other failure. Never retried.
    #[error("unhandled client error: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl CallError {
    /// Wraps an arbitrary error as a non-retryable failure.
    pub fn other(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Other(err.into())
    }
}

/// Rejection raised by a [`Connector`](crate::Connector) or a
/// [`CredentialProvider`](crate::CredentialProvider).
#[derive(Clone, Debug, thiserror::Error)]
#[error("authentication rejected: {reason}")]
pub struct AuthRejected {
    pub reason: String,
}

impl AuthRejected {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
