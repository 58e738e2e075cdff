use crate::CallError;

/// Classification of a [`CallError`] for the retry loop.
///
/// | Class | Retried? | Cached handle |
/// |-------|----------|---------------|
/// | `Auth` | Yes, after reauthentication | Invalidated |
/// | `Transient` | Yes, after the backoff interval | Kept |
/// | `Fatal` | No, propagates immediately | Kept |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// The cached handle's credentials were rejected mid-call.
    Auth,
    /// The service or transport failed in a way expected to clear up.
    Transient,
    /// Anything else — a defect in the caller's operation or an
    /// unexpected failure mode, not remote-service flakiness.
    Fatal,
}

impl CallError {
    /// Maps a failure onto the class the retry loop branches on.
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::Unauthorized(_) => RetryClass::Auth,
            Self::Unavailable(_) | Self::ConnectionRefused(_) | Self::Conflict(_) => {
                RetryClass::Transient
            }
            Self::Other(_) => RetryClass::Fatal,
        }
    }
}

#[cfg(feature = "reqwest")]
impl CallError {
    /// Classifies a transport-level `reqwest` error.
    ///
    /// Connection failures map to [`CallError::ConnectionRefused`] and
    /// timeouts to [`CallError::Unavailable`]; everything else is fatal.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::ConnectionRefused(err.to_string())
        } else if err.is_timeout() {
            Self::Unavailable(err.to_string())
        } else {
            Self::Other(Box::new(err))
        }
    }

    /// Classifies a non-success HTTP status with its response body.
    pub fn from_status(status: reqwest::StatusCode, body: impl Into<String>) -> Self {
        use reqwest::StatusCode;

        let body = body.into();
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized(body),
            StatusCode::CONFLICT => Self::Conflict(body),
            StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT => Self::Unavailable(format!("http {status}: {body}")),
            _ => Self::Other(format!("http {status}: {body}").into()),
        }
    }
}
