use std::fmt;
use std::future::Future;

use crate::error::AuthRejected;

/// Opaque credential material handed to a [`Connector`].
///
/// The inner secret is never printed by `Debug`.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Returns the raw secret for use in an authentication exchange.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"<redacted>").finish()
    }
}

/// Produces credential material for authenticated construction.
///
/// Implementations may hold a static token, read a keystore, or run a
/// full challenge/response exchange; the wrapper only asks for a
/// credential when it needs to build a handle.
pub trait CredentialProvider: Send + Sync {
    fn credential(&self) -> impl Future<Output = Result<Credential, AuthRejected>> + Send;
}

/// Constructs an authenticated client handle for an endpoint.
///
/// This is the only way the wrapper obtains a handle; it never
/// fabricates one itself.
pub trait Connector: Send + Sync {
    /// Handle type produced on successful authentication.
    type Client: Send + Sync;

    fn connect(
        &self,
        endpoint: &str,
        credential: &Credential,
    ) -> impl Future<Output = Result<Self::Client, AuthRejected>> + Send;
}

/// Credential provider backed by a fixed token.
#[derive(Clone, Debug)]
pub struct StaticCredential {
    credential: Credential,
}

impl StaticCredential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            credential: Credential::new(secret),
        }
    }
}

impl CredentialProvider for StaticCredential {
    async fn credential(&self) -> Result<Credential, AuthRejected> {
        Ok(self.credential.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{Credential, CredentialProvider, StaticCredential};

    #[test]
    fn debug_redacts_credential_value() {
        let credential = Credential::new("secret-token");
        let debug = format!("{credential:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("secret-token"));
    }

    #[tokio::test]
    async fn static_provider_returns_fixed_secret() {
        let provider = StaticCredential::new("fixed");
        let credential = provider
            .credential()
            .await
            .expect("static credential must resolve");
        assert_eq!(credential.expose(), "fixed");
    }
}
