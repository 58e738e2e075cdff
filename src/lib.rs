//! `smelter-client` is a resilient async access layer for the Smelter
//! provisioning API.
//!
//! The crate wraps a native client handle behind [`ClientWrapper`]:
//! - lazily constructs an authenticated handle through a [`Connector`]
//!   and caches it across calls
//! - dispatches dotted operation paths (`"node.list"`) through a typed
//!   [`OperationRegistry`]
//! - retries authentication and transient failures with a fixed backoff
//!   interval, up to a per-call attempt budget

mod connect;
mod error;
mod options;
mod params;
mod registry;
mod retry;
mod wrapper;

pub use connect::{Connector, Credential, CredentialProvider, StaticCredential};
pub use error::{AuthRejected, CallError, SmelterError};
pub use options::ClientOptions;
pub use params::Params;
pub use registry::{OperationFn, OperationFuture, OperationRegistry};
pub use retry::RetryClass;
pub use wrapper::ClientWrapper;

pub type Result<T> = std::result::Result<T, SmelterError>;
