/// Configures retry pacing for [`call`](crate::ClientWrapper::call).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Fixed delay between retried attempts, in milliseconds.
    pub retry_interval_ms: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            retry_interval_ms: 2_000,
        }
    }
}
