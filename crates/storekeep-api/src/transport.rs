// Shared transport configuration for building reqwest::Client instances.
//
// The adapter performs no retries and no caching; timeout is the only
// transport knob the server contract leaves to the client.

use std::time::Duration;

/// Transport configuration for building the HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent("storekeep/0.1.0")
            .build()
            .map_err(crate::error::Error::Transport)
    }
}
