//! Cascade timing parameters.
//!
//! [`CascadeSettings`] bounds every network suspension point of the
//! cascade so a request can never block indefinitely.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-operation timeouts applied by the orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeSettings {
    /// Upper bound for one availability probe
    pub probe_timeout: Duration,
    /// Upper bound for one generation request
    pub request_timeout: Duration,
}

impl Default for CascadeSettings {
    fn default() -> Self {
        Self {
            probe_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(25),
        }
    }
}

impl CascadeSettings {
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
