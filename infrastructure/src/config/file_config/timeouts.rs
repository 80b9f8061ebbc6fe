//! Timeout configuration from TOML (`[timeouts]` section)

use devtype_application::CascadeSettings;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTimeoutsConfig {
    /// Seconds allowed for one availability probe
    pub probe_secs: u64,
    /// Seconds allowed for one generation request
    pub request_secs: u64,
}

impl Default for FileTimeoutsConfig {
    fn default() -> Self {
        let settings = CascadeSettings::default();
        Self {
            probe_secs: settings.probe_timeout.as_secs(),
            request_secs: settings.request_timeout.as_secs(),
        }
    }
}

impl FileTimeoutsConfig {
    pub fn to_settings(&self) -> CascadeSettings {
        CascadeSettings::default()
            .with_probe_timeout(Duration::from_secs(self.probe_secs))
            .with_request_timeout(Duration::from_secs(self.request_secs))
    }
}
