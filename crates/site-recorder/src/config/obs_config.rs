use crate::config::{DEFAULT_OBS_HOST, DEFAULT_OBS_PORT, OBS_PASSWORD_ENV};

use std::env;

use serde::{Deserialize, Serialize};
use site_recorder_core::ObsConnectOptions;

/// obs-websocket connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObsConfig {
    /// Host running OBS.
    pub host: String,
    /// obs-websocket port.
    pub port: u16,
    /// Shared secret. Falls back to `OBS_WS_PASSWORD` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ObsConfig {
    /// Connection options with the password resolved.
    pub fn connect_options(&self) -> ObsConnectOptions {
        ObsConnectOptions {
            host: self.host.clone(),
            port: self.port,
            password: non_blank(self.password.clone())
                .or_else(|| non_blank(env::var(OBS_PASSWORD_ENV).ok())),
        }
    }
}

impl Default for ObsConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_OBS_HOST.to_string(),
            port: DEFAULT_OBS_PORT,
            password: None,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
