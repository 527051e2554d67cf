mod browser_config;
mod capture_config;
#[allow(clippy::module_inception)]
mod config;
mod obs_config;
mod server_config;

pub(crate) use {
    browser_config::BrowserConfig, capture_config::CaptureConfig, config::Config,
    obs_config::ObsConfig, server_config::ServerConfig,
};

pub(crate) const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub(crate) const DEFAULT_SERVER_PORT: u16 = 3000;
pub(crate) const DEFAULT_OBS_HOST: &str = "localhost";
pub(crate) const DEFAULT_OBS_PORT: u16 = 4455;
pub(crate) const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";
pub(crate) const DEFAULT_BROWSER_NAME: &str = "chrome";

/// Environment variable consulted when no OBS password is configured.
pub(crate) const OBS_PASSWORD_ENV: &str = "OBS_WS_PASSWORD";

/// Environment variable overriding the config file location.
pub(crate) const CONFIG_PATH_ENV: &str = "SITE_RECORDER_CONFIG";

pub(crate) fn default_browser_args() -> Vec<String> {
    vec!["--no-sandbox".to_string(), "--disable-dev-shm-usage".to_string()]
}
