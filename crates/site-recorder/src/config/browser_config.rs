use crate::config::{DEFAULT_BROWSER_NAME, DEFAULT_WEBDRIVER_URL, default_browser_args};

use serde::{Deserialize, Serialize};
use site_recorder_core::WebDriverOptions;

/// Browser automation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// WebDriver endpoint (e.g. a running chromedriver).
    pub webdriver_url: String,
    /// W3C browser name.
    pub browser_name: String,
    /// Browser command line arguments.
    pub args: Vec<String>,
}

impl BrowserConfig {
    /// Options for opening the WebDriver session.
    pub fn webdriver_options(&self) -> WebDriverOptions {
        WebDriverOptions {
            endpoint: self.webdriver_url.clone(),
            browser_name: self.browser_name.clone(),
            args: self.args.clone(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            browser_name: DEFAULT_BROWSER_NAME.to_string(),
            args: default_browser_args(),
        }
    }
}
