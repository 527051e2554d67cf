//! W3C WebDriver client speaking JSON over HTTP to a local driver process
//! (chromedriver, geckodriver, msedgedriver).

use crate::{BrowserDriver, CoreResult, RecorderError, WindowHandle};

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::{Map, Value, json};
use tracing::{debug, info, instrument};
use url::Url;

/// Settings for creating a WebDriver session.
#[derive(Debug, Clone)]
pub struct WebDriverOptions {
    /// Base URL of the driver process, e.g. `http://localhost:9515`.
    pub endpoint: String,
    /// W3C `browserName` capability.
    pub browser_name: String,
    /// Command line arguments passed to the browser binary.
    pub args: Vec<String>,
}

/// A live WebDriver session.
pub struct WebDriverClient {
    http: Client,
    base: Url,
    session_id: String,
}

impl WebDriverClient {
    /// Create a new browser session on the driver at `options.endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError::Automation`] if the driver is unreachable or
    /// refuses the session.
    #[instrument(skip(options), fields(endpoint = %options.endpoint))]
    pub async fn start(options: &WebDriverOptions) -> CoreResult<Self> {
        let base = parse_base(&options.endpoint)?;
        let http = Client::new();

        let mut always_match = Map::new();
        always_match.insert("browserName".to_string(), json!(options.browser_name));
        always_match.insert(
            vendor_options_key(&options.browser_name).to_string(),
            json!({ "args": options.args }),
        );
        let capabilities = json!({ "capabilities": { "alwaysMatch": always_match } });

        let url = base
            .join("session")
            .map_err(|e| RecorderError::automation(format!("Invalid session URL: {}", e)))?;
        let value = send(http.post(url).json(&capabilities), "NewSession").await?;

        let session_id = value
            .get("sessionId")
            .and_then(Value::as_str)
            .ok_or_else(|| RecorderError::automation("NewSession response has no sessionId"))?
            .to_string();

        info!(session_id = %session_id, browser = %options.browser_name, "WebDriver session created");

        Ok(Self {
            http,
            base,
            session_id,
        })
    }

    /// Identifier the driver assigned to this session.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    fn endpoint(&self, path: &str) -> CoreResult<Url> {
        let suffix = if path.is_empty() {
            format!("session/{}", self.session_id)
        } else {
            format!("session/{}/{}", self.session_id, path)
        };
        self.base
            .join(&suffix)
            .map_err(|e| RecorderError::automation(format!("Invalid command URL {}: {}", suffix, e)))
    }

    async fn command(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        name: &str,
    ) -> CoreResult<Value> {
        let url = self.endpoint(path)?;
        debug!(command = name, url = %url, "WebDriver command");
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(&body);
        }
        send(request, name).await
    }
}

#[async_trait]
impl BrowserDriver for WebDriverClient {
    async fn maximize_window(&self) -> CoreResult<()> {
        self.command(Method::POST, "window/maximize", Some(json!({})), "MaximizeWindow")
            .await?;
        Ok(())
    }

    async fn navigate(&self, url: &str) -> CoreResult<()> {
        self.command(Method::POST, "url", Some(json!({ "url": url })), "NavigateTo")
            .await?;
        Ok(())
    }

    async fn execute_script(&self, script: &str) -> CoreResult<Value> {
        self.command(
            Method::POST,
            "execute/sync",
            Some(json!({ "script": script, "args": [] })),
            "ExecuteScript",
        )
        .await
    }

    async fn window_handles(&self) -> CoreResult<Vec<WindowHandle>> {
        let value = self
            .command(Method::GET, "window/handles", None, "GetWindowHandles")
            .await?;
        let handles = value
            .as_array()
            .ok_or_else(|| RecorderError::automation("GetWindowHandles did not return an array"))?
            .iter()
            .filter_map(Value::as_str)
            .map(WindowHandle::new)
            .collect();
        Ok(handles)
    }

    async fn switch_to_window(&self, handle: &WindowHandle) -> CoreResult<()> {
        self.command(
            Method::POST,
            "window",
            Some(json!({ "handle": handle.as_str() })),
            "SwitchToWindow",
        )
        .await?;
        Ok(())
    }

    async fn current_url(&self) -> CoreResult<String> {
        let value = self
            .command(Method::GET, "url", None, "GetCurrentUrl")
            .await?;
        string_value(value, "GetCurrentUrl")
    }

    async fn title(&self) -> CoreResult<String> {
        let value = self.command(Method::GET, "title", None, "GetTitle").await?;
        string_value(value, "GetTitle")
    }

    async fn quit(&self) -> CoreResult<()> {
        self.command(Method::DELETE, "", None, "DeleteSession")
            .await?;
        info!(session_id = %self.session_id, "WebDriver session closed");
        Ok(())
    }
}

/// Capability key carrying browser-specific launch options.
pub(crate) fn vendor_options_key(browser_name: &str) -> &'static str {
    match browser_name {
        "firefox" => "moz:firefoxOptions",
        "MicrosoftEdge" | "msedge" => "ms:edgeOptions",
        _ => "goog:chromeOptions",
    }
}

pub(crate) fn parse_base(endpoint: &str) -> CoreResult<Url> {
    // Url::join drops the last path segment unless it ends with '/'.
    let normalized = if endpoint.ends_with('/') {
        endpoint.to_string()
    } else {
        format!("{}/", endpoint)
    };
    Url::parse(&normalized)
        .map_err(|e| RecorderError::automation(format!("Invalid WebDriver endpoint {}: {}", endpoint, e)))
}

async fn send(request: reqwest::RequestBuilder, name: &str) -> CoreResult<Value> {
    let response = request
        .send()
        .await
        .map_err(|e| RecorderError::automation(format!("{} request failed: {}", name, e)))?;
    let status = response.status();

    let body: Value = response
        .json()
        .await
        .map_err(|e| RecorderError::automation(format!("{} returned unreadable body: {}", name, e)))?;
    let value = body.get("value").cloned().unwrap_or(Value::Null);

    if !status.is_success() {
        let error = value
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        let message = value.get("message").and_then(Value::as_str).unwrap_or("");
        return Err(RecorderError::automation(format!(
            "{} returned {}: {} {}",
            name, status, error, message
        )));
    }

    Ok(value)
}

fn string_value(value: Value, name: &str) -> CoreResult<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(RecorderError::automation(format!(
            "{} returned a non-string value: {}",
            name, other
        ))),
    }
}
