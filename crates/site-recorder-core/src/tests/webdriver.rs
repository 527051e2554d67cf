use crate::{BrowserDriver, RecorderError, WebDriverClient, WebDriverOptions, WindowHandle};

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

const SESSION: &str = "abc123";

/// (method, path, JSON body) of every command the stub received.
type CommandLog = Arc<Mutex<Vec<(String, String, Value)>>>;

type Responder = fn(&Method, &str) -> (StatusCode, Value);

#[derive(Clone)]
struct StubDriver {
    log: CommandLog,
    respond: Responder,
}

#[allow(clippy::unwrap_used)]
async fn handle(
    State(stub): State<StubDriver>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    stub.log
        .lock()
        .unwrap()
        .push((method.to_string(), uri.path().to_string(), body));

    let (status, value) = (stub.respond)(&method, uri.path());
    (status, Json(json!({ "value": value })))
}

/// A chromedriver that knows two windows and refuses window switches.
fn chromedriver(method: &Method, path: &str) -> (StatusCode, Value) {
    match (method.as_str(), path) {
        ("POST", "/session") | ("POST", "/wd/hub/session") => (
            StatusCode::OK,
            json!({ "sessionId": SESSION, "capabilities": { "browserName": "chrome" } }),
        ),
        ("GET", "/session/abc123/window/handles") => {
            (StatusCode::OK, json!(["CDwindow-1", "CDwindow-2"]))
        }
        ("GET", "/session/abc123/url") => (StatusCode::OK, json!("https://example.com/")),
        ("GET", "/session/abc123/title") => (StatusCode::OK, json!("Example Domain")),
        ("POST", "/session/abc123/window") => (
            StatusCode::NOT_FOUND,
            json!({
                "error": "no such window",
                "message": "no such window: target window already closed",
                "stacktrace": ""
            }),
        ),
        ("DELETE", "/session/abc123") => (StatusCode::OK, Value::Null),
        _ => (
            StatusCode::NOT_FOUND,
            json!({ "error": "unknown command", "message": path }),
        ),
    }
}

/// A driver whose browser binary cannot start.
fn refusing_driver(_: &Method, _: &str) -> (StatusCode, Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({
            "error": "session not created",
            "message": "session not created: Chrome failed to start: exited normally."
        }),
    )
}

#[allow(clippy::unwrap_used)]
async fn spawn_driver(respond: Responder) -> (String, CommandLog) {
    let log: CommandLog = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new().fallback(handle).with_state(StubDriver {
        log: Arc::clone(&log),
        respond,
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), log)
}

fn options(endpoint: &str) -> WebDriverOptions {
    WebDriverOptions {
        endpoint: endpoint.to_string(),
        browser_name: "chrome".to_string(),
        args: vec![
            "--no-sandbox".to_string(),
            "--disable-dev-shm-usage".to_string(),
        ],
    }
}

/// WHAT: Starting a session sends W3C capabilities with Chrome launch args
/// WHY: The browser must start with the configured arguments
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_chromedriver_when_starting_then_capabilities_sent_and_session_kept() {
    // Given: A running driver
    let (endpoint, log) = spawn_driver(chromedriver).await;

    // When: Starting a session
    let client = WebDriverClient::start(&options(&endpoint)).await.unwrap();

    // Then: The session id is kept and capabilities carry browser name and args
    assert_eq!(client.session_id(), SESSION);
    let (method, path, body) = log.lock().unwrap()[0].clone();
    assert_eq!((method.as_str(), path.as_str()), ("POST", "/session"));
    let always_match = &body["capabilities"]["alwaysMatch"];
    assert_eq!(always_match["browserName"], "chrome");
    assert_eq!(
        always_match["goog:chromeOptions"]["args"],
        json!(["--no-sandbox", "--disable-dev-shm-usage"])
    );
}

/// WHAT: An endpoint with a path prefix keeps the prefix
/// WHY: Selenium-style hubs serve under /wd/hub
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_hub_endpoint_when_starting_then_session_created_under_prefix() {
    let (endpoint, log) = spawn_driver(chromedriver).await;

    WebDriverClient::start(&options(&format!("{}/wd/hub", endpoint)))
        .await
        .unwrap();

    assert_eq!(log.lock().unwrap()[0].1, "/wd/hub/session");
}

/// WHAT: Handles, URL and title are read from the session's endpoints
/// WHY: Window matching relies on these reads
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_session_when_reading_windows_then_values_unwrapped() {
    // Given: An open session
    let (endpoint, _) = spawn_driver(chromedriver).await;
    let client = WebDriverClient::start(&options(&endpoint)).await.unwrap();

    // When: Reading handles, URL and title
    let handles = client.window_handles().await.unwrap();
    let url = client.current_url().await.unwrap();
    let title = client.title().await.unwrap();

    // Then: The `value` payloads are returned in driver order
    assert_eq!(
        handles,
        vec![WindowHandle::new("CDwindow-1"), WindowHandle::new("CDwindow-2")]
    );
    assert_eq!(url, "https://example.com/");
    assert_eq!(title, "Example Domain");
}

/// WHAT: A non-2xx reply becomes an automation error with the W3C error text
/// WHY: The driver's message is the only clue about what went wrong
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_closed_window_when_switching_then_automation_error_with_driver_message() {
    // Given: A driver that refuses window switches
    let (endpoint, log) = spawn_driver(chromedriver).await;
    let client = WebDriverClient::start(&options(&endpoint)).await.unwrap();

    // When: Switching windows
    let result = client.switch_to_window(&WindowHandle::new("CDwindow-9")).await;

    // Then: Automation error naming the status and error code; handle was sent
    assert!(matches!(
        result,
        Err(RecorderError::Automation { ref reason, .. })
            if reason.contains("404") && reason.contains("no such window")
    ));
    let (_, path, body) = log.lock().unwrap()[1].clone();
    assert_eq!(path, "/session/abc123/window");
    assert_eq!(body, json!({ "handle": "CDwindow-9" }));
}

/// WHAT: A refused session is an automation error
/// WHY: Startup must fail when the browser cannot launch
#[tokio::test]
async fn given_refusing_driver_when_starting_then_automation_error() {
    let (endpoint, _) = spawn_driver(refusing_driver).await;

    let result = WebDriverClient::start(&options(&endpoint)).await;

    assert!(matches!(
        result,
        Err(RecorderError::Automation { ref reason, .. }) if reason.contains("session not created")
    ));
}

/// WHAT: Quitting deletes the session
/// WHY: Otherwise the browser outlives the service
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_session_when_quitting_then_delete_sent() {
    let (endpoint, log) = spawn_driver(chromedriver).await;
    let client = WebDriverClient::start(&options(&endpoint)).await.unwrap();

    client.quit().await.unwrap();

    let (method, path, _) = log.lock().unwrap().last().cloned().unwrap();
    assert_eq!((method.as_str(), path.as_str()), ("DELETE", "/session/abc123"));
}
