//! OBS Studio control over obs-websocket v5.

use crate::{
    CaptureSource, CoreResult, NewCaptureSource, RecorderError, RecordingControl,
    obs::protocol::{
        OP_HELLO, OP_IDENTIFIED, OP_REQUEST_RESPONSE, auth_from_hello, identify_message,
        op_code, parse_response, request_message,
    },
};

use std::{
    panic::Location,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering},
};

use async_trait::async_trait;
use error_location::ErrorLocation;
use futures_util::{SinkExt, StreamExt};
use serde_json::{Value, json};
use tokio::{net::TcpStream, sync::Mutex};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite::protocol::Message,
};
use tracing::{debug, info, instrument, warn};

/// Input kinds that capture a single on-screen window.
pub(crate) const CAPTURE_INPUT_KINDS: &[&str] =
    &["window_capture", "xcomposite_input", "game_capture"];

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Where and how to reach obs-websocket.
#[derive(Debug, Clone)]
pub struct ObsConnectOptions {
    /// Host running OBS.
    pub host: String,
    /// obs-websocket port (4455 by default).
    pub port: u16,
    /// Shared secret, if authentication is enabled in OBS.
    pub password: Option<String>,
}

impl ObsConnectOptions {
    /// `ws://host:port`.
    pub fn endpoint(&self) -> String {
        format!("ws://{}:{}", self.host, self.port)
    }
}

/// An identified obs-websocket session.
///
/// Requests are serialized on the socket: each call writes its request and
/// reads until the matching response arrives, skipping anything else.
pub struct ObsClient {
    socket: Mutex<Socket>,
    request_counter: AtomicU64,
}

impl ObsClient {
    /// Connect and complete the Hello/Identify handshake.
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError::StartupConnect`] if the socket cannot be
    /// opened or the server rejects identification.
    #[instrument(skip(options), fields(endpoint = %options.endpoint()))]
    pub async fn connect(options: &ObsConnectOptions) -> CoreResult<Self> {
        let endpoint = options.endpoint();

        let (mut socket, _) =
            connect_async(endpoint.as_str())
                .await
                .map_err(|e| RecorderError::StartupConnect {
                    endpoint: endpoint.clone(),
                    reason: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        identify(&mut socket, options.password.as_deref())
            .await
            .map_err(|e| RecorderError::StartupConnect {
                endpoint: endpoint.clone(),
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(endpoint = %endpoint, "Connected to OBS WebSocket");

        Ok(Self {
            socket: Mutex::new(socket),
            request_counter: AtomicU64::new(0),
        })
    }

    /// Send one request and wait for its response data.
    #[instrument(skip(self, request_data))]
    pub async fn call(&self, request_type: &str, request_data: Value) -> CoreResult<Value> {
        let counter = self.request_counter.fetch_add(1, Ordering::Relaxed) + 1;
        let request_id = format!("site-recorder-{}", counter);
        let payload = request_message(request_type, &request_id, request_data);

        let mut socket = self.socket.lock().await;
        debug!(request_id = %request_id, "[obs] -> {}", payload);
        socket
            .send(Message::Text(payload.to_string().into()))
            .await
            .map_err(|e| RecorderError::control_plane(request_type, e.to_string()))?;

        loop {
            let Some(message) = read_json(&mut socket, request_type).await? else {
                continue;
            };
            if op_code(&message) != OP_REQUEST_RESPONSE {
                continue;
            }
            let Some(response) = parse_response(&message) else {
                continue;
            };
            if response.request_id != request_id {
                continue;
            }
            if !response.succeeded {
                return Err(RecorderError::control_plane(
                    request_type,
                    format!("code {}: {}", response.code, response.comment),
                ));
            }
            return Ok(response.data);
        }
    }

    async fn window_descriptor(&self, input_name: &str) -> CoreResult<String> {
        let data = self
            .call("GetInputSettings", json!({ "inputName": input_name }))
            .await?;
        Ok(data
            .pointer("/inputSettings/window")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string())
    }
}

#[async_trait]
impl RecordingControl for ObsClient {
    async fn list_capturable_sources(&self) -> CoreResult<Vec<CaptureSource>> {
        let data = self.call("GetInputList", json!({})).await?;
        let inputs = data
            .get("inputs")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let mut sources = Vec::new();
        for input in inputs {
            let kind = input.get("inputKind").and_then(Value::as_str).unwrap_or("");
            if !CAPTURE_INPUT_KINDS.contains(&kind) {
                continue;
            }
            let name = input
                .get("inputName")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string();

            // GetInputList normally omits settings, so fetch them per input.
            let inline = input
                .pointer("/inputSettings/window")
                .and_then(Value::as_str)
                .map(str::to_string);
            let window_descriptor = match inline {
                Some(window) => window,
                None => match self.window_descriptor(&name).await {
                    Ok(window) => window,
                    Err(e) => {
                        // Inputs can vanish between listing and reading.
                        warn!(input = %name, error = %e, "Skipping input with unreadable settings");
                        continue;
                    }
                },
            };

            sources.push(CaptureSource {
                name,
                kind: kind.to_string(),
                window_descriptor,
            });
        }

        let windows: Vec<&str> = sources
            .iter()
            .map(|s| s.window_descriptor.as_str())
            .collect();
        info!(windows = ?windows, "Available OBS windows");

        Ok(sources)
    }

    async fn create_capture_source(&self, source: &NewCaptureSource) -> CoreResult<String> {
        let data = self
            .call(
                "CreateInput",
                json!({
                    "sceneName": source.scene_name,
                    "inputName": source.source_name,
                    "inputKind": source.kind,
                    "inputSettings": {
                        "window": source.window_descriptor,
                        "match_priority": source.match_priority,
                    },
                    "sceneItemEnabled": true,
                }),
            )
            .await?;

        let id = match (
            data.get("inputUuid").and_then(Value::as_str),
            data.get("sceneItemId").and_then(Value::as_i64),
        ) {
            (Some(uuid), _) => uuid.to_string(),
            (None, Some(item)) => item.to_string(),
            (None, None) => source.source_name.clone(),
        };

        info!(source_name = %source.source_name, source_id = %id, "Capture source created");

        Ok(id)
    }

    async fn start_recording(&self) -> CoreResult<()> {
        self.call("StartRecord", json!({})).await?;
        info!("Recording started");
        Ok(())
    }

    async fn stop_recording(&self) -> CoreResult<PathBuf> {
        let data = self.call("StopRecord", json!({})).await?;
        let output_path = data
            .get("outputPath")
            .and_then(Value::as_str)
            .ok_or_else(|| RecorderError::control_plane("StopRecord", "response has no outputPath"))?;

        info!(output_path = %output_path, "Recording stopped");

        Ok(PathBuf::from(output_path))
    }

    async fn disconnect(&self) -> CoreResult<()> {
        let mut socket = self.socket.lock().await;
        socket
            .close(None)
            .await
            .map_err(|e| RecorderError::control_plane("Close", e.to_string()))?;
        info!("Disconnected from OBS WebSocket");
        Ok(())
    }
}

/// Hello (op 0) -> Identify (op 1) -> Identified (op 2).
async fn identify(socket: &mut Socket, password: Option<&str>) -> CoreResult<()> {
    loop {
        let Some(message) = read_json(socket, "Identify").await? else {
            continue;
        };
        match op_code(&message) {
            OP_HELLO => {
                let auth = auth_from_hello(&message, password);
                socket
                    .send(Message::Text(identify_message(auth.as_deref()).to_string().into()))
                    .await
                    .map_err(|e| RecorderError::control_plane("Identify", e.to_string()))?;
            }
            OP_IDENTIFIED => return Ok(()),
            _ => {}
        }
    }
}

async fn read_json(socket: &mut Socket, request_type: &str) -> CoreResult<Option<Value>> {
    let message = socket
        .next()
        .await
        .ok_or_else(|| RecorderError::control_plane(request_type, "connection closed"))?
        .map_err(|e| RecorderError::control_plane(request_type, e.to_string()))?;

    let parsed = match message {
        Message::Text(text) => {
            debug!("[obs] <- {}", text.as_str());
            serde_json::from_str(text.as_str())
        }
        Message::Binary(bytes) => serde_json::from_slice(&bytes),
        Message::Close(frame) => {
            return Err(RecorderError::control_plane(
                request_type,
                format!("connection closed by server: {:?}", frame),
            ));
        }
        _ => return Ok(None),
    };

    parsed
        .map(Some)
        .map_err(|e| RecorderError::control_plane(request_type, format!("invalid JSON: {}", e)))
}
