//! obs-websocket v5 message framing.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as Base64Engine;
use serde_json::{Value, json};
use sha2::{Digest, Sha256};

pub(crate) const OP_HELLO: i64 = 0;
pub(crate) const OP_IDENTIFY: i64 = 1;
pub(crate) const OP_IDENTIFIED: i64 = 2;
pub(crate) const OP_REQUEST: i64 = 6;
pub(crate) const OP_REQUEST_RESPONSE: i64 = 7;

pub(crate) const RPC_VERSION: i64 = 1;

/// No event categories: the client only issues requests.
pub(crate) const EVENT_SUBSCRIPTIONS_NONE: i64 = 0;

/// Reply to a request (op 7), reduced to what the client inspects.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RequestResponse {
    pub request_id: String,
    pub succeeded: bool,
    pub code: i64,
    pub comment: String,
    pub data: Value,
}

pub(crate) fn op_code(message: &Value) -> i64 {
    message.get("op").and_then(Value::as_i64).unwrap_or(-1)
}

/// Compute the authentication string for a Hello challenge.
///
/// `base64(sha256(base64(sha256(password + salt)) + challenge))`
pub(crate) fn auth_response(password: &str, salt: &str, challenge: &str) -> String {
    let mut sha = Sha256::new();
    sha.update(format!("{password}{salt}").as_bytes());
    let secret = Base64Engine.encode(sha.finalize_reset());
    sha.update(format!("{secret}{challenge}").as_bytes());
    Base64Engine.encode(sha.finalize())
}

/// Authentication string for `hello`, or `None` when the server did not ask
/// for one or no password is configured.
pub(crate) fn auth_from_hello(hello: &Value, password: Option<&str>) -> Option<String> {
    let auth = hello
        .get("d")
        .and_then(|d| d.get("authentication"))
        .and_then(Value::as_object)?;
    let password = password?;
    let challenge = auth.get("challenge").and_then(Value::as_str).unwrap_or("");
    let salt = auth.get("salt").and_then(Value::as_str).unwrap_or("");
    if challenge.is_empty() || salt.is_empty() {
        return None;
    }
    Some(auth_response(password, salt, challenge))
}

pub(crate) fn identify_message(auth: Option<&str>) -> Value {
    let mut payload = json!({
        "op": OP_IDENTIFY,
        "d": {
            "rpcVersion": RPC_VERSION,
            "eventSubscriptions": EVENT_SUBSCRIPTIONS_NONE,
        }
    });
    if let Some(auth) = auth {
        payload["d"]["authentication"] = Value::String(auth.to_string());
    }
    payload
}

pub(crate) fn request_message(request_type: &str, request_id: &str, request_data: Value) -> Value {
    json!({
        "op": OP_REQUEST,
        "d": {
            "requestType": request_type,
            "requestId": request_id,
            "requestData": request_data,
        }
    })
}

/// Parse the `d` payload of an op 7 message.
pub(crate) fn parse_response(message: &Value) -> Option<RequestResponse> {
    let data = message.get("d")?;
    let request_id = data.get("requestId").and_then(Value::as_str)?.to_string();
    let status = data.get("requestStatus");
    let succeeded = status
        .and_then(|s| s.get("result"))
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let code = status
        .and_then(|s| s.get("code"))
        .and_then(Value::as_i64)
        .unwrap_or(0);
    let comment = status
        .and_then(|s| s.get("comment"))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    let data = data.get("responseData").cloned().unwrap_or(json!({}));

    Some(RequestResponse {
        request_id,
        succeeded,
        code,
        comment,
        data,
    })
}
