use crate::obs::protocol::{
    OP_IDENTIFY, OP_REQUEST, auth_from_hello, auth_response, identify_message, parse_response,
    request_message,
};

use serde_json::json;

const PASSWORD: &str = "supersecretpassword";
const SALT: &str = "lM1GncleQOaCu9lT1yeUZhFYnqhsLLP1G5lAGo3ixaI=";
const CHALLENGE: &str = "+IxH4CnCiqpX1rM9scsNynZzbOe4KhDeYcTNS3PDaeY=";
const EXPECTED_AUTH: &str = "1Ct943GAT+6YQUUX47Ia/ncufilbe6+oD6lY+5kaCu4=";

/// WHAT: Challenge response matches the obs-websocket reference vector
/// WHY: A wrong hash closes the connection at startup
#[test]
fn given_reference_challenge_when_computing_auth_then_matches_protocol_vector() {
    assert_eq!(auth_response(PASSWORD, SALT, CHALLENGE), EXPECTED_AUTH);
}

/// WHAT: Hello with authentication and a password yields an auth string
/// WHY: Identify must carry it when the server asks
#[test]
fn given_hello_with_challenge_when_password_set_then_auth_built() {
    // Given: A Hello requiring authentication
    let hello = json!({
        "op": 0,
        "d": {
            "obsWebSocketVersion": "5.5.0",
            "rpcVersion": 1,
            "authentication": { "challenge": CHALLENGE, "salt": SALT }
        }
    });

    // When/Then: With a password, auth is built; without, none
    assert_eq!(auth_from_hello(&hello, Some(PASSWORD)).as_deref(), Some(EXPECTED_AUTH));
    assert_eq!(auth_from_hello(&hello, None), None);
}

/// WHAT: Hello without authentication yields no auth string
/// WHY: Servers with auth disabled reject unexpected fields silently
#[test]
fn given_hello_without_challenge_when_building_auth_then_none() {
    let hello = json!({ "op": 0, "d": { "rpcVersion": 1 } });
    assert_eq!(auth_from_hello(&hello, Some(PASSWORD)), None);
}

/// WHAT: Identify carries rpc version, no event subscriptions, optional auth
/// WHY: The client only issues requests and never reads events
#[test]
fn given_auth_when_building_identify_then_fields_set() {
    let message = identify_message(Some("abc"));
    assert_eq!(message["op"], json!(OP_IDENTIFY));
    assert_eq!(message["d"]["rpcVersion"], json!(1));
    assert_eq!(message["d"]["eventSubscriptions"], json!(0));
    assert_eq!(message["d"]["authentication"], json!("abc"));

    let anonymous = identify_message(None);
    assert!(anonymous["d"].get("authentication").is_none());
}

/// WHAT: Requests are op 6 with type, id and data
/// WHY: Responses are matched back by requestId
#[test]
fn given_request_when_framing_then_op_six_envelope() {
    let message = request_message("StopRecord", "site-recorder-3", json!({}));
    assert_eq!(message["op"], json!(OP_REQUEST));
    assert_eq!(message["d"]["requestType"], json!("StopRecord"));
    assert_eq!(message["d"]["requestId"], json!("site-recorder-3"));
}

/// WHAT: Successful and failed responses are parsed with status details
/// WHY: A false result must become a control plane error
#[test]
#[allow(clippy::unwrap_used)]
fn given_responses_when_parsing_then_status_and_data_extracted() {
    // Given: A successful StopRecord response and a rejected StartRecord
    let ok = json!({
        "op": 7,
        "d": {
            "requestType": "StopRecord",
            "requestId": "site-recorder-1",
            "requestStatus": { "result": true, "code": 100 },
            "responseData": { "outputPath": "/tmp/out.mp4" }
        }
    });
    let rejected = json!({
        "op": 7,
        "d": {
            "requestType": "StartRecord",
            "requestId": "site-recorder-2",
            "requestStatus": { "result": false, "code": 500, "comment": "Output already active" }
        }
    });

    // When: Parsing both
    let ok = parse_response(&ok).unwrap();
    let rejected = parse_response(&rejected).unwrap();

    // Then: Status and payload are extracted
    assert!(ok.succeeded);
    assert_eq!(ok.request_id, "site-recorder-1");
    assert_eq!(ok.data["outputPath"], json!("/tmp/out.mp4"));
    assert!(!rejected.succeeded);
    assert_eq!(rejected.code, 500);
    assert_eq!(rejected.comment, "Output already active");
}
