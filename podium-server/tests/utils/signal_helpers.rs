use serde_json::{Value, json};

/// How long to wait for a frame that should arrive (ms).
pub const RECV_TIMEOUT_MS: u64 = 2000;

/// How long to watch for a frame that must not arrive (ms).
pub const SILENCE_MS: u64 = 200;

pub fn join_msg(room: &str) -> Value {
    json!({ "type": "join", "room": room })
}

pub fn offer_msg(sdp: &str) -> Value {
    json!({ "type": "offer", "sdp": { "type": "offer", "sdp": sdp } })
}

pub fn answer_msg(sdp: &str) -> Value {
    json!({ "type": "answer", "sdp": { "type": "answer", "sdp": sdp } })
}

pub fn ice_msg(candidate: &str) -> Value {
    json!({ "type": "ice", "candidate": { "candidate": candidate, "sdpMid": "0" } })
}

pub fn joined(room: &str) -> Value {
    json!({ "type": "joined", "room": room })
}

pub fn error(reason: &str) -> Value {
    json!({ "type": "error", "reason": reason })
}

pub fn control(kind: &str) -> Value {
    json!({ "type": kind })
}

/// Parses a received payload; anything that is not JSON comes back as a
/// JSON string so assertions can still compare it.
pub fn parse(raw: &[u8]) -> Value {
    serde_json::from_slice(raw)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(raw).into_owned()))
}
