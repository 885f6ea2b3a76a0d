use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};

use crate::{log_debug, server::AppState};

/// `duration_ms` from a JSON body wins over the query string. Malformed input
/// of any kind falls through to the default duration.
pub async fn relay_blink(
    State(relay): State<AppState>,
    query: Option<Query<HashMap<String, String>>>,
    body: Bytes,
) -> Json<Value> {
    let from_body = if body.is_empty() {
        None
    } else {
        serde_json::from_slice::<Value>(&body)
            .ok()
            .and_then(|v| v.get("duration_ms").cloned())
            .filter(|v| !v.is_null())
    };

    let raw = from_body.or_else(|| {
        query.and_then(|Query(params)| params.get("duration_ms").map(|s| Value::String(s.clone())))
    });

    log_debug!("Blink request with duration_ms={:?}", raw);

    let duration_ms = relay.blink_from_input(raw.as_ref()).await;

    Json(json!({
        "status": "ok",
        "action": "blink",
        "duration_ms": duration_ms,
        "relay_pin": relay.relay_pin(),
    }))
}
