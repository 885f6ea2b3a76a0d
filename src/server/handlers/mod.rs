mod health;
mod relay_on;
mod relay_off;
mod relay_blink;
mod relay_status;

pub(super) use health::health;
pub(super) use relay_blink::relay_blink;
pub(super) use relay_off::relay_off;
pub(super) use relay_on::relay_on;
pub(super) use relay_status::relay_status;

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// Shared body for the on/off endpoints
fn action_response(action: &str, success: bool, relay_pin: u8) -> (StatusCode, Json<Value>) {
    let (code, status) = if success {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "error")
    };

    (
        code,
        Json(json!({
            "status": status,
            "action": action,
            "relay_pin": relay_pin,
        })),
    )
}
