use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use crate::server::AppState;

use super::action_response;

pub async fn relay_off(State(relay): State<AppState>) -> (StatusCode, Json<Value>) {
    let success = relay.turn_off().await;
    action_response("off", success, relay.relay_pin())
}
