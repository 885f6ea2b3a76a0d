use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use crate::server::AppState;

use super::action_response;

pub async fn relay_on(State(relay): State<AppState>) -> (StatusCode, Json<Value>) {
    let success = relay.turn_on().await;
    action_response("on", success, relay.relay_pin())
}
