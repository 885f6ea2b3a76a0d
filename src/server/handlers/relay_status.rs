use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::{relay::RelayStatus, server::AppState};

#[derive(Debug, Serialize)]
pub struct StatusBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    gpio_available: Option<bool>,
    #[serde(flatten)]
    status: RelayStatus,
}

pub async fn relay_status(State(relay): State<AppState>) -> (StatusCode, Json<StatusBody>) {
    let status = relay.status().await;

    let code = if status.is_error() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    };

    (
        code,
        Json(StatusBody {
            gpio_available: status.gpio_available(),
            status,
        }),
    )
}
