use axum::{extract::State, Json};
use serde::Serialize;

use crate::{relay::HealthReport, server::AppState};

#[derive(Debug, Serialize)]
pub struct HealthBody {
    status: &'static str,
    #[serde(flatten)]
    report: HealthReport,
}

pub async fn health(State(relay): State<AppState>) -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok",
        report: relay.health(),
    })
}
