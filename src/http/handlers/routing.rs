use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    pub intended_channel: Option<String>,
}

pub async fn routing_preview(
    State(state): State<AppState>,
    Path(event_type): Path<String>,
    Query(query): Query<PreviewQuery>,
) -> impl IntoResponse {
    let preview = state
        .notification_service
        .preview(&event_type, query.intended_channel.as_deref());
    (axum::http::StatusCode::OK, Json(preview)).into_response()
}
