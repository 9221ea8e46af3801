use crate::domain::notification::{ErrorEnvelope, ErrorPayload, MessageRef};
use crate::AppState;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

fn store_error(e: anyhow::Error) -> Response {
    tracing::error!("inbox store error={:#}", e);
    (
        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorEnvelope {
            error: ErrorPayload {
                code: "STORE_ERROR".to_string(),
                message: "inbox store unavailable".to_string(),
                details: Some(e.to_string()),
            },
        }),
    )
        .into_response()
}

pub async fn list_inbox(State(state): State<AppState>) -> impl IntoResponse {
    match state.inbox_repo.list_inbox().await {
        Ok(inbox) => (
            axum::http::StatusCode::OK,
            Json(serde_json::json!({"ok": true, "inbox": inbox})),
        )
            .into_response(),
        Err(e) => store_error(e),
    }
}

pub async fn list_trash(State(state): State<AppState>) -> impl IntoResponse {
    match state.inbox_repo.list_trash().await {
        Ok(trash) => (
            axum::http::StatusCode::OK,
            Json(serde_json::json!({"ok": true, "trash": trash})),
        )
            .into_response(),
        Err(e) => store_error(e),
    }
}

pub async fn clear_inbox(State(state): State<AppState>) -> impl IntoResponse {
    match state.inbox_repo.clear_inbox().await {
        Ok(moved) => {
            tracing::info!("inbox cleared moved={}", moved);
            (
                axum::http::StatusCode::OK,
                Json(serde_json::json!({
                    "ok": true,
                    "message": "Inbox cleared (moved to trash)",
                    "moved": moved
                })),
            )
                .into_response()
        }
        Err(e) => store_error(e),
    }
}

pub async fn empty_trash(State(state): State<AppState>) -> impl IntoResponse {
    match state.inbox_repo.empty_trash().await {
        Ok(removed) => (
            axum::http::StatusCode::OK,
            Json(serde_json::json!({"ok": true, "removed": removed})),
        )
            .into_response(),
        Err(e) => store_error(e),
    }
}

pub async fn delete_message(
    State(state): State<AppState>,
    Json(msg): Json<MessageRef>,
) -> impl IntoResponse {
    let outcome = match msg.parsed_id() {
        Some(id) => state.inbox_repo.delete(id).await,
        None => Ok(false),
    };
    match outcome {
        Ok(deleted) => (
            axum::http::StatusCode::OK,
            Json(serde_json::json!({"ok": true, "deleted": deleted})),
        )
            .into_response(),
        Err(e) => store_error(e),
    }
}

pub async fn restore_message(
    State(state): State<AppState>,
    Json(msg): Json<MessageRef>,
) -> impl IntoResponse {
    let outcome = match msg.parsed_id() {
        Some(id) => state.inbox_repo.restore(id).await,
        None => Ok(false),
    };
    match outcome {
        Ok(restored) => (
            axum::http::StatusCode::OK,
            Json(serde_json::json!({"ok": true, "restored": restored})),
        )
            .into_response(),
        Err(e) => store_error(e),
    }
}
