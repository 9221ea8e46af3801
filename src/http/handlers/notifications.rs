use crate::domain::notification::{ErrorEnvelope, ErrorPayload, SendRequest, SendResponse};
use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

fn error_response(status: StatusCode, code: &str, message: &str, details: Option<String>) -> Response {
    (
        status,
        Json(ErrorEnvelope {
            error: ErrorPayload {
                code: code.to_string(),
                message: message.to_string(),
                details,
            },
        }),
    )
        .into_response()
}

/// An absent or blank body means "all defaults"; anything else must be a
/// well-formed JSON send request.
fn parse_send_request(headers: &HeaderMap, body: &Bytes) -> Result<SendRequest, Response> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SendRequest::default());
    }

    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|ct| ct.to_ascii_lowercase().contains("json"));
    if !is_json {
        return Err(error_response(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "UNSUPPORTED_MEDIA_TYPE",
            "send body must be application/json",
            None,
        ));
    }

    Json::<SendRequest>::from_bytes(body)
        .map(|Json(req)| req)
        .map_err(|rejection| {
            error_response(
                StatusCode::BAD_REQUEST,
                "INVALID_SEND_REQUEST",
                "send body is not a valid send request",
                Some(rejection.body_text()),
            )
        })
}

pub async fn send(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> impl IntoResponse {
    let req = match parse_send_request(&headers, &body) {
        Ok(req) => req,
        Err(resp) => return resp,
    };

    match state.notification_service.send(req).await {
        Ok(notification) => (
            StatusCode::OK,
            Json(SendResponse {
                ok: true,
                notification,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("send failed error={:#}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INBOX_WRITE_FAILED",
                "notification routed but could not be stored",
                Some(e.to_string()),
            )
        }
    }
}
