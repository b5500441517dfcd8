/// Centralized helpers for HTTP error responses.
///
/// Every error body has the same shape: `{"error":{"code","message","context"}}`.
use actix::MailboxError;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpRequest, HttpResponse, http::StatusCode};
use log::{error, warn};
use serde_json::json;

/// Returns an HTTP error response with a JSON body.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "MALFORMED_REQUEST").
/// - `message`: Human-readable error message.
/// - `context`: Optional context string (e.g. the request path).
/// - `status`: HTTP status code.
pub fn http_error_response(
    code: &str,
    message: &str,
    context: Option<&str>,
    status: StatusCode,
) -> HttpResponse {
    let body = json!({
        "error": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(""),
        }
    });
    HttpResponse::build(status).json(body)
}

/// Error handler for `web::Json` extraction: bad JSON, wrong content type or
/// missing fields all become a 400 before the game is touched.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let message = err.to_string();
    warn!("[Http] Malformed request on {}: {}", req.path(), message);
    let response = http_error_response(
        "MALFORMED_REQUEST",
        &message,
        Some(req.path()),
        StatusCode::BAD_REQUEST,
    );
    InternalError::from_response(err, response).into()
}

/// The game session actor did not answer.
pub fn mailbox_error_response(err: MailboxError) -> HttpResponse {
    error!("[Http] Game session unavailable: {}", err);
    http_error_response(
        "SESSION_UNAVAILABLE",
        &err.to_string(),
        None,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
}
