//! Response envelopes and client-facing errors.
//!
//! # Responsibilities
//! - Render every failure as `{success: false, error: {code, message, description}, timestamp}`
//! - Provide the `{success: true, data, message?, timestamp}` success envelope
//! - Map each error to its business code and HTTP status
//!
//! # Design Decisions
//! - Business codes are strings on the wire ("495", "453", ...)
//! - Only message lookup answers 404; every other validation failure is 400
//! - Timestamps are local time without zone

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use thiserror::Error;

/// Current local time, as stamped on every envelope.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Errors returned to API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required headers: {}", .0.join(", "))]
    MissingHeaders(Vec<&'static str>),

    #[error("Customer id is null")]
    CustomerIdMissing,

    #[error("Account number is null")]
    AccountNumberMissing,

    #[error("Mobile phone number is null")]
    PhoneNumberMissing,

    #[error("Password is required")]
    PasswordMissing,

    #[error("Invalid party name")]
    PartyNameInvalid,

    #[error("Invalid party account IBAN")]
    PartyIbanInvalid,

    #[error("Message not found")]
    MessageNotFound,

    /// Malformed body, path or query that the framework could not parse.
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    /// Business error code.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::MissingHeaders(_) => "495",
            ApiError::CustomerIdMissing => "453",
            ApiError::AccountNumberMissing => "456",
            ApiError::PhoneNumberMissing => "454",
            ApiError::PasswordMissing => "470",
            ApiError::PartyNameInvalid => "473",
            ApiError::PartyIbanInvalid => "474",
            ApiError::MessageNotFound => "477",
            ApiError::BadRequest(_) => "400",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MessageNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!(
            error = %self,
            error_code = %self.code(),
            status = %status.as_u16(),
            "Client error occurred"
        );

        (status, Json(ErrorResponse::new(self.code(), self.to_string()))).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error envelope body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetail,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub description: String,
}

impl ErrorResponse {
    /// Error whose description repeats the message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            success: false,
            error: ErrorDetail {
                code: code.into(),
                description: message.clone(),
                message,
            },
            timestamp: now(),
        }
    }
}

/// Success envelope used by the `/api` surface.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: NaiveDateTime,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
            timestamp: now(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_missing_headers_message() {
        let err = ApiError::MissingHeaders(vec!["lang", "sessionId"]);
        assert_eq!(err.to_string(), "Missing required headers: lang, sessionId");
        assert_eq!(err.code(), "495");
    }

    #[test]
    fn test_only_message_lookup_is_not_found() {
        assert_eq!(ApiError::MessageNotFound.status_code(), StatusCode::NOT_FOUND);
        for err in [
            ApiError::CustomerIdMissing,
            ApiError::AccountNumberMissing,
            ApiError::PasswordMissing,
            ApiError::BadRequest("x".into()),
        ] {
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_error_envelope() {
        let response = ApiError::AccountNumberMissing.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(
            body["error"],
            json!({
                "code": "456",
                "message": "Account number is null",
                "description": "Account number is null",
            })
        );
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_success_envelope_skips_empty_message() {
        let body = body_json(ApiResponse::ok(json!({"a": 1})).into_response()).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["a"], 1);
        assert!(body.get("message").is_none());

        let body = body_json(ApiResponse::ok(()).with_message("done").into_response()).await;
        assert_eq!(body["message"], "done");
    }

    #[test]
    fn test_description_mirrors_message() {
        let err = ErrorResponse::new("477", "Message not found");
        assert_eq!(err.error.code, "477");
        assert_eq!(err.error.description, "Message not found");
        assert!(!err.success);
    }
}
