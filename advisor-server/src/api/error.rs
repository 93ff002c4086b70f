//! API Error Handling
//!
//! Unified error types and conversion for API responses. Every failure is
//! rendered as `{ "error": ..., "details": ... }`.

use advisor_client::ClientError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::service::{AssistantError, PollError};

/// API error type
#[derive(Debug)]
pub enum ApiError {
    /// A required server credential or identifier is missing
    Configuration(String),
    /// A required request field is missing or malformed
    Validation {
        error: &'static str,
        details: String,
    },
    MethodNotAllowed,
    NotFound(String),
    /// A direct call to the Assistants API failed
    RemoteService { status: StatusCode, details: String },
    /// No terminal run status within the polling budget
    PollingExhausted(String),
    /// The run settled in a status other than `completed`
    JobNotSuccessful(String),
    InternalError(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    details: &'a str,
}

impl ApiError {
    pub fn missing(field: &str) -> Self {
        ApiError::Validation {
            error: "Missing Parameter",
            details: format!("{} is required in the request body.", field),
        }
    }

    pub fn invalid_value(details: impl Into<String>) -> Self {
        ApiError::Validation {
            error: "Invalid Parameter Value",
            details: details.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Configuration(_) | ApiError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::RemoteService { status, .. } => *status,
            ApiError::PollingExhausted(_) | ApiError::JobNotSuccessful(_) => {
                StatusCode::GATEWAY_TIMEOUT
            }
        }
    }

    fn parts(&self) -> (&str, &str) {
        match self {
            ApiError::Configuration(details) => ("Server Configuration Error", details.as_str()),
            ApiError::Validation { error, details } => (*error, details.as_str()),
            ApiError::MethodNotAllowed => {
                ("Method Not Allowed", "Only POST requests are accepted.")
            }
            ApiError::NotFound(details) => ("Not Found", details.as_str()),
            ApiError::RemoteService { details, .. } => ("OpenAI Service Error", details.as_str()),
            ApiError::PollingExhausted(details) | ApiError::JobNotSuccessful(details) => {
                ("AI Processing Timeout/Error", details.as_str())
            }
            ApiError::InternalError(details) => ("Internal Server Error", details.as_str()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error, details) = self.parts();

        if status.is_server_error() {
            tracing::error!("{}: {}", error, details);
        } else {
            tracing::warn!("{}: {}", error, details);
        }

        (status, Json(ErrorBody { error, details })).into_response()
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        let status = match &err {
            ClientError::ApiError { status, .. }
                if err.is_client_error() || err.is_server_error() =>
            {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ClientError::ApiError { .. } | ClientError::ParseError(_) => StatusCode::BAD_GATEWAY,
            ClientError::RequestFailed(_) => StatusCode::SERVICE_UNAVAILABLE,
            ClientError::InvalidRequest(details) => return ApiError::invalid_value(details.clone()),
        };

        ApiError::RemoteService {
            status,
            details: err.details(),
        }
    }
}

impl From<PollError> for ApiError {
    fn from(err: PollError) -> Self {
        match err {
            PollError::Exhausted { .. } => ApiError::PollingExhausted(err.to_string()),
            PollError::InvalidHandle { .. } => ApiError::RemoteService {
                status: StatusCode::BAD_GATEWAY,
                details: err.to_string(),
            },
            PollError::NotSuccessful { .. } => ApiError::JobNotSuccessful(err.to_string()),
        }
    }
}

impl From<AssistantError> for ApiError {
    fn from(err: AssistantError) -> Self {
        match err {
            AssistantError::Client(err) => err.into(),
            AssistantError::Poll(err) => err.into(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_core::domain::run::RunStatus;

    #[test]
    fn test_taxonomy_statuses() {
        assert_eq!(
            ApiError::Configuration("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::missing("threadId").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::PollingExhausted("x".into()).status(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            ApiError::JobNotSuccessful("x".into()).status(),
            StatusCode::GATEWAY_TIMEOUT
        );
    }

    #[test]
    fn test_remote_status_is_preserved() {
        let err: ApiError = ClientError::api_error(401, "Auth error").into();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.parts(), ("OpenAI Service Error", "Auth error"));

        let err: ApiError = ClientError::api_error(503, "overloaded").into();
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_unusable_remote_status_falls_back() {
        let err: ApiError = ClientError::api_error(302, "moved").into();
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);

        let err: ApiError = ClientError::ParseError("bad json".into()).into();
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_poll_errors_map_to_gateway_timeout() {
        let err: ApiError = PollError::NotSuccessful {
            run_id: "run_1".into(),
            status: RunStatus::Failed,
            details: "server_error: boom".into(),
        }
        .into();

        assert!(matches!(&err, ApiError::JobNotSuccessful(d) if d.contains("Status: failed")));
        assert_eq!(err.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_invalid_run_handle_is_bad_gateway() {
        let err: ApiError = PollError::InvalidHandle {
            thread_id: "thread_1".into(),
            run_id: String::new(),
            reason: "run id must not be empty".into(),
        }
        .into();

        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.parts().0, "OpenAI Service Error");
    }

    #[test]
    fn test_local_id_rejection_is_bad_request() {
        let err: ApiError = ClientError::InvalidRequest("thread id contains invalid characters".into()).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.parts().0, "Invalid Parameter Value");
    }

    #[test]
    fn test_missing_field_details() {
        let err = ApiError::missing("threadId");
        assert_eq!(
            err.parts(),
            ("Missing Parameter", "threadId is required in the request body.")
        );
    }
}
