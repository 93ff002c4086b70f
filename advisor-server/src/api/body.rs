//! Request body extraction
//!
//! Bodies are read as a loose JSON object so that a missing or mistyped
//! field turns into a `Missing Parameter` error naming that field, instead
//! of a generic deserialization failure.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::{Map, Value};

use crate::api::error::ApiError;

/// JSON object body of a POST request
#[derive(Debug, Default)]
pub struct JsonBody(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| invalid_body(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody::default());
        }

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => Ok(JsonBody(map)),
            Ok(_) => Err(invalid_body("Request body must be a JSON object.".to_string())),
            Err(e) => Err(invalid_body(format!("Request body is not valid JSON: {}", e))),
        }
    }
}

impl JsonBody {
    /// A non-empty string field
    pub fn required_str(&self, field: &str) -> Result<&str, ApiError> {
        match self.0.get(field) {
            Some(Value::String(value)) if !value.trim().is_empty() => Ok(value),
            _ => Err(ApiError::missing(field)),
        }
    }

    /// A non-empty string or a number, rendered as text
    pub fn required_text(&self, field: &str) -> Result<String, ApiError> {
        match self.0.get(field) {
            Some(Value::Number(n)) => Ok(n.to_string()),
            _ => self.required_str(field).map(str::to_string),
        }
    }
}

fn invalid_body(details: String) -> ApiError {
    ApiError::Validation {
        error: "Invalid Request Body",
        details,
    }
}
