//! Run domain types

use serde::{Deserialize, Serialize};
use std::fmt;

/// One asynchronous execution of an assistant against a thread
///
/// Identified by `(thread_id, id)`. Only the remote service mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub thread_id: String,
    pub status: RunStatus,
    #[serde(default)]
    pub last_error: Option<RunError>,
    #[serde(default)]
    pub incomplete_details: Option<serde_json::Value>,
}

impl Run {
    /// Human readable failure detail for a run that did not complete
    ///
    /// Prefers `last_error`, then the serialized `incomplete_details`,
    /// then an empty JSON object.
    pub fn failure_details(&self) -> String {
        if let Some(err) = &self.last_error {
            return format!("{}: {}", err.code, err.message);
        }

        match &self.incomplete_details {
            Some(details) if !details.is_null() => details.to_string(),
            _ => "{}".to_string(),
        }
    }
}

/// Error reported by the remote service on a failed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// Run status as reported by the remote service
///
/// Unknown values are kept verbatim in [`RunStatus::Other`] so newer API
/// versions do not break deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RunStatus {
    Queued,
    InProgress,
    RequiresAction,
    Cancelling,
    Completed,
    Failed,
    Cancelled,
    Expired,
    Incomplete,
    Other(String),
}

impl RunStatus {
    /// Whether polling should stop on this status
    ///
    /// `requires_action` is terminal here: tool calls are never submitted,
    /// so the run would otherwise sit there until it expires.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunStatus::Completed
                | RunStatus::Failed
                | RunStatus::Cancelled
                | RunStatus::Expired
                | RunStatus::RequiresAction
        )
    }

    /// Whether this is the single success status
    pub fn is_success(&self) -> bool {
        matches!(self, RunStatus::Completed)
    }

    /// Whether the run is simply waiting for, or doing, its work
    ///
    /// Only `queued` and `in_progress` count. A run left in any other
    /// non-terminal status (`cancelling`, `incomplete`, unknown values) when
    /// polling stops is reported as unsuccessful, not as a timeout.
    pub fn is_pending(&self) -> bool {
        matches!(self, RunStatus::Queued | RunStatus::InProgress)
    }

    pub fn as_str(&self) -> &str {
        match self {
            RunStatus::Queued => "queued",
            RunStatus::InProgress => "in_progress",
            RunStatus::RequiresAction => "requires_action",
            RunStatus::Cancelling => "cancelling",
            RunStatus::Completed => "completed",
            RunStatus::Failed => "failed",
            RunStatus::Cancelled => "cancelled",
            RunStatus::Expired => "expired",
            RunStatus::Incomplete => "incomplete",
            RunStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for RunStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "queued" => RunStatus::Queued,
            "in_progress" => RunStatus::InProgress,
            "requires_action" => RunStatus::RequiresAction,
            "cancelling" => RunStatus::Cancelling,
            "completed" => RunStatus::Completed,
            "failed" => RunStatus::Failed,
            "cancelled" => RunStatus::Cancelled,
            "expired" => RunStatus::Expired,
            "incomplete" => RunStatus::Incomplete,
            _ => RunStatus::Other(raw),
        }
    }
}

impl From<RunStatus> for String {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
