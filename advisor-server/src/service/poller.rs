//! Run poller
//!
//! Waits for an assistant run to reach a terminal status by re-fetching it
//! at a fixed interval. Each call owns its attempt counter; nothing is shared
//! between requests.

use std::sync::Arc;

use advisor_client::{AssistantsApi, ClientError, validate_id};
use advisor_core::domain::run::{Run, RunStatus};
use thiserror::Error;
use tokio::time::{self, Duration};
use tracing::{debug, info, warn};

/// Polling cadence and budget for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl PollSettings {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }
}

/// Why a run could not be awaited to success
#[derive(Debug, Error)]
pub enum PollError {
    /// The budget ran out before a terminal status was seen
    #[error("Gave up on run {run_id} after {attempts} attempt(s): {reason}")]
    Exhausted {
        run_id: String,
        attempts: u32,
        last_status: Option<RunStatus>,
        reason: String,
    },

    /// The thread or run id cannot be used in a request
    #[error("Cannot poll run {run_id:?} on thread {thread_id:?}: {reason}")]
    InvalidHandle {
        thread_id: String,
        run_id: String,
        reason: String,
    },

    /// The run stopped in a status other than `completed`
    #[error("Run {run_id} did not complete successfully. Status: {status}, Details: {details}")]
    NotSuccessful {
        run_id: String,
        status: RunStatus,
        details: String,
    },
}

/// Polls a single run until it settles
pub struct RunPoller {
    api: Arc<dyn AssistantsApi>,
    settings: PollSettings,
}

impl RunPoller {
    pub fn new(api: Arc<dyn AssistantsApi>, settings: PollSettings) -> Self {
        Self { api, settings }
    }

    /// Waits for `(thread_id, run_id)` to reach a terminal status
    ///
    /// Every attempt sleeps for the interval before fetching. A failed fetch
    /// still consumes an attempt; on the last attempt it ends polling with
    /// [`PollError::Exhausted`]. The first terminal status stops the loop.
    /// An unusable handle fails with [`PollError::InvalidHandle`] before any
    /// fetch.
    pub async fn wait(&self, thread_id: &str, run_id: &str) -> Result<Run, PollError> {
        let (thread_id, run_id) = check_handle(thread_id, run_id)?;
        let max_attempts = self.settings.max_attempts;
        let mut attempts = 0;
        let mut last_seen: Option<Run> = None;

        info!(
            "Polling run {} (interval: {:?}, max attempts: {})",
            run_id, self.settings.interval, max_attempts
        );

        while attempts < max_attempts {
            time::sleep(self.settings.interval).await;

            match self.api.retrieve_run(thread_id, run_id).await {
                Ok(run) => {
                    debug!(
                        "Run {} status: {}, attempt: {}",
                        run_id,
                        run.status,
                        attempts + 1
                    );
                    let terminal = run.status.is_terminal();
                    last_seen = Some(run);
                    if terminal {
                        break;
                    }
                }
                Err(e) => {
                    warn!(
                        "Polling attempt {} failed for run {}: {}",
                        attempts + 1,
                        run_id,
                        e
                    );
                    if attempts + 1 >= max_attempts {
                        return Err(PollError::Exhausted {
                            run_id: run_id.to_string(),
                            attempts: max_attempts,
                            last_status: last_seen.map(|run| run.status),
                            reason: format!("Last error: {}", e),
                        });
                    }
                }
            }

            attempts += 1;
        }

        settle(run_id, attempts, last_seen)
    }
}

fn check_handle<'a>(thread_id: &'a str, run_id: &'a str) -> Result<(&'a str, &'a str), PollError> {
    let invalid = |err: ClientError| PollError::InvalidHandle {
        thread_id: thread_id.to_string(),
        run_id: run_id.to_string(),
        reason: err.details(),
    };

    let thread = validate_id("thread", thread_id).map_err(&invalid)?;
    let run = validate_id("run", run_id).map_err(&invalid)?;
    Ok((thread, run))
}

/// Classifies the last observed run once polling stops
fn settle(run_id: &str, attempts: u32, last_seen: Option<Run>) -> Result<Run, PollError> {
    let Some(run) = last_seen else {
        return Err(PollError::Exhausted {
            run_id: run_id.to_string(),
            attempts,
            last_status: None,
            reason: "no run status was retrieved".to_string(),
        });
    };

    if run.status.is_success() {
        return Ok(run);
    }

    // Still queued or working: the budget ran out, not the run.
    if run.status.is_pending() {
        return Err(PollError::Exhausted {
            run_id: run_id.to_string(),
            attempts,
            reason: format!("run is still {}", run.status),
            last_status: Some(run.status),
        });
    }

    warn!("Run {} did not complete successfully: {}", run_id, run.status);
    Err(PollError::NotSuccessful {
        run_id: run_id.to_string(),
        details: run.failure_details(),
        status: run.status,
    })
}
