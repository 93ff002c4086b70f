//! Run endpoints

use crate::error::Result;
use crate::{AssistantsClient, validate_id};
use advisor_core::domain::run::Run;
use advisor_core::dto::CreateRun;
use reqwest::Method;

impl AssistantsClient {
    /// Start a run of an assistant against a thread
    ///
    /// # Arguments
    /// * `thread_id` - The thread holding the conversation
    /// * `assistant_id` - The assistant to execute
    /// * `instructions` - Optional per-run instructions overriding the assistant's
    pub async fn create_run(
        &self,
        thread_id: &str,
        assistant_id: &str,
        instructions: Option<&str>,
    ) -> Result<Run> {
        let thread_id = validate_id("thread", thread_id)?;
        let assistant_id = validate_id("assistant", assistant_id)?;
        let path = format!("/threads/{}/runs", thread_id);
        let response = self
            .request(Method::POST, &path)
            .json(&CreateRun {
                assistant_id: assistant_id.to_string(),
                instructions: instructions.map(str::to_string),
            })
            .send()
            .await?;

        let run: Run = self.handle_response(response).await?;
        tracing::debug!(thread_id, run_id = %run.id, status = %run.status, "Run created");

        Ok(run)
    }

    /// Fetch the current state of a run
    ///
    /// # Arguments
    /// * `thread_id` - The thread the run belongs to
    /// * `run_id` - The run to inspect
    pub async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<Run> {
        let thread_id = validate_id("thread", thread_id)?;
        let run_id = validate_id("run", run_id)?;
        let path = format!("/threads/{}/runs/{}", thread_id, run_id);
        let response = self.request(Method::GET, &path).send().await?;

        self.handle_response(response).await
    }
}
