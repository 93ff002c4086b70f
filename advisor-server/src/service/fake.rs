//! Scripted in-memory Assistants API for tests

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use advisor_client::{AssistantsApi, ClientError, Result};
use advisor_core::domain::message::{
    ContentBlock, Message, MessageList, MessageRole, TextContent,
};
use advisor_core::domain::run::{Run, RunError, RunStatus};
use advisor_core::domain::thread::Thread;
use advisor_core::dto::SortOrder;
use async_trait::async_trait;

pub const NEW_THREAD_ID: &str = "thread_new";
pub const RUN_ID: &str = "run_1";

/// One scripted answer to `retrieve_run`
#[derive(Debug, Clone)]
pub enum Step {
    Status(RunStatus),
    Failed { code: String, message: String },
    Incomplete(serde_json::Value),
    Error(u16, String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatedRun {
    pub thread_id: String,
    pub assistant_id: String,
    pub instructions: Option<String>,
}

#[derive(Default)]
pub struct ScriptedApi {
    steps: Mutex<VecDeque<Step>>,
    repeat: Option<RunStatus>,
    messages: Mutex<MessageList>,
    fail_create_message: Option<(u16, String)>,
    threads_created: AtomicUsize,
    retrieve_calls: AtomicUsize,
    posted: Mutex<Vec<(String, String)>>,
    runs: Mutex<Vec<CreatedRun>>,
    listed: Mutex<Vec<(String, SortOrder)>>,
}

impl ScriptedApi {
    /// Answers `retrieve_run` with `steps` in order, then with errors
    pub fn with_steps(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            ..Default::default()
        }
    }

    /// Answers every `retrieve_run` with `status`
    pub fn repeating(status: RunStatus) -> Self {
        Self {
            repeat: Some(status),
            ..Default::default()
        }
    }

    /// Thread contents returned by `list_messages`, newest first
    pub fn with_messages(self, messages: Vec<Message>) -> Self {
        *self.messages.lock().unwrap() = MessageList { data: messages };
        self
    }

    /// Makes `create_message` fail with an API error
    pub fn failing_create_message(mut self, status: u16, message: &str) -> Self {
        self.fail_create_message = Some((status, message.to_string()));
        self
    }

    pub fn retrieve_calls(&self) -> usize {
        self.retrieve_calls.load(Ordering::SeqCst)
    }

    pub fn threads_created(&self) -> usize {
        self.threads_created.load(Ordering::SeqCst)
    }

    pub fn posted(&self) -> Vec<(String, String)> {
        self.posted.lock().unwrap().clone()
    }

    pub fn runs(&self) -> Vec<CreatedRun> {
        self.runs.lock().unwrap().clone()
    }

    pub fn listed(&self) -> Vec<(String, SortOrder)> {
        self.listed.lock().unwrap().clone()
    }
}

pub fn text_message(role: MessageRole, value: &str) -> Message {
    Message {
        id: None,
        role,
        content: vec![ContentBlock::Text {
            text: TextContent {
                value: value.to_string(),
            },
        }],
    }
}

fn run(thread_id: &str, status: RunStatus) -> Run {
    Run {
        id: RUN_ID.to_string(),
        thread_id: thread_id.to_string(),
        status,
        last_error: None,
        incomplete_details: None,
    }
}

#[async_trait]
impl AssistantsApi for ScriptedApi {
    async fn create_thread(&self) -> Result<Thread> {
        self.threads_created.fetch_add(1, Ordering::SeqCst);
        Ok(Thread {
            id: NEW_THREAD_ID.to_string(),
        })
    }

    async fn create_message(&self, thread_id: &str, content: &str) -> Result<Message> {
        if let Some((status, message)) = &self.fail_create_message {
            return Err(ClientError::api_error(*status, message.clone()));
        }
        self.posted
            .lock()
            .unwrap()
            .push((thread_id.to_string(), content.to_string()));
        Ok(text_message(MessageRole::User, content))
    }

    async fn create_run(
        &self,
        thread_id: &str,
        assistant_id: &str,
        instructions: Option<&str>,
    ) -> Result<Run> {
        self.runs.lock().unwrap().push(CreatedRun {
            thread_id: thread_id.to_string(),
            assistant_id: assistant_id.to_string(),
            instructions: instructions.map(str::to_string),
        });
        Ok(run(thread_id, RunStatus::Queued))
    }

    async fn retrieve_run(&self, thread_id: &str, _run_id: &str) -> Result<Run> {
        self.retrieve_calls.fetch_add(1, Ordering::SeqCst);

        let step = self.steps.lock().unwrap().pop_front();
        match step {
            Some(Step::Status(status)) => Ok(run(thread_id, status)),
            Some(Step::Failed { code, message }) => {
                let mut failed = run(thread_id, RunStatus::Failed);
                failed.last_error = Some(RunError { code, message });
                Ok(failed)
            }
            Some(Step::Incomplete(details)) => {
                let mut incomplete = run(thread_id, RunStatus::Incomplete);
                incomplete.incomplete_details = Some(details);
                Ok(incomplete)
            }
            Some(Step::Error(status, message)) => Err(ClientError::api_error(status, message)),
            None => match &self.repeat {
                Some(status) => Ok(run(thread_id, status.clone())),
                None => Err(ClientError::api_error(500, "script exhausted")),
            },
        }
    }

    async fn list_messages(&self, thread_id: &str, order: SortOrder) -> Result<MessageList> {
        self.listed
            .lock()
            .unwrap()
            .push((thread_id.to_string(), order));
        Ok(self.messages.lock().unwrap().clone())
    }
}
