//! Service Module
//!
//! Business logic between the HTTP handlers and the Assistants API:
//! run polling, the shared ask flow, prompt templates and report extraction.

pub mod assistant;
pub mod poller;
pub mod prompts;
pub mod report;

#[cfg(test)]
pub mod fake;

pub use assistant::{AskRequest, AssistantError, AssistantService, ThreadTarget};
pub use poller::{PollError, PollSettings};
