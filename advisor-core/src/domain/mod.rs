//! Core domain types
//!
//! These types mirror the entities exposed by the OpenAI Assistants API.
//! They are observed by the server, never mutated locally: the remote
//! service owns every state transition.

pub mod message;
pub mod run;
pub mod thread;
