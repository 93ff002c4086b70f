//! Advisor Core
//!
//! Core types shared by the advisor client and server.
//!
//! This crate contains:
//! - Domain types: Assistants API entities (Thread, Run, Message)
//! - DTOs: request bodies and query parameters sent to the Assistants API

pub mod domain;
pub mod dto;
