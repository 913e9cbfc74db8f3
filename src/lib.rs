//! # dayplan
//!
//! Self-hosted daily plan generator backed by an LLM.
//!
//! One operation: accept a task list, render a deterministic scheduling
//! prompt, forward it to an OpenAI-compatible completion API, and hand the
//! parsed reply back as `{ "plan": ... }` or a classified error.
//!
//! ## Request flow
//! 1. `api` resolves the caller identity and reads the raw payload
//! 2. `plan::request` normalizes the payload into a canonical request
//! 3. `plan::prompt` renders the instruction prompt
//! 4. `plan::resolver` performs the single completion call and parses the reply
//!
//! ## Modules
//! - `api`: HTTP surface, auth, and the error boundary
//! - `plan`: the normalize, prompt, resolve pipeline
//! - `llm`: chat-completions client
//! - `config`: environment configuration

pub mod api;
pub mod config;
pub mod llm;
pub mod plan;

pub use config::Config;
