//! Core types, traits, errors, config, and tracing for the Flipgate
//! guardrail & estimation engine.
//!
//! Flipgate gates capital-intensive rehab decisions behind quantitative
//! risk checks. This crate holds the domain records, the immutable
//! reference configuration, the error taxonomy, and the collaborator
//! traits the engine needs from its host (storage, job queue). The
//! decision logic itself lives in `flipgate-engine`.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;
