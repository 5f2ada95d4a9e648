//! # ssm-render Architecture
//!
//! ssm-render fills `{{ <name> }}` placeholders in a text template with values
//! from AWS Systems Manager Parameter Store and writes the result to a file.
//! It is meant to run as one step of a CI/CD pipeline: it either writes a
//! fully rendered file or fails with a recognizable marker and exit code 1.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses flags, captures the environment, sets up logging  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - extract → reconcile → substitute, and the run controller │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (store/)                                       │
//! │  - ParameterStore trait                                     │
//! │  - SsmStore (production), InMemoryStore (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## All-or-nothing
//!
//! Every placeholder name is looked up in one batch. If the store reports
//! any name as missing, or leaves one out of its answer, the run fails and
//! the output file is not touched. Substitution is a single pass, so values
//! are inserted literally and never expanded again.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Extraction, reconciliation, substitution and the run controller
//! - [`store`]: Parameter store abstraction and implementations
//! - [`model`]: Core types (`ParameterSet`, `Resolution`, `RunState`)
//! - [`config`]: Run configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
