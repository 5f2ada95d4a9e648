//! # CLI Layer
//!
//! The only place in the codebase that:
//! - Parses arguments and reads the process environment
//! - Installs the tracing subscriber
//! - Writes to stdout/stderr
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions and version string
//! - `commands.rs`: `run()`, config assembly and API dispatch
//! - `print.rs`: `SUCCESS:`/`FAILURE:` marker lines and report messages
//! - `logging.rs`: tracing subscriber setup

pub mod commands;
pub mod logging;
pub mod print;
pub mod setup;

pub use commands::run;
