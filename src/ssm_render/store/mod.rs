//! # Parameter Stores
//!
//! This module defines the lookup abstraction for ssm-render. The
//! [`ParameterStore`] trait is the only thing the run controller knows about
//! the remote side.
//!
//! ## Implementations
//!
//! - [`ssm::SsmStore`]: AWS Systems Manager Parameter Store
//!   - One `GetParameters` batch per run (split into the API's 10-name pages)
//!   - `SecureString` values are decrypted by the service
//!   - Region and credentials follow the AWS SDK default chains
//!
//! - [`memory::InMemoryStore`]: In-process store for testing
//!   - No network
//!   - Records every batch it receives so tests can check request shape
//!
//! ## Contract
//!
//! `resolve` is called once with the full name set. Names that do not
//! exist go into [`Resolution::invalid`]; callers must not infer missing
//! names from gaps in [`Resolution::found`] alone.

use crate::error::Result;
use crate::model::{ParameterSet, Resolution};

pub mod memory;
pub mod ssm;

/// Abstract interface for a key-value parameter store.
pub trait ParameterStore {
    /// Look up every name in a single batch.
    ///
    /// Transport, auth and configuration problems are returned as errors;
    /// unknown names are not errors and are reported in the resolution.
    fn resolve(&self, names: &ParameterSet) -> Result<Resolution>;
}
