//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for UI clients.
//!
//! ## Generic Over ParameterStore
//!
//! `RenderApi<S: ParameterStore>` is generic over the lookup backend:
//! - Production: `RenderApi<SsmStore>`
//! - Testing: `RenderApi<InMemoryStore>`
//!
//! The facade never prints and never exits; it returns `Result` values and
//! leaves presentation to the caller.

use crate::commands;
use crate::commands::run::RunController;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::model::ParameterSet;
use crate::store::ParameterStore;

pub struct RenderApi<S: ParameterStore> {
    store: S,
    config: RenderConfig,
}

impl<S: ParameterStore> RenderApi<S> {
    pub fn new(store: S, config: RenderConfig) -> Self {
        Self { store, config }
    }

    /// Render the configured template file into the configured output file.
    pub fn run(&self) -> Result<commands::RenderReport> {
        RunController::new(&self.store, &self.config).run()
    }

    /// Render a template held in memory.
    pub fn render(&self, template: &[u8]) -> Result<Vec<u8>> {
        commands::render::run(&self.store, template)
    }

    /// Names referenced by `template`, without contacting the store.
    pub fn parameters(&self, template: &[u8]) -> ParameterSet {
        commands::extract::extract(template)
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, MessageLevel, RenderReport};
