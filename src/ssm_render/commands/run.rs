//! # Run Controller
//!
//! Drives one render from file to file:
//!
//! ```text
//! Init ──read──▶ Extracted ──▶ Resolving ──▶ Resolved ──write──▶ Succeeded
//!   │                              │             │
//!   └──────────────────────────────┴─────────────┴──────────────▶ Failed
//! ```
//!
//! The store is asked exactly once per run. Output is only written after
//! every referenced name resolved, and it goes through a temporary file in
//! the destination directory so a failed run never leaves a half-written
//! file behind.

use super::extract::{extract, occurrences};
use super::reconcile::reconcile;
use super::substitute::substitute;
use super::{CmdMessage, RenderReport};
use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::model::RunState;
use crate::store::ParameterStore;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o644;

pub struct RunController<'a, S: ParameterStore> {
    store: &'a S,
    config: &'a RenderConfig,
    state: RunState,
}

impl<'a, S: ParameterStore> RunController<'a, S> {
    pub fn new(store: &'a S, config: &'a RenderConfig) -> Self {
        Self {
            store,
            config,
            state: RunState::Init,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn run(&mut self) -> Result<RenderReport> {
        match self.execute() {
            Ok(report) => Ok(report),
            Err(e) => {
                self.transition(RunState::Failed);
                Err(e)
            }
        }
    }

    fn transition(&mut self, next: RunState) {
        debug_assert!(!self.state.is_terminal(), "run already finished");
        debug!(from = %self.state, to = %next, "run state");
        self.state = next;
    }

    fn execute(&mut self) -> Result<RenderReport> {
        let config = self.config;
        let template_path = config.template_path();
        let template = fs::read(template_path).map_err(|source| RenderError::TemplateRead {
            path: template_path.to_path_buf(),
            source,
        })?;

        let parameters = extract(&template);
        let count = occurrences(&template);
        debug!(
            bytes = template.len(),
            parameters = parameters.len(),
            occurrences = count,
            "template scanned"
        );
        self.transition(RunState::Extracted);

        self.transition(RunState::Resolving);
        let resolution = self.store.resolve(&parameters)?;
        let values = reconcile(&parameters, resolution)?;
        self.transition(RunState::Resolved);

        let rendered = substitute(&template, &values);
        let output_path = config.output_path();
        write_output(output_path, &rendered).map_err(|source| RenderError::OutputWrite {
            path: output_path.to_path_buf(),
            source,
        })?;
        self.transition(RunState::Succeeded);

        let mut report = RenderReport::new(output_path.to_path_buf())
            .with_parameters(parameters, count);
        report.state = self.state;
        report.bytes_written = rendered.len();

        if report.parameters.is_empty() {
            report.add_message(CmdMessage::warning(format!(
                "No placeholders found in {}; output is an unchanged copy",
                template_path.display()
            )));
        }
        report.add_message(CmdMessage::success(format!(
            "Rendered {} placeholder(s) from {} parameter(s) into {}",
            report.occurrences,
            report.parameters.len(),
            output_path.display()
        )));

        Ok(report)
    }
}

fn write_output(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(OUTPUT_MODE))?;
    }

    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
