use crate::model::{ParameterSet, RunState};
use std::path::PathBuf;

pub mod extract;
pub mod reconcile;
pub mod render;
pub mod run;
pub mod substitute;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct RenderReport {
    pub state: RunState,
    pub parameters: ParameterSet,
    pub occurrences: usize,
    pub output_path: PathBuf,
    pub bytes_written: usize,
    pub messages: Vec<CmdMessage>,
}

impl RenderReport {
    pub fn new(output_path: PathBuf) -> Self {
        Self {
            state: RunState::Init,
            parameters: ParameterSet::new(),
            occurrences: 0,
            output_path,
            bytes_written: 0,
            messages: Vec::new(),
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_parameters(mut self, parameters: ParameterSet, occurrences: usize) -> Self {
        self.parameters = parameters;
        self.occurrences = occurrences;
        self
    }
}
