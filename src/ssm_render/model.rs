use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

pub const OPEN_DELIMITER: &str = "{{ ";
pub const CLOSE_DELIMITER: &str = " }}";

/// Unique parameter names referenced by a template.
///
/// Ordered so that batch requests and substitution are reproducible.
pub type ParameterSet = BTreeSet<String>;

/// The answer of a single batch lookup.
///
/// `found` may be incomplete; `invalid` is the store's explicit list of
/// names that do not exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub found: BTreeMap<String, String>,
    pub invalid: Vec<String>,
}

impl Resolution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.found.insert(name.into(), value.into());
        self
    }

    pub fn with_invalid(mut self, name: impl Into<String>) -> Self {
        self.invalid.push(name.into());
        self
    }

    /// Folds another partial response into this one.
    pub fn merge(&mut self, other: Resolution) {
        self.found.extend(other.found);
        self.invalid.extend(other.invalid);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Init,
    Extracted,
    Resolving,
    Resolved,
    Succeeded,
    Failed,
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Succeeded | RunState::Failed)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Init => "init",
            RunState::Extracted => "extracted",
            RunState::Resolving => "resolving",
            RunState::Resolved => "resolved",
            RunState::Succeeded => "succeeded",
            RunState::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_combines_found_and_invalid() {
        let mut first = Resolution::new().with_value("A", "1").with_invalid("X");
        let second = Resolution::new().with_value("B", "2").with_invalid("Y");
        first.merge(second);

        assert_eq!(first.found.len(), 2);
        assert_eq!(first.found["B"], "2");
        assert_eq!(first.invalid, vec!["X".to_string(), "Y".to_string()]);
    }

    #[test]
    fn test_terminal_states() {
        assert!(RunState::Succeeded.is_terminal());
        assert!(RunState::Failed.is_terminal());
        assert!(!RunState::Resolving.is_terminal());
        assert_eq!(RunState::Resolved.to_string(), "resolved");
    }
}
