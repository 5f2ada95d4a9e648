use super::ParameterStore;
use crate::error::{RenderError, Result};
use crate::model::{ParameterSet, Resolution};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Parameter store held entirely in memory.
///
/// Behaves like SSM: unknown names are listed as invalid. It can also be
/// told to fail every lookup, or to drop values from its answers, to
/// exercise the controller's failure paths.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    values: BTreeMap<String, String>,
    failure: Option<String>,
    withheld: Vec<String>,
    requests: RefCell<Vec<Vec<String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Make every lookup fail with `message`.
    pub fn fail_with(&mut self, message: impl Into<String>) {
        self.failure = Some(message.into());
    }

    /// Leave `name` out of both `found` and `invalid`, like a truncated response.
    pub fn withhold(&mut self, name: impl Into<String>) {
        self.withheld.push(name.into());
    }

    /// Every batch received so far, in call order.
    pub fn requests(&self) -> Vec<Vec<String>> {
        self.requests.borrow().clone()
    }
}

impl ParameterStore for InMemoryStore {
    fn resolve(&self, names: &ParameterSet) -> Result<Resolution> {
        self.requests
            .borrow_mut()
            .push(names.iter().cloned().collect());

        if let Some(message) = &self.failure {
            return Err(RenderError::Lookup(message.clone()));
        }

        let mut resolution = Resolution::new();
        for name in names {
            if self.withheld.contains(name) {
                continue;
            }
            match self.values.get(name) {
                Some(value) => {
                    resolution.found.insert(name.clone(), value.clone());
                }
                None => resolution.invalid.push(name.clone()),
            }
        }
        Ok(resolution)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_parameter(mut self, name: &str, value: &str) -> Self {
            self.store.insert(name, value);
            self
        }

        /// Adds `count` parameters named `/app/PARAM_n` with value `value-n`.
        pub fn with_parameters(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store
                    .insert(format!("/app/PARAM_{}", i + 1), format!("value-{}", i + 1));
            }
            self
        }

        pub fn failing(mut self, message: &str) -> Self {
            self.store.fail_with(message);
            self
        }

        pub fn withholding(mut self, name: &str) -> Self {
            self.store.withhold(name);
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
