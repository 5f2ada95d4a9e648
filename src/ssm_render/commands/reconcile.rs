use crate::error::{RenderError, Result};
use crate::model::{ParameterSet, Resolution};
use std::collections::{BTreeMap, BTreeSet};

/// Apply the all-or-nothing policy to a store response.
///
/// Returns a value for every requested name, or fails:
/// - names the store explicitly reported invalid → `InvalidParameters`
/// - names missing from the response without being reported → `Lookup`
///
/// Values the store sent for names nobody asked for are dropped.
pub fn reconcile(
    requested: &ParameterSet,
    resolution: Resolution,
) -> Result<BTreeMap<String, String>> {
    let Resolution { mut found, invalid } = resolution;

    if !invalid.is_empty() {
        let invalid: BTreeSet<String> = invalid.into_iter().collect();
        return Err(RenderError::InvalidParameters(invalid.into_iter().collect()));
    }

    let missing: Vec<&str> = requested
        .iter()
        .filter(|name| !found.contains_key(*name))
        .map(String::as_str)
        .collect();
    if !missing.is_empty() {
        return Err(RenderError::Lookup(format!(
            "response omitted {} requested parameter(s): {}",
            missing.len(),
            missing.join(", ")
        )));
    }

    found.retain(|name, _| requested.contains(name));
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> ParameterSet {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_complete_response() {
        let resolution = Resolution::new().with_value("A", "x").with_value("B", "y");

        let values = reconcile(&names(&["A", "B"]), resolution).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values["A"], "x");
        assert_eq!(values["B"], "y");
    }

    #[test]
    fn test_invalid_names_fail_the_run() {
        let resolution = Resolution::new().with_value("A", "x").with_invalid("B");

        let err = reconcile(&names(&["A", "B"]), resolution).unwrap_err();
        match err {
            RenderError::InvalidParameters(missing) => assert_eq!(missing, vec!["B"]),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_names_sorted_and_unique() {
        let resolution = Resolution::new()
            .with_invalid("/z")
            .with_invalid("/a")
            .with_invalid("/z");

        let err = reconcile(&names(&["/a", "/z"]), resolution).unwrap_err();
        assert!(
            matches!(err, RenderError::InvalidParameters(ref m) if m == &vec!["/a".to_string(), "/z".to_string()])
        );
    }

    #[test]
    fn test_unreported_gap_is_a_lookup_failure() {
        let resolution = Resolution::new().with_value("A", "x");

        let err = reconcile(&names(&["A", "B"]), resolution).unwrap_err();
        match err {
            RenderError::Lookup(message) => assert!(message.contains("B")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unrequested_values_dropped() {
        let resolution = Resolution::new().with_value("A", "x").with_value("EXTRA", "z");

        let values = reconcile(&names(&["A"]), resolution).unwrap();
        assert_eq!(values.keys().collect::<Vec<_>>(), vec!["A"]);
    }

    #[test]
    fn test_nothing_requested() {
        let values = reconcile(&ParameterSet::new(), Resolution::new()).unwrap();
        assert!(values.is_empty());
    }
}
