use super::extract::extract;
use super::reconcile::reconcile;
use super::substitute::substitute;
use crate::error::Result;
use crate::store::ParameterStore;

/// Render a template held in memory: one batch lookup, then substitution.
///
/// Fails without producing anything if any referenced name is unresolved.
pub fn run<S: ParameterStore>(store: &S, template: &[u8]) -> Result<Vec<u8>> {
    let parameters = extract(template);
    let resolution = store.resolve(&parameters)?;
    let values = reconcile(&parameters, resolution)?;
    Ok(substitute(template, &values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_round_trip() {
        let store = StoreFixture::new()
            .with_parameter("A", "x-val")
            .with_parameter("B", "y-val")
            .build();

        let out = run(&store, b"first {{ A }}, second {{ B }}, first {{ A }}").unwrap();
        assert_eq!(out, b"first x-val, second y-val, first x-val".to_vec());
        assert_eq!(store.requests(), vec![vec!["A".to_string(), "B".to_string()]]);
    }

    #[test]
    fn test_missing_name_yields_nothing() {
        let store = StoreFixture::new().with_parameter("A", "x").build();

        let err = run(&store, b"{{ A }} {{ B }}").unwrap_err();
        assert!(matches!(err, RenderError::InvalidParameters(ref m) if m == &vec!["B".to_string()]));
    }

    #[test]
    fn test_malformed_token_is_not_looked_up() {
        let store = StoreFixture::new().with_parameter("Y", "y-val").build();

        let out = run(&store, b"a={{ x}} b={{ Y }}").unwrap();
        assert_eq!(out, b"a={{ x}} b=y-val".to_vec());
        assert_eq!(store.requests(), vec![vec!["Y".to_string()]]);
    }

    #[test]
    fn test_template_without_tokens() {
        let store = StoreFixture::new().build();

        let out = run(&store, b"static: true\n").unwrap();
        assert_eq!(out, b"static: true\n".to_vec());
        assert_eq!(store.requests().len(), 1);
        assert!(store.requests()[0].is_empty());
    }
}
