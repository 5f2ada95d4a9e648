//! Placeholder recognition.
//!
//! A placeholder is `{{ ` + name + ` }}` with exactly one space inside each
//! delimiter. Names are matched non-greedily, never span lines and never
//! contain `}}`, so `{{ A }} and {{ B }}` holds two placeholders and a
//! malformed `{{ x}}` is plain text that cannot swallow a later placeholder.
//! `{{A}}` and `{{ A}}` are plain text. Extra inner spaces belong to the
//! name: `{{  A }}` names ` A`.

use crate::model::{ParameterSet, CLOSE_DELIMITER, OPEN_DELIMITER};
use once_cell::sync::Lazy;
use regex::bytes::{Captures, Regex};

/// A name is any run of non-newline characters without `}}`: each `}` must
/// be followed by something else, except a single `}` right before the
/// closing delimiter.
const NAME_PATTERN: &str = r"((?:[^}\n]|\}[^}\n])*?\}?)";

pub(crate) static TOKEN: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        "{}{}{}",
        regex::escape(OPEN_DELIMITER),
        NAME_PATTERN,
        regex::escape(CLOSE_DELIMITER)
    );
    Regex::new(&pattern).expect("placeholder pattern is valid")
});

/// The name captured by a placeholder match.
///
/// Unicode mode restricts the name pattern to UTF-8 scalar values, so the
/// capture always decodes; `None` only for a match without a name group.
pub(crate) fn captured_name<'t>(caps: &Captures<'t>) -> Option<&'t str> {
    caps.get(1)
        .and_then(|m| std::str::from_utf8(m.as_bytes()).ok())
}

/// Unique parameter names referenced by `template`.
pub fn extract(template: &[u8]) -> ParameterSet {
    TOKEN
        .captures_iter(template)
        .filter_map(|caps| captured_name(&caps).map(str::to_string))
        .collect()
}

/// Number of placeholder spans in `template`, duplicates included.
pub fn occurrences(template: &[u8]) -> usize {
    TOKEN.find_iter(template).count()
}
