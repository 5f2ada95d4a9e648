use super::extract::{captured_name, TOKEN};
use regex::bytes::Captures;
use std::collections::BTreeMap;

/// Replace each placeholder that has a value.
///
/// A single left-to-right pass over the template: inserted values are never
/// scanned again, so a value that itself looks like `{{ C }}` is written
/// out verbatim. Placeholders without a value, and all other bytes, are
/// copied unchanged.
pub fn substitute(template: &[u8], values: &BTreeMap<String, String>) -> Vec<u8> {
    TOKEN
        .replace_all(template, |caps: &Captures| {
            let value = captured_name(caps).and_then(|name| values.get(name));
            match value {
                Some(value) => value.as_bytes().to_vec(),
                None => caps[0].to_vec(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn render(template: &str, pairs: &[(&str, &str)]) -> String {
        String::from_utf8(substitute(template.as_bytes(), &values(pairs))).unwrap()
    }

    #[test]
    fn test_every_occurrence_replaced() {
        let out = render(
            "a={{ A }}\nb={{ B }}\nagain={{ A }}\n",
            &[("A", "x-val"), ("B", "y-val")],
        );
        assert_eq!(out, "a=x-val\nb=y-val\nagain=x-val\n");
    }

    #[test]
    fn test_value_is_not_expanded_again() {
        let out = render("{{ A }} {{ C }}", &[("A", "{{ C }}"), ("C", "see")]);
        assert_eq!(out, "{{ C }} see");
    }

    #[test]
    fn test_value_cannot_create_token_with_neighbour() {
        let out = render("{{ A }}B }}", &[("A", "{{ "), ("B", "nope")]);
        assert_eq!(out, "{{ B }}");
    }

    #[test]
    fn test_unknown_placeholder_left_alone() {
        let out = render("x={{ A }} y={{ Q }}", &[("A", "1")]);
        assert_eq!(out, "x=1 y={{ Q }}");
    }

    #[test]
    fn test_malformed_token_left_alone() {
        let out = render("a={{ x}} b={{ Y }}", &[("Y", "y-val")]);
        assert_eq!(out, "a={{ x}} b=y-val");
    }

    #[test]
    fn test_empty_value_and_empty_name() {
        assert_eq!(render("k={{ A }};", &[("A", "")]), "k=;");
        assert_eq!(render("k={{  }};", &[("", "blank")]), "k=blank;");
    }

    #[test]
    fn test_text_without_placeholders_unchanged() {
        let template = "{{A}} { { B } } plain\r\n";
        assert_eq!(render(template, &[("A", "1"), ("B", "2")]), template);
    }

    #[test]
    fn test_non_utf8_bytes_preserved() {
        let mut template = vec![0xc3, 0x28, b'='];
        template.extend_from_slice(b"{{ K }}");
        template.push(0xff);

        let out = substitute(&template, &values(&[("K", "v")]));
        assert_eq!(out, vec![0xc3, 0x28, b'=', b'v', 0xff]);
    }
}
