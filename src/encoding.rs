//! Percent-encoding of URL query components.
//!
//! The Fusion endpoints accept query values escaped under the
//! `application/x-www-form-urlencoded` allow-list: ASCII alphanumerics plus
//! `*-._` pass through, every other byte becomes a `%XX` escape.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes escaped in query components: everything except alphanumerics and `*-._`.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Encode a string for safe embedding as a URL query value.
///
/// Allowed characters are passed through unchanged, so the operation is
/// idempotent on input already restricted to the allow-list. Non-ASCII
/// characters are escaped byte-by-byte in their UTF-8 form.
pub fn encode_query_component(raw: &str) -> Cow<'_, str> {
    utf8_percent_encode(raw, QUERY_ESCAPE).into()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn is_allowed(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '*' | '-' | '.' | '_')
    }

    #[test]
    fn allowed_characters_pass_through() {
        let allowed = "AZaz09*-._";
        assert_eq!(encode_query_component(allowed), allowed);
    }

    #[test]
    fn disallowed_characters_are_escaped() {
        assert_eq!(
            encode_query_component("university of toronto"),
            "university%20of%20toronto"
        );
        assert_eq!(encode_query_component("pizza"), "pizza");
        assert_eq!(encode_query_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_query_component("50% off!"), "50%25%20off%21");
    }

    #[test]
    fn non_ascii_input_is_escaped_per_utf8_byte() {
        assert_eq!(encode_query_component("café"), "caf%C3%A9");
    }

    proptest! {
        #[test]
        fn output_contains_only_allowed_characters_and_escapes(input in ".*") {
            let encoded = encode_query_component(&input).into_owned();
            let mut chars = encoded.chars();
            while let Some(c) = chars.next() {
                if c == '%' {
                    let hi = chars.next();
                    let lo = chars.next();
                    prop_assert!(hi.is_some_and(|h| h.is_ascii_hexdigit()));
                    prop_assert!(lo.is_some_and(|l| l.is_ascii_hexdigit()));
                } else {
                    prop_assert!(is_allowed(c), "unescaped character {c:?} in {encoded:?}");
                }
            }
        }

        #[test]
        fn idempotent_on_allow_list_input(input in "[A-Za-z0-9*\\-._]*") {
            let once = encode_query_component(&input).into_owned();
            prop_assert_eq!(&once, &input);
            let twice = encode_query_component(&once).into_owned();
            prop_assert_eq!(twice, once);
        }
    }
}
