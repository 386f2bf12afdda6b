//! Input decoding and sanitisation helpers.
//!
//! Query strings are decoded with `application/x-www-form-urlencoded` rules
//! (`+` is a space, `%XX` escapes are UTF-8 bytes), exactly once.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static CONTROL_CHARS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Cc}").expect("control character pattern is valid"));

/// Decode `query` and return the value of `key`.
///
/// When a key is repeated the last occurrence wins. Malformed escapes are
/// kept literally and invalid UTF-8 is replaced, so this never fails.
///
/// # Examples
///
/// ```
/// use item_version_common::validation::query_param;
///
/// assert_eq!(query_param("item_name=My%20Widget", "item_name").as_deref(), Some("My Widget"));
/// assert_eq!(query_param("item_name=a+b&item_name=c", "item_name").as_deref(), Some("c"));
/// assert_eq!(query_param("other=1", "item_name"), None);
/// ```
pub fn query_param(query: &str, key: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .filter(|(k, _)| k == key)
        .last()
        .map(|(_, v)| v.into_owned())
}

/// Remove ASCII and Unicode control characters.
///
/// ```
/// use item_version_common::validation::strip_control_chars;
///
/// assert_eq!(strip_control_chars("My\u{0}Widget\n"), "MyWidget");
/// ```
pub fn strip_control_chars(input: &str) -> Cow<'_, str> {
    CONTROL_CHARS_REGEX.replace_all(input, "")
}

/// Escape the characters that are significant inside HTML text and attributes.
///
/// ```
/// use item_version_common::validation::escape_html;
///
/// assert_eq!(escape_html("Tom & \"Jerry\""), "Tom &amp; &quot;Jerry&quot;");
/// assert_eq!(escape_html("My Widget"), "My Widget");
/// ```
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_query_param_decoding() {
        assert_eq!(
            query_param("item_name=Ghost%20Plugin", "item_name").as_deref(),
            Some("Ghost Plugin")
        );
        assert_eq!(
            query_param("item_name=Caf%C3%A9+Pro", "item_name").as_deref(),
            Some("Café Pro")
        );
        assert_eq!(query_param("item_name=", "item_name").as_deref(), Some(""));
        assert_eq!(query_param("item_name", "item_name").as_deref(), Some(""));
        assert_eq!(query_param("", "item_name"), None);
    }

    #[test]
    fn test_query_param_decodes_once() {
        // %2520 is an encoded "%20"; a single pass must leave "%20" behind
        assert_eq!(
            query_param("item_name=100%2520Off", "item_name").as_deref(),
            Some("100%20Off")
        );
    }

    #[test]
    fn test_query_param_malformed_escape() {
        assert_eq!(query_param("item_name=50%", "item_name").as_deref(), Some("50%"));
        assert_eq!(query_param("item_name=%ZZ", "item_name").as_deref(), Some("%ZZ"));
    }

    #[test]
    fn test_strip_control_chars() {
        assert_eq!(strip_control_chars("My Widget"), "My Widget");
        assert_eq!(strip_control_chars("\tMy\u{7f} Widget\r\n"), "My Widget");
        assert!(matches!(strip_control_chars("clean"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>x</b>"), "&lt;b&gt;x&lt;/b&gt;");
        assert_eq!(escape_html("it's"), "it&#039;s");
        assert!(matches!(escape_html("plain"), Cow::Borrowed(_)));
    }

    proptest! {
        #[test]
        fn prop_encoded_name_round_trips(name in any::<String>()) {
            let encoded: String = url::form_urlencoded::byte_serialize(name.as_bytes()).collect();
            let query = format!("item_name={}", encoded);
            prop_assert_eq!(query_param(&query, "item_name"), Some(name));
        }
    }
}
