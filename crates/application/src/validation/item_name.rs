//! Item name sanitisation.
//!
//! The value reaching this module has already been URL-decoded once by the
//! transport. Sanitising strips control characters; the lookup key keeps every
//! other character so that catalog titles containing `&` or quotes still
//! match, while the display form is HTML-escaped for embedding in messages.

use item_version_common::validation::{escape_html, strip_control_chars};
use std::fmt;

/// A non-blank, sanitised product name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    /// Sanitise a raw parameter value.
    ///
    /// Returns `None` when the value is absent, empty, or blank once control
    /// characters are removed.
    ///
    /// ```
    /// use item_version_application::validation::ItemName;
    ///
    /// assert_eq!(ItemName::parse(Some("My Widget")).unwrap().as_str(), "My Widget");
    /// assert!(ItemName::parse(Some("  \t ")).is_none());
    /// assert!(ItemName::parse(None).is_none());
    /// ```
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let cleaned = strip_control_chars(raw?);
        if cleaned.trim().is_empty() {
            return None;
        }
        Some(Self(cleaned.into_owned()))
    }

    /// Key passed to the catalog title search
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// HTML-safe rendering for response messages
    pub fn display(&self) -> String {
        escape_html(&self.0).into_owned()
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Message returned with a found version
pub fn success_message(name: &ItemName, version: &str) -> String {
    format!(
        "The current version for {} is {}.",
        name.display(),
        escape_html(version)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_rejected() {
        assert!(ItemName::parse(Some("")).is_none());
        assert!(ItemName::parse(Some("   ")).is_none());
        assert!(ItemName::parse(Some("\u{0}\n")).is_none());
    }

    #[test]
    fn test_lookup_key_keeps_inner_whitespace() {
        let name = ItemName::parse(Some(" My Widget ")).unwrap();
        assert_eq!(name.as_str(), " My Widget ");
    }

    #[test]
    fn test_control_chars_removed() {
        let name = ItemName::parse(Some("My\u{1b}[31m Widget")).unwrap();
        assert_eq!(name.as_str(), "My[31m Widget");
    }

    #[test]
    fn test_display_escapes_markup() {
        let name = ItemName::parse(Some("<script>alert('x')</script>")).unwrap();
        assert_eq!(
            name.display(),
            "&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"
        );
        assert_eq!(name.as_str(), "<script>alert('x')</script>");
    }

    #[test]
    fn test_success_message() {
        let name = ItemName::parse(Some("My Widget")).unwrap();
        assert_eq!(
            success_message(&name, "2.3.1"),
            "The current version for My Widget is 2.3.1."
        );

        let name = ItemName::parse(Some("A & B")).unwrap();
        assert_eq!(
            success_message(&name, "1.0<beta>"),
            "The current version for A &amp; B is 1.0&lt;beta&gt;."
        );
    }
}
