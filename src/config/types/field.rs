//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Used with `#[derive(Config)]` to generate compile-time checked
/// field path accessors.
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "site")]
/// pub struct SiteInfo {
///     pub website: String,
/// }
///
/// // Generated:
/// impl SiteInfo {
///     pub const FIELDS: SiteInfoFields = ...;
/// }
///
/// // Usage:
/// diag.error(SiteInfo::FIELDS.website, Reason::Empty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Path of this field inside the `index`-th entry of an array section.
    ///
    /// `socials.href` at index 3 becomes `socials[3].href`.
    pub fn indexed(&self, index: usize) -> String {
        match self.0.split_once('.') {
            Some((section, rest)) => format!("{section}[{index}].{rest}"),
            None => format!("{}[{index}]", self.0),
        }
    }

    /// Path of the `index`-th element of a list-valued field.
    ///
    /// `locale.language_tags` at index 1 becomes `locale.language_tags[1]`.
    pub fn element(&self, index: usize) -> String {
        format!("{}[{index}]", self.0)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed() {
        assert_eq!(FieldPath::new("socials.href").indexed(3), "socials[3].href");
        assert_eq!(FieldPath::new("socials").indexed(0), "socials[0]");
    }

    #[test]
    fn test_element() {
        assert_eq!(
            FieldPath::new("locale.language_tags").element(1),
            "locale.language_tags[1]"
        );
        // entry index and element index land in different places
        assert_ne!(
            FieldPath::new("locale.language_tags").element(1),
            FieldPath::new("locale.language_tags").indexed(1)
        );
    }
}
