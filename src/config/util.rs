//! Configuration utility functions.

use crate::config::Reason;
use url::Url;

/// Schemes accepted for the site address.
pub const WEB_SCHEMES: &[&str] = &["http", "https"];

/// Schemes accepted for social link targets.
pub const LINK_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Parse `value` as an absolute URL restricted to `schemes`.
///
/// - empty (or whitespace-only) input is [`Reason::Empty`]
/// - web URLs must carry a host
/// - `mailto:` URLs must carry an address
pub fn parse_url(value: &str, schemes: &[&str]) -> Result<Url, Reason> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Reason::Empty);
    }

    let parsed = Url::parse(value).map_err(|e| Reason::MalformedUrl(e.to_string()))?;

    if !schemes.contains(&parsed.scheme()) {
        return Err(Reason::UnsupportedScheme {
            scheme: parsed.scheme().to_string(),
            expected: expected_schemes(schemes),
        });
    }

    if parsed.scheme() == "mailto" {
        if parsed.path().trim().is_empty() {
            return Err(Reason::MalformedUrl("missing mail address".into()));
        }
    } else if parsed.host_str().is_none_or(str::is_empty) {
        return Err(Reason::MissingHost);
    }

    Ok(parsed)
}

/// Human-readable list of `schemes`, e.g. "http, https or mailto".
fn expected_schemes(schemes: &[&str]) -> String {
    match schemes {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} or {last}", init.join(", ")),
    }
}

/// Extract path component from a URL string
///
/// Returns `None` if the URL is invalid
///
/// # Examples
/// ```ignore
/// extract_url_path("https://example.github.io/my-project/") -> Some("my-project")
/// extract_url_path("https://example.com")                   -> Some("")
/// extract_url_path("invalid")                               -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = Url::parse(url_str).ok()?;
    Some(parsed.path().trim_matches('/').to_string())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_accepts_web_and_mail() {
        assert!(parse_url("https://github.com/St0wy", LINK_SCHEMES).is_ok());
        assert!(parse_url("http://localhost:4321/", LINK_SCHEMES).is_ok());
        assert!(parse_url("mailto:stowy@protonmail.ch", LINK_SCHEMES).is_ok());
        // surrounding whitespace is tolerated
        assert!(parse_url("  https://blog.stowy.ch  ", WEB_SCHEMES).is_ok());
    }

    #[test]
    fn test_parse_url_rejections() {
        assert_eq!(parse_url("", LINK_SCHEMES), Err(Reason::Empty));
        assert_eq!(parse_url("   ", LINK_SCHEMES), Err(Reason::Empty));
        assert!(matches!(
            parse_url("not-a-url", WEB_SCHEMES),
            Err(Reason::MalformedUrl(_))
        ));
        assert!(matches!(
            parse_url("ftp://example.com", LINK_SCHEMES),
            Err(Reason::UnsupportedScheme { ref scheme, .. }) if scheme == "ftp"
        ));
        assert!(matches!(
            parse_url("mailto:stowy@protonmail.ch", WEB_SCHEMES),
            Err(Reason::UnsupportedScheme { .. })
        ));
        assert!(matches!(
            parse_url("mailto:", LINK_SCHEMES),
            Err(Reason::MalformedUrl(_))
        ));
    }

    #[test]
    fn test_expected_schemes_follow_the_list() {
        assert_eq!(expected_schemes(LINK_SCHEMES), "http, https or mailto");
        assert_eq!(expected_schemes(WEB_SCHEMES), "http or https");
        assert_eq!(
            parse_url("https://example.com", &["ftp"]),
            Err(Reason::UnsupportedScheme {
                scheme: "https".into(),
                expected: "ftp".into(),
            })
        );
    }

    #[test]
    fn test_extract_url_path() {
        assert_eq!(
            extract_url_path("https://example.github.io/my-project/"),
            Some("my-project".to_string())
        );
        assert_eq!(
            extract_url_path("https://example.github.io/a/b/c"),
            Some("a/b/c".to_string())
        );
        assert_eq!(extract_url_path("https://example.com"), Some(String::new()));
        assert_eq!(
            extract_url_path("https://example.com:8080/path?query=1#frag"),
            Some("path".to_string())
        );
        assert_eq!(extract_url_path("invalid-url"), None);
    }
}
