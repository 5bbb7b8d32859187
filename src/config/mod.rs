//! Blog configuration: definitions, validation, and the read-only store.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── locale     # [locale]
//! │   ├── logo       # [logo]
//! │   └── social     # [[socials]]
//! ├── types/         # Utility types
//! │   ├── error      # ValidationError, ConfigDiagnostics, ConfigError
//! │   ├── field      # FieldPath
//! │   └── handle     # Process-wide store handle
//! ├── builtin.rs     # The blog's own definitions
//! ├── store.rs       # ConfigStore (validated snapshot)
//! └── mod.rs         # BlogConfig (this file)
//! ```
//!
//! # Lifecycle
//!
//! Definitions come from [`builtin::definitions`] (or a TOML file), are
//! validated in one pass by [`ConfigStore::load`], and the resulting store is
//! installed once with [`init_config`]. Nothing is mutated afterwards.

pub mod builtin;
pub mod section;
mod store;
pub mod types;
mod util;

pub use section::{LocaleInfo, LogoImage, SiteInfo, SocialLink, SocialPlatform, link_title};
pub use store::ConfigStore;
pub use types::{
    ConfigDiagnostics, ConfigError, FieldPath, Reason, ValidationError, cfg, init_config,
};

use crate::log;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

// ============================================================================
// root configuration
// ============================================================================

/// Unvalidated configuration definitions.
///
/// Every section loader validates before handing out a value, so a
/// `BlogConfig` can be built from any source without checks of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Site metadata
    pub site: SiteInfo,

    /// Locale settings
    pub locale: LocaleInfo,

    /// Logo display settings
    pub logo: LogoImage,

    /// Social links in display order
    pub socials: Vec<SocialLink>,
}

impl BlogConfig {
    /// Definitions from `path`, or the built-in ones when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(builtin::definitions()),
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            let display_path = path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_else(|| path.to_string_lossy());
            log!("warning"; "unknown fields in {} are ignored:", display_path);
            for field in &ignored {
                log!("warning"; "- {}", field);
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    // ========================================================================
    // section loaders
    // ========================================================================

    /// Validated site metadata.
    pub fn load_site_info(&self) -> Result<SiteInfo, ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        diag.finish()?;
        Ok(self.site.normalized())
    }

    /// Locale settings. Empty values mean "use the default" and never fail.
    pub fn load_locale_info(&self) -> LocaleInfo {
        let mut diag = ConfigDiagnostics::new();
        self.locale.validate(&mut diag);
        diag.print_warnings();
        self.locale.normalized()
    }

    /// Validated logo settings.
    pub fn load_logo_image(&self) -> Result<LogoImage, ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.logo.validate(&mut diag);
        diag.finish()?;
        Ok(self.logo.clone())
    }

    /// Validated social links in declared order, titles filled in.
    pub fn load_social_links(&self) -> Result<Vec<SocialLink>, ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        SocialLink::validate_all(&self.socials, &mut diag);
        diag.finish()?;
        Ok(self.normalized_socials())
    }

    /// The subset of [`load_social_links`](Self::load_social_links) with `active` set.
    pub fn active_social_links(&self) -> Result<Vec<SocialLink>, ConfigError> {
        let mut links = self.load_social_links()?;
        links.retain(|link| link.active);
        Ok(links)
    }

    fn normalized_socials(&self) -> Vec<SocialLink> {
        self.socials
            .iter()
            .map(|link| link.normalized(&self.site.title))
            .collect()
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config and panic if there are unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> BlogConfig {
    let (parsed, ignored) = BlogConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = BlogConfig::from_str("[site\ntitle = \"My Blog\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_load_without_path_uses_builtin() {
        let config = BlogConfig::load(None).unwrap();
        assert_eq!(config, builtin::definitions());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = BlogConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"\ndescription = \"Test\"";
        let (_, ignored) = BlogConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[site]\nwebsite = \"https://example.com\"\ntitle = \"T\"\nauthor = \"A\"\ndescription = \"D\"\n\n[[socials]]\nname = \"Github\"\nhref = \"https://github.com/a\"\n"
        )
        .unwrap();

        let config = BlogConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.site.title, "T");
        assert_eq!(config.socials.len(), 1);
        assert!(config.load_site_info().is_ok());
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("blog.toml");
        assert!(matches!(
            BlogConfig::from_path(&missing),
            Err(ConfigError::Io(..))
        ));
    }

    #[test]
    fn test_load_site_info_rejects_bad_website() {
        let mut config = builtin::definitions();
        config.site.website = "not-a-url".into();
        let err = config.load_site_info().unwrap_err();
        assert!(err.cites(SiteInfo::FIELDS.website));
        assert_eq!(err.validation_errors().len(), 1);
    }

    #[test]
    fn test_load_site_info_rejects_zero_posts_per_page() {
        let mut config = builtin::definitions();
        config.site.posts_per_page = 0;
        let err = config.load_site_info().unwrap_err();
        assert!(err.cites(SiteInfo::FIELDS.posts_per_page));
    }

    #[test]
    fn test_load_site_info_valid() {
        let site = builtin::definitions().load_site_info().unwrap();
        assert!(site.posts_per_page >= 1);
        assert!(site.website_url().is_some());
    }

    #[test]
    fn test_load_locale_info_accepts_empty() {
        let mut config = builtin::definitions();
        config.locale = LocaleInfo::default();
        let locale = config.load_locale_info();
        assert_eq!(locale.html_lang(), "en");
        assert!(locale.explicit_language_tags().is_none());
    }

    #[test]
    fn test_load_logo_image() {
        let mut config = builtin::definitions();
        assert_eq!(config.load_logo_image().unwrap(), builtin::logo());

        config.logo.enabled = true;
        config.logo.height = 0;
        let err = config.load_logo_image().unwrap_err();
        assert!(err.cites(LogoImage::FIELDS.height));
    }

    #[test]
    fn test_load_social_links_duplicate() {
        let mut config = builtin::definitions();
        config.socials.push(SocialLink::new(
            SocialPlatform::Github,
            "https://github.com/someone-else",
            true,
        ));
        let err = config.load_social_links().unwrap_err();
        assert!(err.cites(SocialLink::FIELDS.name));
        assert!(matches!(
            err.validation_errors()[0].reason,
            Reason::Duplicate(ref name) if name == "Github"
        ));
    }

    #[test]
    fn test_active_social_links_scenario() {
        let config = builtin::definitions();
        let names: Vec<_> = config
            .active_social_links()
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(
            names,
            vec![
                SocialPlatform::Github,
                SocialPlatform::GitLab,
                SocialPlatform::Mastodon,
                SocialPlatform::LinkedIn,
                SocialPlatform::Mail,
            ]
        );
    }

    #[test]
    fn test_active_is_order_preserving_subset() {
        let config = builtin::definitions();
        let all = config.load_social_links().unwrap();
        let active = config.active_social_links().unwrap();
        let expected: Vec<_> = all.iter().filter(|l| l.active).cloned().collect();
        assert_eq!(active, expected);
        assert!(active.len() < all.len());
    }

    #[test]
    fn test_loaders_are_idempotent() {
        let config = builtin::definitions();
        assert_eq!(
            config.load_site_info().unwrap(),
            config.load_site_info().unwrap()
        );
        assert_eq!(config.load_locale_info(), config.load_locale_info());
        assert_eq!(
            config.load_logo_image().unwrap(),
            config.load_logo_image().unwrap()
        );
        assert_eq!(
            config.load_social_links().unwrap(),
            config.load_social_links().unwrap()
        );
    }

    #[test]
    fn test_social_titles_follow_site_title() {
        let links = builtin::definitions().load_social_links().unwrap();
        assert_eq!(links[0].link_title, "Stowy's Blog on Github");
        assert_eq!(links[5].link_title, "Send an email to Stowy's Blog");
    }
}
