//! `[[socials]]` configuration.
//!
//! # Example
//!
//! ```toml
//! [[socials]]
//! name = "Github"
//! href = "https://github.com/St0wy"
//! active = true
//!
//! [[socials]]
//! name = "Mail"
//! href = "mailto:stowy@protonmail.ch"
//! link_title = "Write me"
//! active = true
//! ```
//!
//! Entries keep their declared order. An empty `link_title` is derived from
//! the site title with [`link_title`].

use crate::config::util::{LINK_SCHEMES, parse_url};
use crate::config::{ConfigDiagnostics, Reason, ValidationError};
use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Known social platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialPlatform {
    Github,
    Facebook,
    Instagram,
    LinkedIn,
    Mail,
    Twitter,
    Twitch,
    YouTube,
    WhatsApp,
    Snapchat,
    Pinterest,
    TikTok,
    CodePen,
    Discord,
    GitLab,
    Reddit,
    Skype,
    Steam,
    Telegram,
    Mastodon,
}

impl SocialPlatform {
    pub const ALL: [Self; 20] = [
        Self::Github,
        Self::Facebook,
        Self::Instagram,
        Self::LinkedIn,
        Self::Mail,
        Self::Twitter,
        Self::Twitch,
        Self::YouTube,
        Self::WhatsApp,
        Self::Snapchat,
        Self::Pinterest,
        Self::TikTok,
        Self::CodePen,
        Self::Discord,
        Self::GitLab,
        Self::Reddit,
        Self::Skype,
        Self::Steam,
        Self::Telegram,
        Self::Mastodon,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Github => "Github",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::LinkedIn => "LinkedIn",
            Self::Mail => "Mail",
            Self::Twitter => "Twitter",
            Self::Twitch => "Twitch",
            Self::YouTube => "YouTube",
            Self::WhatsApp => "WhatsApp",
            Self::Snapchat => "Snapchat",
            Self::Pinterest => "Pinterest",
            Self::TikTok => "TikTok",
            Self::CodePen => "CodePen",
            Self::Discord => "Discord",
            Self::GitLab => "GitLab",
            Self::Reddit => "Reddit",
            Self::Skype => "Skype",
            Self::Steam => "Steam",
            Self::Telegram => "Telegram",
            Self::Mastodon => "Mastodon",
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown social platform '{0}'")]
pub struct UnknownPlatform(pub String);

impl FromStr for SocialPlatform {
    type Err = UnknownPlatform;

    /// Case-insensitive lookup (`github`, `GITHUB` and `Github` all match).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}

/// Accessible label for a link to `platform`.
///
/// ```ignore
/// link_title("Stowy's Blog", SocialPlatform::Github) == "Stowy's Blog on Github"
/// link_title("Stowy's Blog", SocialPlatform::Mail)   == "Send an email to Stowy's Blog"
/// ```
pub fn link_title(site_title: &str, platform: SocialPlatform) -> String {
    let title = site_title.trim();
    match platform {
        SocialPlatform::Mail => format!("Send an email to {title}"),
        _ => format!("{title} on {platform}"),
    }
}

const fn default_active() -> bool {
    true
}

/// A link to one of the author's social profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[config(section = "socials", array)]
pub struct SocialLink {
    /// Platform name, e.g. "Github", "Mastodon" or "Mail".
    #[config(default = "Github", inline_doc)]
    pub name: SocialPlatform,

    /// Profile URL (http, https) or mailto: address.
    #[config(default = "https://github.com/example", inline_doc)]
    pub href: String,

    /// Accessible label. Leave empty to derive it from the site title.
    #[serde(default)]
    #[config(inline_doc)]
    pub link_title: String,

    /// Whether the link is shown to readers.
    #[serde(default = "default_active")]
    #[config(default = "true", inline_doc)]
    pub active: bool,
}

impl SocialLink {
    pub fn new(name: SocialPlatform, href: impl Into<String>, active: bool) -> Self {
        Self {
            name,
            href: href.into(),
            link_title: String::new(),
            active,
        }
    }

    /// Validate a whole link list.
    ///
    /// # Checks
    /// - each platform appears at most once
    /// - `href` is a non-empty http, https or mailto URL
    pub fn validate_all(links: &[Self], diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();

        for (i, link) in links.iter().enumerate() {
            if !seen.insert(link.name) {
                diag.push(
                    ValidationError::new(
                        Self::FIELDS.name,
                        Reason::Duplicate(link.name.to_string()),
                    )
                    .at(i)
                    .with_hint("each platform may appear only once"),
                );
            }

            match parse_url(&link.href, LINK_SCHEMES) {
                Ok(url) => {
                    if link.name == SocialPlatform::Mail && url.scheme() != "mailto" {
                        diag.warn(
                            Self::FIELDS.href.indexed(i),
                            "mail link does not use a mailto: address",
                        );
                    }
                }
                Err(reason) => diag.push(ValidationError::new(Self::FIELDS.href, reason).at(i)),
            }
        }
    }

    /// Copy with trimmed fields and a derived `link_title` when none was given.
    pub fn normalized(&self, site_title: &str) -> Self {
        let title = self.link_title.trim();
        Self {
            name: self.name,
            href: self.href.trim().to_string(),
            link_title: if title.is_empty() {
                link_title(site_title, self.name)
            } else {
                title.to_string()
            },
            active: self.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(links: &[SocialLink]) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        SocialLink::validate_all(links, &mut diag);
        diag
    }

    #[test]
    fn test_parse_array_of_tables() {
        let config = test_parse_config(
            r#"[[socials]]
name = "Github"
href = "https://github.com/St0wy"

[[socials]]
name = "Twitter"
href = "https://twitter.com/St0wy"
link_title = "Old account"
active = false
"#,
        );
        assert_eq!(config.socials.len(), 2);
        assert_eq!(config.socials[0].name, SocialPlatform::Github);
        assert!(config.socials[0].active);
        assert!(config.socials[0].link_title.is_empty());
        assert_eq!(config.socials[1].link_title, "Old account");
        assert!(!config.socials[1].active);
    }

    #[test]
    fn test_unknown_platform_is_rejected_by_parser() {
        let content = "[[socials]]\nname = \"Myspace\"\nhref = \"https://myspace.com\"";
        assert!(crate::config::BlogConfig::from_str(content).is_err());
    }

    #[test]
    fn test_platform_from_str() {
        assert_eq!("github".parse::<SocialPlatform>(), Ok(SocialPlatform::Github));
        assert_eq!("LINKEDIN".parse::<SocialPlatform>(), Ok(SocialPlatform::LinkedIn));
        assert_eq!(
            "Myspace".parse::<SocialPlatform>(),
            Err(UnknownPlatform("Myspace".into()))
        );
        for platform in SocialPlatform::ALL {
            assert_eq!(platform.as_str().parse::<SocialPlatform>(), Ok(platform));
        }
    }

    #[test]
    fn test_link_title() {
        assert_eq!(
            link_title("Stowy's Blog", SocialPlatform::Github),
            "Stowy's Blog on Github"
        );
        assert_eq!(
            link_title(" Stowy's Blog", SocialPlatform::Mail),
            "Send an email to Stowy's Blog"
        );
    }

    #[test]
    fn test_duplicate_name() {
        let links = [
            SocialLink::new(SocialPlatform::Github, "https://github.com/a", true),
            SocialLink::new(SocialPlatform::GitLab, "https://gitlab.com/a", true),
            SocialLink::new(SocialPlatform::Github, "https://github.com/b", false),
        ];
        let diag = validate(&links);
        assert_eq!(diag.len(), 1);
        let err = &diag.errors()[0];
        assert_eq!(err.field, SocialLink::FIELDS.name);
        assert_eq!(err.index, Some(2));
        assert_eq!(err.reason, Reason::Duplicate("Github".into()));
    }

    #[test]
    fn test_href_rules() {
        let links = [
            SocialLink::new(SocialPlatform::Github, "", true),
            SocialLink::new(SocialPlatform::GitLab, "gitlab.com/Stowy", true),
            SocialLink::new(SocialPlatform::Steam, "steam://open/games", true),
            SocialLink::new(SocialPlatform::Mail, "mailto:stowy@protonmail.ch", true),
        ];
        let diag = validate(&links);
        let found: Vec<_> = diag
            .errors()
            .iter()
            .map(|e| (e.index, e.reason.clone()))
            .collect();
        assert_eq!(found.len(), 3);
        assert_eq!(found[0], (Some(0), Reason::Empty));
        assert!(matches!(found[1], (Some(1), Reason::MalformedUrl(_))));
        assert!(matches!(found[2], (Some(2), Reason::UnsupportedScheme { .. })));
        assert!(diag.errors().iter().all(|e| e.field == SocialLink::FIELDS.href));
    }

    #[test]
    fn test_mail_without_mailto_warns() {
        let links = [SocialLink::new(
            SocialPlatform::Mail,
            "https://proton.me/contact",
            true,
        )];
        let diag = validate(&links);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings()[0].0, "socials[0].href");
    }

    #[test]
    fn test_normalized_derives_title() {
        let link = SocialLink::new(
            SocialPlatform::Mastodon,
            " https://mastodon.gamedev.place/@stowy ",
            true,
        );
        let normalized = link.normalized("Stowy's Blog");
        assert_eq!(normalized.href, "https://mastodon.gamedev.place/@stowy");
        assert_eq!(normalized.link_title, "Stowy's Blog on Mastodon");

        let custom = SocialLink {
            link_title: "  Toots ".into(),
            ..link
        };
        assert_eq!(custom.normalized("Stowy's Blog").link_title, "Toots");
    }
}
