//! `[site]` configuration.
//!
//! Contains basic site information like title, author, description, etc.

use crate::config::util::{WEB_SCHEMES, extract_url_path, parse_url};
use crate::config::{ConfigDiagnostics, Reason};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};
use url::Url;

/// Default margin before a future-dated post counts as published (15 minutes).
pub const DEFAULT_SCHEDULED_POST_MARGIN_MS: u64 = 15 * 60 * 1000;

/// Site metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteInfo {
    /// Absolute site URL; its path is used as prefix for subdirectory deployments.
    #[config(default = "https://example.com", inline_doc)]
    pub website: String,

    /// Author name.
    #[config(default = "Alice", inline_doc)]
    pub author: String,

    /// Site description.
    #[serde(alias = "desc")]
    #[config(default = "A personal blog.", inline_doc)]
    pub description: String,

    /// Site title.
    #[config(default = "My Blog", inline_doc)]
    pub title: String,

    /// Social preview image: a filename relative to the website, or a full URL.
    #[serde(alias = "og_image")]
    #[config(default = "og.jpg")]
    pub social_preview_image: String,

    /// Offer both light and dark color schemes.
    #[config(default = "true", inline_doc)]
    pub light_and_dark_mode: bool,

    /// Number of posts on each listing page.
    #[serde(alias = "post_per_page")]
    #[config(default = "4", inline_doc)]
    pub posts_per_page: u32,

    /// Future-dated posts within this many milliseconds of now count as published.
    #[config(default = "900000")]
    pub scheduled_post_margin_ms: u64,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            website: String::new(),
            author: String::new(),
            description: String::new(),
            title: String::new(),
            social_preview_image: String::new(),
            light_and_dark_mode: true,
            posts_per_page: 4,
            scheduled_post_margin_ms: DEFAULT_SCHEDULED_POST_MARGIN_MS,
        }
    }
}

impl SiteInfo {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `website` must be an absolute http(s) URL with a host
    /// - `title`, `author` and `description` must not be empty
    /// - `posts_per_page` must be at least 1
    /// - `social_preview_image`, when given as a URL, must parse
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Err(reason) = parse_url(&self.website, WEB_SCHEMES) {
            diag.error_with_hint(
                Self::FIELDS.website,
                reason,
                "use format like https://example.com",
            );
        }

        for (field, value) in [
            (Self::FIELDS.title, &self.title),
            (Self::FIELDS.author, &self.author),
            (Self::FIELDS.description, &self.description),
        ] {
            if value.trim().is_empty() {
                diag.error(field, Reason::Empty);
            }
        }

        if self.posts_per_page < 1 {
            diag.error(
                Self::FIELDS.posts_per_page,
                Reason::OutOfRange {
                    value: u64::from(self.posts_per_page),
                    expected: ">= 1",
                },
            );
        }

        let image = self.social_preview_image.trim();
        if image.contains("://")
            && let Err(reason) = parse_url(image, WEB_SCHEMES)
        {
            diag.error_with_hint(
                Self::FIELDS.social_preview_image,
                reason,
                "use a filename like og.jpg or a full https:// URL",
            );
        }
    }

    /// Copy with surrounding whitespace removed from text fields.
    pub fn normalized(&self) -> Self {
        Self {
            website: self.website.trim().to_string(),
            author: self.author.trim().to_string(),
            description: self.description.trim().to_string(),
            title: self.title.trim().to_string(),
            social_preview_image: self.social_preview_image.trim().to_string(),
            ..self.clone()
        }
    }

    /// Parsed site URL.
    pub fn website_url(&self) -> Option<Url> {
        Url::parse(self.website.trim()).ok()
    }

    /// Path component of the site URL without surrounding slashes.
    ///
    /// `https://example.github.io/blog/` yields `blog`, a root site yields an
    /// empty string.
    pub fn base_path(&self) -> Option<String> {
        extract_url_path(self.website.trim())
    }

    /// Absolute URL of the social preview image, `None` when unset.
    pub fn social_preview_url(&self) -> Option<Url> {
        let image = self.social_preview_image.trim();
        if image.is_empty() {
            return None;
        }
        if image.contains("://") {
            return Url::parse(image).ok();
        }
        self.website_url()?.join(image).ok()
    }

    #[inline]
    pub fn scheduled_post_margin(&self) -> Duration {
        Duration::from_millis(self.scheduled_post_margin_ms)
    }

    /// Whether a post dated `publish_at` is published at `now`.
    ///
    /// A post counts as published once `now + margin` is past its date.
    pub fn is_publish_time_passed(&self, publish_at: SystemTime, now: SystemTime) -> bool {
        now.checked_add(self.scheduled_post_margin())
            .is_none_or(|shifted| shifted > publish_at)
    }
}
