//! The blog's own configuration, declared in code.
//!
//! This is the default source: [`ConfigStore::builtin`](super::ConfigStore::builtin)
//! validates these definitions without touching the filesystem.

use super::BlogConfig;
use super::section::{LocaleInfo, LogoImage, SiteInfo, SocialLink, SocialPlatform};

pub fn site() -> SiteInfo {
    SiteInfo {
        website: "https://blog.stowy.ch".into(),
        author: "Stowy".into(),
        description: "The game dev blog of Stowy.".into(),
        title: "Stowy's Blog".into(),
        social_preview_image: "astropaper-og.jpg".into(),
        light_and_dark_mode: true,
        posts_per_page: 4,
        scheduled_post_margin_ms: 15 * 60 * 1000,
    }
}

pub fn locale() -> LocaleInfo {
    LocaleInfo {
        language_code: "en".into(),
        language_tags: vec!["en-EN".into()],
    }
}

pub fn logo() -> LogoImage {
    LogoImage {
        enabled: false,
        use_svg: true,
        width: 216,
        height: 46,
    }
}

/// Social links in display order. Titles are derived from the site title.
pub fn socials() -> Vec<SocialLink> {
    use SocialPlatform::*;
    vec![
        SocialLink::new(Github, "https://github.com/St0wy", true),
        SocialLink::new(GitLab, "https://gitlab.com/Stowy", true),
        SocialLink::new(Mastodon, "https://mastodon.gamedev.place/@stowy", true),
        SocialLink::new(Twitter, "https://twitter.com/St0wy", false),
        SocialLink::new(
            LinkedIn,
            "https://www.linkedin.com/in/fabian-huber-530b24207/",
            true,
        ),
        SocialLink::new(Mail, "mailto:stowy@protonmail.ch", true),
    ]
}

/// All definitions, ready for [`ConfigStore::load`](super::ConfigStore::load).
pub fn definitions() -> BlogConfig {
    BlogConfig {
        site: site(),
        locale: locale(),
        logo: logo(),
        socials: socials(),
    }
}
