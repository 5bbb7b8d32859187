//! `socials` command: list social links in display order.

use anyhow::Result;
use owo_colors::OwoColorize;
use siteconf::log;
use siteconf::config::{ConfigStore, SocialLink, SocialPlatform};

/// One line per link: name, href and accessible title.
///
/// `platform` narrows the listing to a single entry.
pub fn render(store: &ConfigStore, all: bool, platform: Option<SocialPlatform>) -> String {
    let mut links: Vec<&SocialLink> = if all {
        store.social_links().iter().collect()
    } else {
        store.active_social_links()
    };
    if let Some(platform) = platform {
        links.retain(|link| link.name == platform);
    }

    let width = links
        .iter()
        .map(|l| l.name.as_str().len())
        .max()
        .unwrap_or(0);

    links
        .iter()
        .map(|link| {
            let mut line = format!(
                "{:<width$}  {}  {}",
                link.name.as_str(),
                link.href,
                link.link_title.dimmed()
            );
            if !link.active {
                line.push_str(&format!("  {}", "(inactive)".yellow()));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn run(store: &ConfigStore, all: bool, platform: Option<SocialPlatform>) -> Result<()> {
    let out = render(store, all, platform);
    if out.is_empty()
        && let Some(platform) = platform
    {
        log!("socials"; "no {} link to show (inactive links need --all)", platform);
        return Ok(());
    }
    println!("{out}");
    Ok(())
}
