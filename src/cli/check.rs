//! `check` command.

use anyhow::Result;
use siteconf::config::ConfigStore;
use siteconf::log;

/// Report a summary of a store that passed validation.
pub fn run(store: &ConfigStore) -> Result<()> {
    let site = store.site_info();
    log!("check"; "'{}' by {} is valid", site.title, site.author);
    log!(
        "check";
        "{} social links, {} active",
        store.social_links().len(),
        store.active_social_links().len()
    );
    log!(
        "check";
        "{} posts per page, lang '{}', logo {}",
        site.posts_per_page,
        store.locale_info().html_lang(),
        if store.logo_image().enabled { "shown" } else { "hidden" }
    );
    Ok(())
}
