//! Validated, immutable configuration snapshot.

use super::{
    BlogConfig, ConfigDiagnostics, ConfigError, LocaleInfo, LogoImage, SiteInfo, SocialLink,
    builtin,
};
use crate::debug;
use serde::Serialize;

/// All configuration groups after one successful validation pass.
///
/// Only [`ConfigStore::load`] constructs a store, so holding one means every
/// invariant was checked. Fields are private and only borrowed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigStore {
    site: SiteInfo,
    locale: LocaleInfo,
    logo: LogoImage,
    socials: Vec<SocialLink>,
}

impl ConfigStore {
    /// Validate every section of `config` and build the store.
    ///
    /// All errors across all sections are collected; a single one fails the
    /// whole load.
    pub fn load(config: &BlogConfig) -> Result<Self, ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        config.site.validate(&mut diag);
        config.locale.validate(&mut diag);
        config.logo.validate(&mut diag);
        SocialLink::validate_all(&config.socials, &mut diag);

        diag.finish()?;

        let site = config.site.normalized();
        let socials = config
            .socials
            .iter()
            .map(|link| link.normalized(&site.title))
            .collect();

        let store = Self {
            locale: config.locale.normalized(),
            logo: config.logo.clone(),
            socials,
            site,
        };
        debug!(
            "config";
            "loaded '{}' with {} social links ({} active)",
            store.site.title,
            store.socials.len(),
            store.active_social_links().len()
        );
        Ok(store)
    }

    /// Store built from [`builtin::definitions`].
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::load(&builtin::definitions())
    }

    pub fn site_info(&self) -> &SiteInfo {
        &self.site
    }

    pub fn locale_info(&self) -> &LocaleInfo {
        &self.locale
    }

    pub fn logo_image(&self) -> &LogoImage {
        &self.logo
    }

    /// All social links in declared order.
    pub fn social_links(&self) -> &[SocialLink] {
        &self.socials
    }

    /// Links with `active` set, in declared order.
    pub fn active_social_links(&self) -> Vec<&SocialLink> {
        self.socials.iter().filter(|link| link.active).collect()
    }
}
