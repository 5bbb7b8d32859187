//! `[locale]` configuration.
//!
//! Empty values are meaningful: an empty `language_code` falls back to
//! [`DEFAULT_LANG`], an empty `language_tags` list defers to the environment.

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// HTML `lang` used when no language code is configured.
pub const DEFAULT_LANG: &str = "en";

/// Locale settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "locale")]
pub struct LocaleInfo {
    /// HTML lang code. Leave empty to use "en".
    #[serde(alias = "lang")]
    #[config(default = "en", inline_doc)]
    pub language_code: String,

    /// BCP 47 language tags. Leave empty to use the environment default.
    #[serde(alias = "lang_tag")]
    #[config(default = "[\"en-US\"]", inline_doc)]
    pub language_tags: Vec<String>,
}

impl LocaleInfo {
    /// Check that configured values look like BCP 47 identifiers.
    ///
    /// Only warns: a consumer can still pass an unusual tag through.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let code = self.language_code.trim();
        if !code.is_empty() && code.parse::<LanguageIdentifier>().is_err() {
            diag.warn(
                Self::FIELDS.language_code.as_str(),
                format!("'{code}' is not a valid BCP 47 language code"),
            );
        }

        for (i, tag) in self.language_tags.iter().enumerate() {
            // blank tags are dropped by `normalized`
            if tag.trim().is_empty() {
                continue;
            }
            if tag.trim().parse::<LanguageIdentifier>().is_err() {
                diag.warn(
                    Self::FIELDS.language_tags.element(i),
                    format!("'{tag}' is not a valid BCP 47 language tag"),
                );
            }
        }
    }

    /// Copy with whitespace trimmed and blank tags dropped.
    pub fn normalized(&self) -> Self {
        Self {
            language_code: self.language_code.trim().to_string(),
            language_tags: self
                .language_tags
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Value for the HTML `lang` attribute.
    pub fn html_lang(&self) -> &str {
        match self.language_code.trim() {
            "" => DEFAULT_LANG,
            code => code,
        }
    }

    /// Configured tags, or `None` to use the environment default.
    pub fn explicit_language_tags(&self) -> Option<&[String]> {
        if self.language_tags.is_empty() {
            None
        } else {
            Some(&self.language_tags)
        }
    }
}
