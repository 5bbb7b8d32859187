//! `[logo]` configuration.

use crate::config::{ConfigDiagnostics, Reason};
use macros::Config;
use serde::{Deserialize, Serialize};

/// Header logo display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "logo")]
pub struct LogoImage {
    /// Show the logo image instead of the site title.
    #[serde(alias = "enable")]
    #[config(default = "false", inline_doc)]
    pub enabled: bool,

    /// Use the SVG logo rather than a raster image.
    #[serde(alias = "svg")]
    #[config(default = "true", inline_doc)]
    pub use_svg: bool,

    #[config(default = "216")]
    pub width: u32,

    #[config(default = "46")]
    pub height: u32,
}

impl Default for LogoImage {
    fn default() -> Self {
        Self {
            enabled: false,
            use_svg: true,
            width: 216,
            height: 46,
        }
    }
}

impl LogoImage {
    /// Dimensions must be positive when the logo is shown.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enabled {
            return;
        }
        for (field, value) in [
            (Self::FIELDS.width, self.width),
            (Self::FIELDS.height, self.height),
        ] {
            if value == 0 {
                diag.error(
                    field,
                    Reason::OutOfRange {
                        value: 0,
                        expected: ">= 1 when the logo is enabled",
                    },
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.logo, LogoImage::default());
        assert!(!config.logo.enabled);
    }

    #[test]
    fn test_legacy_keys() {
        let config = test_parse_config("[logo]\nenable = true\nsvg = false\nwidth = 100\nheight = 20");
        assert!(config.logo.enabled);
        assert!(!config.logo.use_svg);
        assert_eq!((config.logo.width, config.logo.height), (100, 20));
    }

    #[test]
    fn test_zero_size_only_matters_when_enabled() {
        let hidden = LogoImage {
            enabled: false,
            width: 0,
            height: 0,
            ..LogoImage::default()
        };
        let mut diag = ConfigDiagnostics::new();
        hidden.validate(&mut diag);
        assert!(diag.is_empty());

        let shown = LogoImage {
            enabled: true,
            ..hidden
        };
        let mut diag = ConfigDiagnostics::new();
        shown.validate(&mut diag);
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].field, LogoImage::FIELDS.width);
        assert_eq!(diag.errors()[1].field, LogoImage::FIELDS.height);
    }
}
