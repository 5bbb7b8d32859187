//! Configuration file generation.

use anyhow::{Context, Result, bail};
use siteconf::config::{LocaleInfo, LogoImage, SiteInfo, SocialLink};
use siteconf::log;
use std::{fs, path::Path};

/// Default config filename
pub const CONFIG_FILE: &str = "blog.toml";

/// Generate blog.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# Blog configuration file (siteconf v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    for section in [
        SiteInfo::template_with_header(),
        LocaleInfo::template_with_header(),
        LogoImage::template_with_header(),
        SocialLink::template_with_header(),
    ] {
        out.push_str(&section);
        out.push('\n');
    }

    out
}

/// Write the template to `path`, refusing to replace a file unless `force`.
pub fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "'{}' already exists, use --force to overwrite it",
            path.display()
        );
    }
    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))
}

pub fn run(path: Option<&Path>, dry: bool, force: bool) -> Result<()> {
    if dry {
        print!("{}", generate_config_template());
        return Ok(());
    }
    let path = path.unwrap_or_else(|| Path::new(CONFIG_FILE));
    write_config(path, force)?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}
