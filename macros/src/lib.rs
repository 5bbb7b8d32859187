//! Proc macros for siteconf.
//!
//! # Config derive macro
//!
//! Generates both field path accessors and a TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site")]
//! /// Site metadata.
//! pub struct SiteInfo {
//!     /// Site title.
//!     #[config(default = "My Blog", inline_doc)]
//!     pub title: String,
//!
//!     /// Internal field.
//!     #[config(skip)]
//!     pub internal: String,
//! }
//!
//! // Generates:
//! // - SiteInfo::FIELDS.title -> FieldPath("site.title")
//! // - SiteInfo::template() -> TOML string with comments
//! // - SiteInfo::template_with_header() -> with [site] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//! - `#[config(array)]` - Section is an array of tables (`[[path]]`)
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and template
//! - `#[config(default = "x")]` - Default value in template
//! - `#[config(inline_doc)]` - Render a one-line doc as a trailing comment
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `LogoImage` → `logo_image`
//! - `LocaleConfig` → `locale`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
