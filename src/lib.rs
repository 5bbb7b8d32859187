//! siteconf - validated site configuration for a personal blog.
//!
//! The configuration is declared once (see [`config::builtin`]), validated in a
//! single pass by [`config::ConfigStore::load`], and then shared read-only for the
//! rest of the process.
//!
//! ```ignore
//! use siteconf::config::{ConfigStore, init_config};
//!
//! let store = init_config(ConfigStore::builtin()?)?;
//! for link in store.active_social_links() {
//!     println!("{} -> {}", link.link_title, link.href);
//! }
//! ```

pub mod config;
pub mod logger;
