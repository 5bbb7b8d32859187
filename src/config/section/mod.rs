//! Configuration section definitions.
//!
//! Each module corresponds to a section of the blog configuration:
//!
//! | Module   | TOML Section   | Purpose                                 |
//! |----------|----------------|-----------------------------------------|
//! | `site`   | `[site]`       | Title, author, URL, pagination          |
//! | `locale` | `[locale]`     | HTML lang code and BCP 47 tags          |
//! | `logo`   | `[logo]`       | Header logo display                     |
//! | `social` | `[[socials]]`  | Ordered social profile links            |

mod locale;
mod logo;
mod site;
mod social;

pub use locale::{DEFAULT_LANG, LocaleInfo};
pub use logo::LogoImage;
pub use site::{DEFAULT_SCHEDULED_POST_MARGIN_MS, SiteInfo};
pub use social::{SocialLink, SocialPlatform, UnknownPlatform, link_title};
