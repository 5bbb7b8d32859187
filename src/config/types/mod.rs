//! Configuration utility types.
//!
//! | Module   | Purpose                                        |
//! |----------|------------------------------------------------|
//! | `error`  | Validation errors, diagnostics, `ConfigError`  |
//! | `field`  | Type-safe field paths                          |
//! | `handle` | Process-wide configuration handle              |

mod error;
mod field;
pub mod handle;

pub use error::{ConfigDiagnostics, ConfigError, Reason, ValidationError};
pub use field::FieldPath;
pub use handle::{cfg, init_config};
