//! Process-wide configuration handle.
//!
//! The validated [`ConfigStore`] is installed exactly once, before any
//! consumer runs, and is read-only afterwards. Readers get a `&'static`
//! reference, so sharing across threads needs no locking.

use crate::config::{ConfigError, ConfigStore};
use std::sync::OnceLock;

/// Global config storage.
static STORE: OnceLock<ConfigStore> = OnceLock::new();

/// Install the validated store for the rest of the process.
///
/// Fails with [`ConfigError::AlreadyInitialized`] on any call after the first.
pub fn init_config(store: ConfigStore) -> Result<&'static ConfigStore, ConfigError> {
    let mut installed = false;
    let current = STORE.get_or_init(|| {
        installed = true;
        store
    });
    if installed {
        Ok(current)
    } else {
        Err(ConfigError::AlreadyInitialized)
    }
}

/// The installed store, or `None` before [`init_config`] ran.
#[inline]
pub fn cfg() -> Option<&'static ConfigStore> {
    STORE.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only test in the crate that touches the global handle.
    #[test]
    fn test_init_once() {
        assert!(cfg().is_none());

        let store = init_config(ConfigStore::builtin().unwrap()).unwrap();
        assert_eq!(store.site_info().title, "Stowy's Blog");
        assert!(std::ptr::eq(store, cfg().unwrap()));

        let again = init_config(ConfigStore::builtin().unwrap());
        assert!(matches!(again, Err(ConfigError::AlreadyInitialized)));
        assert!(std::ptr::eq(store, cfg().unwrap()));
    }
}
