//! `localStorage`-backed theme preference.
//!
//! Browsers may deny storage (private mode, disabled cookies). Denied or
//! failing reads look like an absent preference; failing writes are logged.

use web_sys::{Storage, Window};

use crate::consts::THEME_STORAGE_KEY;
use crate::error::js_error_text;
use crate::theme::PreferenceStore;

pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {}", js_error_text(&err));
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(THEME_STORAGE_KEY) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("theme preference unreadable: {}", js_error_text(&err));
                None
            }
        }
    }

    fn save(&mut self, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.set_item(THEME_STORAGE_KEY, value) {
            log::warn!("theme preference not saved: {}", js_error_text(&err));
        }
    }
}
