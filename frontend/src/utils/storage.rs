use web_sys::window;

use crate::config::LANGUAGE_STORAGE_KEY;
use crate::i18n::Language;

/// String key/value persistence. `window.localStorage` in the browser.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
}

pub struct LocalStore;

impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        // Private browsing modes can deny access; treat that as "no storage".
        window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok()).flatten()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        match Self::storage() {
            Some(storage) => match storage.set_item(key, value) {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("Failed to persist {}: {:?}", key, e);
                    false
                }
            },
            None => false,
        }
    }
}

pub fn load_language(store: &impl PreferenceStore) -> Language {
    store
        .get(LANGUAGE_STORAGE_KEY)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

pub fn save_language(store: &impl PreferenceStore, language: Language) -> bool {
    store.set(LANGUAGE_STORAGE_KEY, language.code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
        read_only: bool,
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> bool {
            if self.read_only {
                return false;
            }
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            true
        }
    }

    #[test]
    fn defaults_to_spanish_when_nothing_is_stored() {
        assert_eq!(load_language(&MemoryStore::default()), Language::Es);
    }

    #[test]
    fn saved_language_is_read_back_on_next_load() {
        let store = MemoryStore::default();
        assert!(save_language(&store, Language::En));
        assert_eq!(store.get("rb_lang").as_deref(), Some("en"));
        assert_eq!(load_language(&store), Language::En);
    }

    #[test]
    fn garbage_value_falls_back_to_default() {
        let store = MemoryStore::default();
        store.set(LANGUAGE_STORAGE_KEY, "klingon");
        assert_eq!(load_language(&store), Language::Es);
    }

    #[test]
    fn denied_writes_are_swallowed() {
        let store = MemoryStore {
            read_only: true,
            ..Default::default()
        };
        assert!(!save_language(&store, Language::En));
        assert_eq!(load_language(&store), Language::Es);
    }
}
