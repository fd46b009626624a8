//! Accessibility preferences (language + colorblind mode) and their persistence.
//!
//! # Design
//! - The store owns the state; storage is passed in at the two sync points
//!   (startup init and mutation) and never read implicitly.
//! - Only a non-default language is persisted; `"en"` clears the key.
//! - Colorblind mode is always written, including `"false"`.

use crate::core::storage::KeyValueStore;
use yewdux::store::Store;

/// Storage key holding a non-default language code.
pub const LANGUAGE_KEY: &str = "language";
/// Storage key holding `"true"`/`"false"` for colorblind mode.
pub const COLORBLIND_MODE_KEY: &str = "colorblindMode";
/// Language used when nothing is stored.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Tab-wide accessibility preferences.
#[derive(Clone, Debug, PartialEq, Eq, Store)]
pub struct AccessibilityStore {
    language: String,
    colorblind_mode: bool,
}

impl Default for AccessibilityStore {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            colorblind_mode: false,
        }
    }
}

impl AccessibilityStore {
    /// Current language code. Never empty.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether the colorblind-safe presentation is active.
    #[must_use]
    pub const fn colorblind_mode(&self) -> bool {
        self.colorblind_mode
    }

    /// Switch language and persist the choice.
    ///
    /// Any code is accepted as-is. An empty code falls back to the default.
    pub fn set_language(&mut self, storage: &mut impl KeyValueStore, lang: &str) {
        let lang = if lang.is_empty() { DEFAULT_LANGUAGE } else { lang };
        self.language = lang.to_string();
        if lang == DEFAULT_LANGUAGE {
            storage.remove(LANGUAGE_KEY);
            log::debug!("language reset to default, cleared {LANGUAGE_KEY}");
        } else {
            storage.set(LANGUAGE_KEY, lang);
            log::debug!("language set to {lang}, stored under {LANGUAGE_KEY}");
        }
    }

    /// Load the stored language, keeping the current one when none is stored.
    pub fn init_language(&mut self, storage: &impl KeyValueStore) {
        if let Some(saved) = storage.get(LANGUAGE_KEY).filter(|value| !value.is_empty()) {
            self.language = saved;
        }
    }

    /// Flip colorblind mode and persist the new value.
    pub fn toggle_colorblind_mode(&mut self, storage: &mut impl KeyValueStore) {
        self.colorblind_mode = !self.colorblind_mode;
        let value = if self.colorblind_mode { "true" } else { "false" };
        storage.set(COLORBLIND_MODE_KEY, value);
        log::debug!("colorblind mode set to {value}");
    }

    /// Load the stored colorblind flag. Anything but `"true"` reads as off.
    pub fn init_colorblind_mode(&mut self, storage: &impl KeyValueStore) {
        if let Some(mode) = storage.get(COLORBLIND_MODE_KEY) {
            self.colorblind_mode = mode == "true";
        }
    }

    /// Startup sync: load every stored preference.
    pub fn init(&mut self, storage: &impl KeyValueStore) {
        self.init_language(storage);
        self.init_colorblind_mode(storage);
    }

    /// Fresh store initialized from `storage`.
    #[must_use]
    pub fn load(storage: &impl KeyValueStore) -> Self {
        let mut store = Self::default();
        store.init(storage);
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStorage;

    #[test]
    fn defaults_are_english_and_colorblind_off() {
        let store = AccessibilityStore::default();
        assert_eq!(store.language(), "en");
        assert!(!store.colorblind_mode());
    }

    #[test]
    fn set_language_persists_only_non_default_codes() {
        let mut storage = MemoryStorage::new();
        let mut store = AccessibilityStore::default();

        store.set_language(&mut storage, "fr");
        assert_eq!(store.language(), "fr");
        assert_eq!(storage.get(LANGUAGE_KEY).as_deref(), Some("fr"));

        store.set_language(&mut storage, "en");
        assert_eq!(store.language(), "en");
        assert_eq!(storage.get(LANGUAGE_KEY), None);
    }

    #[test]
    fn set_language_accepts_malformed_codes() {
        let mut storage = MemoryStorage::new();
        let mut store = AccessibilityStore::default();
        store.set_language(&mut storage, "xx_NOT-a-code");
        assert_eq!(store.language(), "xx_NOT-a-code");
        assert_eq!(storage.get(LANGUAGE_KEY).as_deref(), Some("xx_NOT-a-code"));
    }

    #[test]
    fn empty_language_falls_back_to_default() {
        let mut storage = MemoryStorage::with_entries([(LANGUAGE_KEY, "de")]);
        let mut store = AccessibilityStore::load(&storage);
        store.set_language(&mut storage, "");
        assert_eq!(store.language(), DEFAULT_LANGUAGE);
        assert_eq!(storage.get(LANGUAGE_KEY), None);
    }

    #[test]
    fn init_language_reads_stored_code() {
        let mut store = AccessibilityStore::default();
        store.init_language(&MemoryStorage::new());
        assert_eq!(store.language(), "en");

        store.init_language(&MemoryStorage::with_entries([(LANGUAGE_KEY, "de")]));
        assert_eq!(store.language(), "de");
    }

    #[test]
    fn init_language_ignores_empty_value() {
        let mut store = AccessibilityStore::default();
        store.init_language(&MemoryStorage::with_entries([(LANGUAGE_KEY, "")]));
        assert_eq!(store.language(), "en");
    }

    #[test]
    fn toggle_writes_true_then_false() {
        let mut storage = MemoryStorage::new();
        let mut store = AccessibilityStore::default();

        store.toggle_colorblind_mode(&mut storage);
        assert!(store.colorblind_mode());
        assert_eq!(storage.get(COLORBLIND_MODE_KEY).as_deref(), Some("true"));

        store.toggle_colorblind_mode(&mut storage);
        assert!(!store.colorblind_mode());
        assert_eq!(storage.get(COLORBLIND_MODE_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn init_colorblind_mode_matches_only_true() {
        let cases = [("true", true), ("false", false), ("TRUE", false), ("1", false), ("", false)];
        for (stored, expected) in cases {
            let mut store = AccessibilityStore::default();
            store.init_colorblind_mode(&MemoryStorage::with_entries([(COLORBLIND_MODE_KEY, stored)]));
            assert_eq!(store.colorblind_mode(), expected, "{stored:?}");
        }

        let mut store = AccessibilityStore::default();
        store.init_colorblind_mode(&MemoryStorage::new());
        assert!(!store.colorblind_mode());
    }

    #[test]
    fn stored_false_overrides_an_enabled_flag() {
        let mut storage = MemoryStorage::new();
        let mut store = AccessibilityStore::default();
        store.toggle_colorblind_mode(&mut storage);
        store.init_colorblind_mode(&MemoryStorage::with_entries([(COLORBLIND_MODE_KEY, "false")]));
        assert!(!store.colorblind_mode());
    }

    #[test]
    fn initializers_are_idempotent() {
        let storage =
            MemoryStorage::with_entries([(LANGUAGE_KEY, "es"), (COLORBLIND_MODE_KEY, "true")]);
        let once = AccessibilityStore::load(&storage);

        let mut twice = AccessibilityStore::default();
        twice.init_language(&storage);
        twice.init_language(&storage);
        twice.init_colorblind_mode(&storage);
        twice.init_colorblind_mode(&storage);

        assert_eq!(once, twice);
        assert_eq!(once.language(), "es");
        assert!(once.colorblind_mode());
    }

    #[test]
    fn init_never_writes_storage() {
        let storage = MemoryStorage::with_entries([(LANGUAGE_KEY, "fr")]);
        let before = storage.clone();
        let _ = AccessibilityStore::load(&storage);
        assert_eq!(storage, before);
    }
}
