#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Impactor Web UI.
//! This crate holds the Yew front-end entrypoint plus the route table,
//! accessibility preferences, palettes and locale bundles it is built on.

pub mod core;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::preferences::AccessibilityStore;
    use crate::core::storage::MemoryStorage;
    use crate::core::theme::palette_for;
    use crate::i18n::TranslationBundle;

    #[test]
    fn stored_preferences_drive_labels_and_palette() {
        let storage =
            MemoryStorage::with_entries([("language", "es"), ("colorblindMode", "true")]);
        let prefs = AccessibilityStore::load(&storage);
        let bundle = TranslationBundle::for_language(prefs.language());
        assert_eq!(bundle.text("nav.home", "Home"), "Inicio");
        assert_eq!(palette_for(prefs.colorblind_mode()).id, "colorblind");
    }
}
