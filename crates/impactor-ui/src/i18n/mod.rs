//! Lightweight JSON-backed translations with per-locale bundles.

use serde_json::Value;
use std::sync::LazyLock;

/// Locales that ship a translation bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    /// English.
    En,
    /// French.
    Fr,
    /// German.
    De,
    /// Spanish.
    Es,
}

impl LocaleCode {
    /// All bundled locales in selector order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::En, Self::Fr, Self::De, Self::Es]
    }

    /// Two-letter code, as stored in preferences.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::De => "de",
            Self::Es => "es",
        }
    }

    /// Native-language label for the selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
            Self::De => "Deutsch",
            Self::Es => "Español",
        }
    }

    /// Map an arbitrary language tag (`fr`, `fr-CA`, `de_AT`) to a bundled locale.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all().into_iter().find(|locale| locale.code() == base)
    }
}

/// Locale used when a language has no bundle.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Translation bundle containing a parsed JSON tree for the locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Build the bundle for a locale.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let tree = serde_json::from_str(raw_locale(locale)).unwrap_or_else(|err| {
            log::warn!("locale bundle {} failed to parse: {err}", locale.code());
            Value::Null
        });
        Self { locale, tree }
    }

    /// Bundle for a stored language code; codes without a bundle get English.
    #[must_use]
    pub fn for_language(code: &str) -> Self {
        Self::new(LocaleCode::from_lang_tag(code).unwrap_or(DEFAULT_LOCALE))
    }

    /// Resolve a dotted path (`section.key`) with English fallback and caller default.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&EN_FALLBACK.tree, path))
            .unwrap_or_else(|| default.to_string())
    }
}

static EN_FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::En));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::En => include_str!("../../i18n/en.json"),
        LocaleCode::Fr => include_str!("../../i18n/fr.json"),
        LocaleCode::De => include_str!("../../i18n/de.json"),
        LocaleCode::Es => include_str!("../../i18n/es.json"),
    }
}
