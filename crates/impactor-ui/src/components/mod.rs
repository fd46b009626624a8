pub(crate) mod pages;
pub(crate) mod shell;

use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

/// Active translation bundle, English when no provider is mounted.
#[hook]
pub(crate) fn use_translations() -> TranslationBundle {
    use_context::<TranslationBundle>().unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE))
}
