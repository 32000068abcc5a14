//! Per-language string tables

mod en;
mod km;
mod zh;

use crate::keys::TranslationKey;
use crate::language::Language;

/// English text for `key`; English covers every key
pub(crate) fn fallback(key: TranslationKey) -> &'static str {
    en::lookup(key)
}

/// Text for `key` in `language` only, without falling back
pub(crate) fn lookup(language: Language, key: TranslationKey) -> Option<&'static str> {
    match language {
        Language::En => Some(en::lookup(key)),
        Language::Km => km::lookup(key),
        Language::Zh => zh::lookup(key),
    }
}
