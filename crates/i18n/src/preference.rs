use meas_ports::{KeyValueStore, StoreResult};

use crate::language::Language;

/// Store key for the chosen display language
pub const LANGUAGE_KEY: &str = "preferred_language";

/// Read the saved language; missing or unknown codes fall back to English
pub fn load_language(store: &dyn KeyValueStore) -> StoreResult<Language> {
    let language = match store.get(LANGUAGE_KEY)? {
        Some(code) => code.parse().unwrap_or_else(|e| {
            log::warn!("{}, falling back to {}", e, Language::default());
            Language::default()
        }),
        None => Language::default(),
    };
    Ok(language)
}

pub fn save_language(store: &dyn KeyValueStore, language: Language) -> StoreResult<()> {
    store.set(LANGUAGE_KEY, language.code())
}
