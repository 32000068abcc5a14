//! Meas I18n
//!
//! Static translation catalogs for English, Khmer and Chinese.
//!
//! Lookups go language catalog → English catalog. The English catalog is an
//! exhaustive match, so every key always resolves to some text.

mod catalog;
mod keys;
mod language;
mod preference;
mod translator;

pub use keys::TranslationKey;
pub use language::{Language, LanguageError};
pub use preference::{LANGUAGE_KEY, load_language, save_language};
pub use translator::Translator;
