use crate::catalog;
use crate::keys::TranslationKey;
use crate::language::Language;

/// Resolves translation keys for the active language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Text for `key`, falling back to English when the active catalog lacks it
    pub fn t(&self, key: TranslationKey) -> &'static str {
        catalog::lookup(self.language, key).unwrap_or_else(|| {
            log::debug!("No {} text for {}, using English", self.language, key);
            catalog::fallback(key)
        })
    }

    /// Whether the active catalog has its own text for `key`
    pub fn has_own_text(&self, key: TranslationKey) -> bool {
        catalog::lookup(self.language, key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meas_core::GoldUnit;

    #[test]
    fn test_english_lookup() {
        let t = Translator::new(Language::En);
        assert_eq!(t.t(TranslationKey::AppTitle), "Gold ROI Calculator");
        assert_eq!(t.t(TranslationKey::YouGain), "You gain");
    }

    #[test]
    fn test_translated_lookup() {
        let t = Translator::new(Language::Zh);
        assert_eq!(t.t(TranslationKey::Roi), "投资回报率");

        let t = Translator::new(Language::Km);
        assert_eq!(t.t(TranslationKey::UnitDomlangShort), "ដំឡឹង");
    }

    #[test]
    fn test_missing_text_falls_back_to_english() {
        let t = Translator::new(Language::Km);
        assert!(!t.has_own_text(TranslationKey::MarketClosed));
        assert_eq!(t.t(TranslationKey::MarketClosed), "Market closed");
    }

    #[test]
    fn test_every_key_resolves_in_every_language() {
        for language in Language::ALL {
            let t = Translator::new(language);
            for key in TranslationKey::ALL {
                assert!(!t.t(key).is_empty(), "{} empty in {}", key, language);
            }
        }
    }

    #[test]
    fn test_unit_labels() {
        let t = Translator::new(Language::En);
        assert_eq!(t.t(TranslationKey::per_unit(GoldUnit::Ounce)), "Per Ounce");
        assert_eq!(t.t(TranslationKey::unit_short(GoldUnit::Xi)), "Xi");
    }

    #[test]
    fn test_switch_language() {
        let mut t = Translator::default();
        assert_eq!(t.language(), Language::En);
        t.set_language(Language::Zh);
        assert_eq!(t.t(TranslationKey::Next), "下一步");
    }

    #[test]
    fn test_key_ids() {
        assert_eq!(TranslationKey::AppTitle.id(), "common.app_title");
        assert_eq!(TranslationKey::TipQuantity.to_string(), "common.tip_quantity");
    }
}
