//! The language preference cell: initialization, mutation, side effects.

use super::environment::Environment;
use super::Language;

/// Storage key for the persisted language code.
pub const LANGUAGE_KEY: &str = "resume-language";

/// Language used when nothing is persisted and no caller default is given.
pub const DEFAULT_LANGUAGE: Language = Language::En;

/// Single source of truth for the active display language.
///
/// Owns the current [`Language`] and the [`Environment`] its side effects
/// run against. Initialization precedence: persisted value, then the
/// caller-supplied default, then [`DEFAULT_LANGUAGE`]. Every change
/// (including the initialization itself) writes the code back through
/// the persistence port and mirrors it into the document port.
pub struct LanguagePreference {
    language: Language,
    environment: Environment,
}

impl LanguagePreference {
    /// Initialize the preference from the environment.
    ///
    /// A persisted value that does not parse as a supported code is
    /// treated as absent. In a headless environment the store is never
    /// consulted and `initial` (or the default) wins directly.
    pub fn initialize(environment: Environment, initial: Option<Language>) -> Self {
        let persisted = environment
            .read_preference(LANGUAGE_KEY)
            .and_then(|code| code.parse().ok());

        let language = persisted.or(initial).unwrap_or(DEFAULT_LANGUAGE);

        let mut preference = Self {
            language,
            environment,
        };
        preference.apply_side_effects();
        preference
    }

    /// The current language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Replace the current language and run the side effects.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.apply_side_effects();
    }

    /// Flip `en ↔ es` and run the side effects.
    pub fn toggle_language(&mut self) {
        self.set_language(self.language.toggled());
    }

    fn apply_side_effects(&mut self) {
        self.environment.apply(LANGUAGE_KEY, self.language.code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::environment::PreferenceStore;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Store backed by a shared map so tests can observe writes after
    /// the environment takes ownership of the port.
    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<HashMap<String, String>>>);

    impl PreferenceStore for SharedStore {
        fn read(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn write(&mut self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    fn stored(store: &SharedStore) -> Option<String> {
        store.0.borrow().get(LANGUAGE_KEY).cloned()
    }

    #[test]
    fn test_defaults_to_english_without_store_or_initial() {
        let preference = LanguagePreference::initialize(Environment::headless(), None);
        assert_eq!(preference.language(), Language::En);
    }

    #[test]
    fn test_initial_language_wins_when_nothing_persisted() {
        let store = SharedStore::default();
        let env = Environment::headless().with_store(store.clone());

        let preference = LanguagePreference::initialize(env, Some(Language::Es));
        assert_eq!(preference.language(), Language::Es);
        // Initialization already writes the selection back.
        assert_eq!(stored(&store).as_deref(), Some("es"));
    }

    #[test]
    fn test_persisted_value_takes_precedence_over_initial() {
        let store = SharedStore::default();
        store
            .0
            .borrow_mut()
            .insert(LANGUAGE_KEY.to_string(), "es".to_string());
        let env = Environment::headless().with_store(store.clone());

        let preference = LanguagePreference::initialize(env, Some(Language::En));
        assert_eq!(preference.language(), Language::Es);
    }

    #[test]
    fn test_unrecognized_persisted_code_is_ignored() {
        let store = SharedStore::default();
        store
            .0
            .borrow_mut()
            .insert(LANGUAGE_KEY.to_string(), "de".to_string());
        let env = Environment::headless().with_store(store.clone());

        let preference = LanguagePreference::initialize(env, None);
        assert_eq!(preference.language(), Language::En);
    }

    #[test]
    fn test_set_language_persists() {
        let store = SharedStore::default();
        let env = Environment::headless().with_store(store.clone());
        let mut preference = LanguagePreference::initialize(env, None);

        preference.set_language(Language::Es);
        assert_eq!(stored(&store).as_deref(), Some("es"));

        preference.set_language(Language::En);
        assert_eq!(stored(&store).as_deref(), Some("en"));
    }

    #[test]
    fn test_toggle_twice_returns_to_original() {
        let mut preference = LanguagePreference::initialize(Environment::headless(), None);
        let original = preference.language();

        preference.toggle_language();
        assert_ne!(preference.language(), original);

        preference.toggle_language();
        assert_eq!(preference.language(), original);
    }
}
