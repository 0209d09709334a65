//! Explicit provider handle for the language preference.

use super::preference::LanguagePreference;
use super::Language;
use crate::error::{Result, VitaeError};

/// Handle through which components reach the language preference.
///
/// The render root constructs a providing context and threads it through
/// the call tree; its lifetime is the provider scope. A context without
/// a preference (`LanguageContext::empty()`) represents use outside that
/// scope, and every operation on it fails with
/// [`VitaeError::MissingLanguageProvider`] rather than silently
/// defaulting.
pub struct LanguageContext {
    preference: Option<LanguagePreference>,
}

impl LanguageContext {
    /// A context outside any provider scope. All operations fail.
    pub fn empty() -> Self {
        Self { preference: None }
    }

    /// A context providing `preference` for its lifetime.
    pub fn provide(preference: LanguagePreference) -> Self {
        Self {
            preference: Some(preference),
        }
    }

    /// The current language.
    pub fn language(&self) -> Result<Language> {
        self.preference
            .as_ref()
            .map(LanguagePreference::language)
            .ok_or(VitaeError::MissingLanguageProvider)
    }

    /// Replace the current language.
    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.preference_mut()?.set_language(language);
        Ok(())
    }

    /// Flip `en ↔ es`.
    pub fn toggle_language(&mut self) -> Result<()> {
        self.preference_mut()?.toggle_language();
        Ok(())
    }

    fn preference_mut(&mut self) -> Result<&mut LanguagePreference> {
        self.preference
            .as_mut()
            .ok_or(VitaeError::MissingLanguageProvider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Environment;

    #[test]
    fn test_empty_context_errors_on_every_operation() {
        let mut context = LanguageContext::empty();

        assert!(matches!(
            context.language(),
            Err(VitaeError::MissingLanguageProvider)
        ));
        assert!(matches!(
            context.set_language(Language::Es),
            Err(VitaeError::MissingLanguageProvider)
        ));
        assert!(matches!(
            context.toggle_language(),
            Err(VitaeError::MissingLanguageProvider)
        ));
    }

    #[test]
    fn test_providing_context_exposes_preference_operations() {
        let preference = LanguagePreference::initialize(Environment::headless(), None);
        let mut context = LanguageContext::provide(preference);

        assert_eq!(context.language().unwrap(), Language::En);
        context.set_language(Language::Es).unwrap();
        assert_eq!(context.language().unwrap(), Language::Es);
        context.toggle_language().unwrap();
        assert_eq!(context.language().unwrap(), Language::En);
    }
}
