//! Environment ports for the language preference's side effects.
//!
//! In a browser the preference would live in `localStorage` and mirror
//! into `document.documentElement.lang`. Here both capabilities are
//! injected as optional ports: an [`Environment`] without a port makes
//! the corresponding side effect a no-op by construction, so headless
//! callers (tests, pre-render) never touch persistence or a document.

use std::cell::RefCell;
use std::rc::Rc;

/// Durable key-value storage for the language preference.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    ///
    /// An unreadable or missing backing store reads as `None`; absence
    /// is a valid state ("no preference set").
    fn read(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// Failures are swallowed: the in-memory preference is the source
    /// of truth and a missed write only loses durability.
    fn write(&mut self, key: &str, value: &str);
}

/// The document root whose lang attribute mirrors the selection.
pub trait DocumentRoot {
    /// Set the document-level locale attribute to `code`.
    fn set_lang_attribute(&mut self, code: &str);
}

/// Capability bundle handed to [`LanguagePreference`](super::LanguagePreference).
///
/// Each port is optional. `Environment::headless()` carries neither,
/// which skips all side effects while the in-memory state still updates.
#[derive(Default)]
pub struct Environment {
    store: Option<Box<dyn PreferenceStore>>,
    document: Option<Box<dyn DocumentRoot>>,
}

impl Environment {
    /// An environment with no persistence and no document.
    pub fn headless() -> Self {
        Self::default()
    }

    /// Attach a persistence port.
    pub fn with_store(mut self, store: impl PreferenceStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Attach a document port.
    pub fn with_document(mut self, document: impl DocumentRoot + 'static) -> Self {
        self.document = Some(Box::new(document));
        self
    }

    /// Read a persisted value, if a store is attached and has one.
    pub(super) fn read_preference(&self, key: &str) -> Option<String> {
        self.store.as_ref().and_then(|store| store.read(key))
    }

    /// Apply the selection side effects: persist the code and mirror it
    /// into the document lang attribute. Absent ports are skipped.
    pub(super) fn apply(&mut self, key: &str, code: &str) {
        if let Some(store) = self.store.as_mut() {
            store.write(key, code);
        }
        if let Some(document) = self.document.as_mut() {
            document.set_lang_attribute(code);
        }
    }
}

/// In-memory document root that records the last lang attribute set.
///
/// Clones share the recorded state, so a caller can keep one handle and
/// observe attributes applied through the environment-owned clone.
/// Stands in for a real document in tests and headless rendering.
#[derive(Debug, Default, Clone)]
pub struct RecordingDocument {
    lang: Rc<RefCell<Option<String>>>,
}

impl RecordingDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last lang attribute applied, if any.
    pub fn lang(&self) -> Option<String> {
        self.lang.borrow().clone()
    }
}

impl DocumentRoot for RecordingDocument {
    fn set_lang_attribute(&mut self, code: &str) {
        *self.lang.borrow_mut() = Some(code.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapStore(HashMap<String, String>);

    impl PreferenceStore for MapStore {
        fn read(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn write(&mut self, key: &str, value: &str) {
            self.0.insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn test_headless_reads_nothing_and_apply_is_noop() {
        let mut env = Environment::headless();
        assert_eq!(env.read_preference("resume-language"), None);
        env.apply("resume-language", "es");
    }

    #[test]
    fn test_apply_writes_store_and_document() {
        let document = RecordingDocument::new();
        let mut env = Environment::headless()
            .with_store(MapStore(HashMap::new()))
            .with_document(document.clone());

        env.apply("resume-language", "es");
        assert_eq!(env.read_preference("resume-language").as_deref(), Some("es"));
        assert_eq!(document.lang().as_deref(), Some("es"));
    }
}
