//! Language selection: the two supported languages, the preference cell
//! that persists the active choice, and the environment ports that carry
//! its side effects.
//!
//! The preference is a single mutable `Language` cell. It is initialized
//! once (persisted value > caller default > `en`), mutated only through
//! `set_language`/`toggle_language`, and every change is mirrored into
//! the environment: one key-value write under [`LANGUAGE_KEY`] plus the
//! document root's lang attribute.
//!
//! # Usage
//!
//! ```
//! use vitae::language::{Environment, Language, LanguageContext, LanguagePreference};
//!
//! let preference = LanguagePreference::initialize(Environment::headless(), None);
//! let mut context = LanguageContext::provide(preference);
//!
//! assert_eq!(context.language().unwrap(), Language::En);
//! context.toggle_language().unwrap();
//! assert_eq!(context.language().unwrap(), Language::Es);
//! ```

mod context;
mod environment;
mod preference;
mod store;

pub use context::LanguageContext;
pub use environment::{DocumentRoot, Environment, PreferenceStore, RecordingDocument};
pub use preference::{LanguagePreference, DEFAULT_LANGUAGE, LANGUAGE_KEY};
pub use store::FilePreferenceStore;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VitaeError;

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// Spanish.
    Es,
}

impl Language {
    /// The two-letter code used on the wire, in the preference store,
    /// and as the document lang attribute.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// The other supported language.
    pub fn toggled(&self) -> Language {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        DEFAULT_LANGUAGE
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = VitaeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            other => Err(VitaeError::InvalidLanguage(other.to_string())),
        }
    }
}
