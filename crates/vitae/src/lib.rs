//! Vitae: bilingual résumé rendering with a persisted language preference.
//!
//! Vitae renders a structured English/Spanish CV into HTML markup. The
//! active language lives in a single preference cell, initialized from a
//! persisted store and written back on every change; rendering is a pure
//! projection from the selected snapshot to a fixed-order section tree.
//!
//! # Example
//!
//! ```no_run
//! use vitae::{CvBundle, Environment, FilePreferenceStore, ResumeApp};
//!
//! let bundle = CvBundle::load("cv.en.json", "cv.es.json").unwrap();
//! let environment =
//!     Environment::headless().with_store(FilePreferenceStore::new(".vitae/preferences.json"));
//!
//! let app = ResumeApp::new(bundle, environment, None);
//! println!("{}", app.render_page().unwrap());
//! ```

pub mod cv;
pub mod error;
pub mod language;
pub mod render;

pub use cv::{Basics, Cv, CvBundle, EducationEntry, Project, Skill, WorkEntry};
pub use error::{Result, VitaeError};
pub use language::{
    DocumentRoot, Environment, FilePreferenceStore, Language, LanguageContext,
    LanguagePreference, PreferenceStore, RecordingDocument, DEFAULT_LANGUAGE, LANGUAGE_KEY,
};
pub use render::{
    format_range, format_year, Fragment, Node, ResumeApp, ResumeRenderer, Section, SectionTitles,
};
