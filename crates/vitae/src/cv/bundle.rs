//! Loading and selecting the two parallel CV snapshots.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::model::Cv;
use crate::error::{Result, VitaeError};
use crate::language::Language;

/// The two parallel CV snapshots, one per supported language.
///
/// The snapshots are structurally parallel (same section shapes) but
/// array lengths may differ between languages.
#[derive(Debug, Clone)]
pub struct CvBundle {
    /// English snapshot.
    pub en: Cv,
    /// Spanish snapshot.
    pub es: Cv,
}

impl CvBundle {
    /// Bundle two already-loaded snapshots.
    pub fn new(en: Cv, es: Cv) -> Self {
        Self { en, es }
    }

    /// Load both snapshots from JSON files.
    pub fn load(en_path: impl AsRef<Path>, es_path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            en: load_cv(en_path.as_ref())?,
            es: load_cv(es_path.as_ref())?,
        })
    }

    /// The active snapshot for `language`.
    pub fn for_language(&self, language: Language) -> &Cv {
        match language {
            Language::En => &self.en,
            Language::Es => &self.es,
        }
    }
}

/// Load a single CV from a JSON file.
pub fn load_cv(path: &Path) -> Result<Cv> {
    let file = File::open(path).map_err(|e| VitaeError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::new(file);
    let cv = serde_json::from_reader(reader)?;
    Ok(cv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL_CV: &str = r#"{
        "basics": {"summary": "Engineer."},
        "work": [],
        "education": [],
        "projects": [],
        "skills": [{"name": "Rust"}]
    }"#;

    fn write_cv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_load_bundle_from_files() {
        let en = write_cv(MINIMAL_CV);
        let es = write_cv(&MINIMAL_CV.replace("Engineer.", "Ingeniero."));

        let bundle = CvBundle::load(en.path(), es.path()).unwrap();
        assert_eq!(bundle.en.basics.summary, "Engineer.");
        assert_eq!(bundle.es.basics.summary, "Ingeniero.");
    }

    #[test]
    fn test_for_language_selects_matching_snapshot() {
        let en = write_cv(MINIMAL_CV);
        let es = write_cv(&MINIMAL_CV.replace("Engineer.", "Ingeniero."));
        let bundle = CvBundle::load(en.path(), es.path()).unwrap();

        assert_eq!(
            bundle.for_language(Language::En).basics.summary,
            "Engineer."
        );
        assert_eq!(
            bundle.for_language(Language::Es).basics.summary,
            "Ingeniero."
        );
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = CvBundle::load("/nonexistent/en.json", "/nonexistent/es.json").unwrap_err();
        assert!(matches!(err, VitaeError::Io { .. }));
    }

    #[test]
    fn test_malformed_json_is_a_json_error() {
        let broken = write_cv("{ not json");
        let ok = write_cv(MINIMAL_CV);

        let err = CvBundle::load(broken.path(), ok.path()).unwrap_err();
        assert!(matches!(err, VitaeError::Json(_)));
    }
}
