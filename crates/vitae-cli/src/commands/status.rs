//! Status command - show the active language and CV section counts.

use std::path::PathBuf;

use colored::Colorize;
use vitae::{Cv, CvBundle, Environment, FilePreferenceStore, LanguagePreference};

pub fn run(
    en: PathBuf,
    es: PathBuf,
    json_output: bool,
    store: PathBuf,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let bundle = CvBundle::load(&en, &es)?;

    let environment = Environment::headless().with_store(FilePreferenceStore::new(&store));
    let preference = LanguagePreference::initialize(environment, None);
    let language = preference.language();

    if json_output {
        let status = serde_json::json!({
            "language": language.code(),
            "store": store.display().to_string(),
            "en": section_counts(&bundle.en),
            "es": section_counts(&bundle.es),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!(
            "{} {}",
            "Active language:".cyan().bold(),
            language.code().white().bold()
        );
        println!("Preference store: {}", store.display());
        println!();

        for (label, cv) in [("English", &bundle.en), ("Spanish", &bundle.es)] {
            println!("{}", format!("{} CV:", label).yellow().bold());
            println!("  Work entries: {}", cv.work.len());
            println!("  Education:    {}", cv.education.len());
            println!("  Projects:     {}", cv.projects.len());
            println!("  Skills:       {}", cv.skills.len());
        }
        println!();
        println!(
            "Run {} to switch languages.",
            "vitae lang toggle".cyan().bold()
        );
    }

    Ok(())
}

fn section_counts(cv: &Cv) -> serde_json::Value {
    serde_json::json!({
        "work": cv.work.len(),
        "education": cv.education.len(),
        "projects": cv.projects.len(),
        "skills": cv.skills.len(),
    })
}
