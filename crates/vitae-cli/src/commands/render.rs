//! Render command - produce the HTML page for the active language.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use vitae::{CvBundle, Environment, FilePreferenceStore, Language, ResumeApp};

pub fn run(
    en: PathBuf,
    es: PathBuf,
    output: Option<PathBuf>,
    lang: Option<Language>,
    store: PathBuf,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    for path in [&en, &es] {
        if !path.exists() {
            return Err(format!("CV file not found: {}", path.display()).into());
        }
    }

    let bundle = CvBundle::load(&en, &es)?;
    let environment = Environment::headless().with_store(FilePreferenceStore::new(&store));

    let app = ResumeApp::new(bundle, environment, lang);
    let language = app.language()?;

    if verbose {
        eprintln!(
            "{} {} (store: {})",
            "Rendering in".cyan().bold(),
            language.code().white(),
            store.display()
        );
    }

    let page = app.render_page()?;

    match output {
        Some(path) => {
            fs::write(&path, &page)?;
            println!(
                "{} {} ({} bytes, lang {})",
                "Saved to".green().bold(),
                path.display().to_string().white(),
                page.len(),
                language.code()
            );
        }
        None => println!("{}", page),
    }

    Ok(())
}
