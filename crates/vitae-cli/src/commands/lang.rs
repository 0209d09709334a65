//! Lang command - read or mutate the persisted language preference.

use std::path::PathBuf;

use colored::Colorize;
use vitae::{Environment, FilePreferenceStore, LanguagePreference};

use crate::cli::LangAction;

pub fn run(
    action: LangAction,
    store: PathBuf,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let environment = Environment::headless().with_store(FilePreferenceStore::new(&store));
    let mut preference = LanguagePreference::initialize(environment, None);

    if verbose {
        eprintln!("Preference store: {}", store.display());
    }

    match action {
        LangAction::Get => {
            println!("{}", preference.language().code());
        }
        LangAction::Set { language } => {
            preference.set_language(language);
            println!(
                "{} {}",
                "Language set to".green().bold(),
                language.code().white()
            );
        }
        LangAction::Toggle => {
            let previous = preference.language();
            preference.toggle_language();
            println!(
                "{} {} {} {}",
                "Language toggled:".green().bold(),
                previous.code(),
                "→".white(),
                preference.language().code().white().bold()
            );
        }
    }

    Ok(())
}
