//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use vitae::Language;

/// Vitae: bilingual resume renderer
#[derive(Parser)]
#[command(name = "vitae")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the preference store file
    #[arg(long, global = true, default_value = ".vitae/preferences.json")]
    pub store: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the resume as a complete HTML page
    Render {
        /// Path to the English CV JSON file
        #[arg(long, value_name = "FILE")]
        en: PathBuf,

        /// Path to the Spanish CV JSON file
        #[arg(long, value_name = "FILE")]
        es: PathBuf,

        /// Output path for the HTML page (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Initial language when nothing is persisted yet
        #[arg(long)]
        lang: Option<Language>,
    },

    /// Read or change the persisted language preference
    Lang {
        #[command(subcommand)]
        action: LangAction,
    },

    /// Show the active language and CV section counts
    Status {
        /// Path to the English CV JSON file
        #[arg(long, value_name = "FILE")]
        en: PathBuf,

        /// Path to the Spanish CV JSON file
        #[arg(long, value_name = "FILE")]
        es: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum LangAction {
    /// Print the active language
    Get,
    /// Set the language (en or es)
    Set {
        #[arg(value_name = "LANG")]
        language: Language,
    },
    /// Flip between en and es
    Toggle,
}
