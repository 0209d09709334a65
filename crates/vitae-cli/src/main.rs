//! Vitae CLI - bilingual resume renderer.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            en,
            es,
            output,
            lang,
        } => commands::render::run(en, es, output, lang, cli.store, cli.verbose),

        Commands::Lang { action } => commands::lang::run(action, cli.store, cli.verbose),

        Commands::Status { en, es, json } => {
            commands::status::run(en, es, json, cli.store, cli.verbose)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
