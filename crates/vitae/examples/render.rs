//! Example: render the demo CV as a full HTML page.
//!
//! Usage:
//!   cargo run --example render -- [en|es]
//!
//! Example:
//!   cargo run --example render -- es > resume.html

use std::env;

use vitae::{CvBundle, Environment, Language, ResumeApp};

fn main() -> vitae::Result<()> {
    let initial = env::args()
        .nth(1)
        .map(|code| code.parse::<Language>())
        .transpose()?;

    let bundle = CvBundle::load("test_data/cv.en.json", "test_data/cv.es.json")?;

    // Headless: no preference store, the argument (or the default) wins.
    let app = ResumeApp::new(bundle, Environment::headless(), initial);

    println!("{}", app.render_page()?);
    Ok(())
}
