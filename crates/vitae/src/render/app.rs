//! The render root: owns the language provider and produces full pages.

use crate::cv::CvBundle;
use crate::error::Result;
use crate::language::{Environment, Language, LanguageContext, LanguagePreference};

use super::markup::{Fragment, Node};
use super::resume::ResumeRenderer;

/// Render root tying the language provider to the application lifetime.
///
/// Construction establishes the provider scope: the preference is
/// initialized from the given [`Environment`] (persisted value > caller
/// `initial` > `en`) and held in a [`LanguageContext`] owned by the app.
/// Dropping the app tears the scope down.
pub struct ResumeApp {
    renderer: ResumeRenderer,
    context: LanguageContext,
}

impl ResumeApp {
    /// Build the app and establish the provider scope.
    pub fn new(bundle: CvBundle, environment: Environment, initial: Option<Language>) -> Self {
        let preference = LanguagePreference::initialize(environment, initial);
        Self {
            renderer: ResumeRenderer::new(bundle),
            context: LanguageContext::provide(preference),
        }
    }

    /// The active language.
    pub fn language(&self) -> Result<Language> {
        self.context.language()
    }

    /// Switch to `language`, persisting the change.
    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.context.set_language(language)
    }

    /// Flip `en ↔ es`, persisting the change.
    pub fn toggle_language(&mut self) -> Result<()> {
        self.context.toggle_language()
    }

    /// Render the five-section fragment for the active language.
    pub fn render(&self) -> Result<Fragment> {
        Ok(self.renderer.render(self.context.language()?))
    }

    /// Render a complete HTML document for the active language.
    ///
    /// The `<html lang>` attribute carries the active language code (the
    /// document-level side effect of the selection), the `<title>` and
    /// header come from `basics.name`/`basics.label` when present.
    pub fn render_page(&self) -> Result<String> {
        let language = self.context.language()?;
        let cv = self.renderer.bundle().for_language(language);
        let fragment = self.renderer.render(language);

        let title = cv.basics.name.as_deref().unwrap_or("Resume");

        let head = Node::element("head")
            .child(Node::element("meta").attr("charset", "utf-8"))
            .child(Node::element("title").child(Node::text(title)));

        let mut main = Node::element("main");
        if let Some(name) = &cv.basics.name {
            let mut header = Node::element("header")
                .child(Node::element("h1").child(Node::text(name)));
            if let Some(label) = &cv.basics.label {
                header = header.child(Node::element("p").child(Node::text(label)));
            }
            main = main.child(header);
        }
        main = main.children(fragment.nodes);

        let html = Node::element("html")
            .attr("lang", language.code())
            .child(head)
            .child(Node::element("body").child(main));

        Ok(format!("<!DOCTYPE html>{}", html.to_html()))
    }
}
