//! Rendering: CV sections to an ordered HTML markup tree.
//!
//! [`ResumeRenderer`] is the pure projection (language + snapshots →
//! fragment); [`ResumeApp`] is the render root that owns the language
//! provider and wraps the fragment into a complete page.

mod app;
mod dates;
mod markup;
mod resume;
mod titles;

pub use app::ResumeApp;
pub use dates::{format_range, format_year};
pub use markup::{Fragment, Node};
pub use resume::ResumeRenderer;
pub use titles::{project_link_label, Section, SectionTitles};
