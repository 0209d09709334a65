//! The bilingual CV data structure consumed by the renderer.

mod bundle;
mod model;

pub use bundle::CvBundle;
pub use model::{Basics, Cv, EducationEntry, Project, Skill, WorkEntry};
