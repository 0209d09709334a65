//! CV content model - one snapshot per language.
//!
//! Field names on the wire follow the JSON-Resume-style camelCase used
//! by the source data files (`startDate`, `endDate`, `isActive`). The
//! renderer treats a structurally valid [`Cv`] as a contract; the only
//! documented optionality is `endDate: null` meaning an ongoing role.

use serde::{Deserialize, Serialize};

/// A per-language snapshot of résumé content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cv {
    /// Identity and summary text.
    pub basics: Basics,
    /// Job history, newest first by convention (order is preserved).
    pub work: Vec<WorkEntry>,
    /// Education history (order is preserved).
    pub education: Vec<EducationEntry>,
    /// Personal/professional projects (order is preserved).
    pub projects: Vec<Project>,
    /// Skill names (order is preserved, uniqueness assumed not enforced).
    pub skills: Vec<Skill>,
}

/// Identity block of the CV.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Basics {
    /// Full name, used for the page header and title when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Professional label (e.g. "Software Engineer").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Free-text summary rendered in the about section.
    pub summary: String,
}

/// One job entry in the work history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    /// Employer name.
    pub name: String,
    /// Role/position title.
    pub position: String,
    /// Start date string (ISO `YYYY-MM-DD` expected).
    pub start_date: String,
    /// End date string; `null` signals an ongoing role.
    pub end_date: Option<String>,
    /// Free-text description of the role.
    pub summary: String,
}

/// One education entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    /// Institution name.
    pub institution: String,
    /// Area of study.
    pub area: String,
}

/// One project entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project name; doubles as the link text.
    pub name: String,
    /// Link target for the project title.
    pub url: String,
    /// Short description.
    pub description: String,
    /// Whether the project is actively maintained (shows a marker).
    pub is_active: bool,
    /// Short highlight tags, rendered inline in input order.
    pub highlights: Vec<String>,
}

/// One skill entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name.
    pub name: String,
}
