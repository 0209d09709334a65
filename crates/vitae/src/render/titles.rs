//! The five fixed résumé sections and their localized titles.

use crate::language::Language;

/// One of the five fixed résumé sections.
///
/// The render order is [`Section::ORDER`] and is a contract of the
/// output, independent of input data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Experience,
    Education,
    Projects,
    Skills,
}

impl Section {
    /// Fixed render order: about, experience, education, projects, skills.
    pub const ORDER: [Section; 5] = [
        Section::About,
        Section::Experience,
        Section::Education,
        Section::Projects,
        Section::Skills,
    ];

    /// The `data-section` tag value.
    pub fn key(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Projects => "projects",
            Section::Skills => "skills",
        }
    }
}

/// Fully populated per-language section title table.
///
/// Exactly two tables exist, one per supported language; a missing
/// title for a supported language is impossible by construction.
#[derive(Debug, Clone, Copy)]
pub struct SectionTitles {
    pub about: &'static str,
    pub experience: &'static str,
    pub education: &'static str,
    pub projects: &'static str,
    pub skills: &'static str,
}

const TITLES_EN: SectionTitles = SectionTitles {
    about: "About",
    experience: "Work Experience",
    education: "Education",
    projects: "Projects",
    skills: "Skills",
};

const TITLES_ES: SectionTitles = SectionTitles {
    about: "Sobre mí",
    experience: "Experiencia laboral",
    education: "Educación",
    projects: "Proyectos",
    skills: "Habilidades",
};

impl SectionTitles {
    /// The title table for `language`.
    pub fn for_language(language: Language) -> &'static SectionTitles {
        match language {
            Language::En => &TITLES_EN,
            Language::Es => &TITLES_ES,
        }
    }

    /// The title for one section.
    pub fn title(&self, section: Section) -> &'static str {
        match section {
            Section::About => self.about,
            Section::Experience => self.experience,
            Section::Education => self.education,
            Section::Projects => self.projects,
            Section::Skills => self.skills,
        }
    }
}

/// Accessible label for a project link.
pub fn project_link_label(language: Language, project_name: &str) -> String {
    match language {
        Language::En => format!("View project {}", project_name),
        Language::Es => format!("Ver el proyecto {}", project_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_tables_fully_populated() {
        for language in [Language::En, Language::Es] {
            let titles = SectionTitles::for_language(language);
            for section in Section::ORDER {
                assert!(!titles.title(section).is_empty());
            }
        }
    }

    #[test]
    fn test_order_is_the_documented_contract() {
        let keys: Vec<&str> = Section::ORDER.iter().map(Section::key).collect();
        assert_eq!(
            keys,
            ["about", "experience", "education", "projects", "skills"]
        );
    }

    #[test]
    fn test_project_link_label_localized() {
        assert_eq!(
            project_link_label(Language::En, "X"),
            "View project X"
        );
        assert_eq!(
            project_link_label(Language::Es, "X"),
            "Ver el proyecto X"
        );
    }
}
