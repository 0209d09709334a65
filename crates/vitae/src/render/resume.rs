//! Pure projection from `(Language, CV)` to the five-section fragment.

use crate::cv::{Cv, CvBundle, EducationEntry, Project, Skill, WorkEntry};
use crate::language::Language;

use super::dates::format_range;
use super::markup::{Fragment, Node};
use super::titles::{project_link_label, Section, SectionTitles};

/// Renders the résumé content for whichever language is active.
///
/// Holds the two parallel snapshots; [`render`](ResumeRenderer::render)
/// is a pure function of the language argument — no input mutation, no
/// side effects.
pub struct ResumeRenderer {
    bundle: CvBundle,
}

impl ResumeRenderer {
    pub fn new(bundle: CvBundle) -> Self {
        Self { bundle }
    }

    /// The underlying snapshots.
    pub fn bundle(&self) -> &CvBundle {
        &self.bundle
    }

    /// Render the five sections, in fixed order, for `language`.
    pub fn render(&self, language: Language) -> Fragment {
        let cv = self.bundle.for_language(language);
        let titles = SectionTitles::for_language(language);

        let nodes = Section::ORDER
            .iter()
            .map(|section| match section {
                Section::About => about_section(cv, titles),
                Section::Experience => experience_section(cv, titles, language),
                Section::Education => education_section(cv, titles),
                Section::Projects => projects_section(cv, titles, language),
                Section::Skills => skills_section(cv, titles),
            })
            .collect();

        Fragment::new(nodes)
    }
}

fn section_element(section: Section, titles: &SectionTitles) -> Node {
    Node::element("section")
        .attr("data-section", section.key())
        .child(Node::element("h2").child(Node::text(titles.title(section))))
}

fn about_section(cv: &Cv, titles: &SectionTitles) -> Node {
    section_element(Section::About, titles)
        .child(Node::element("p").child(Node::text(&cv.basics.summary)))
}

fn experience_section(cv: &Cv, titles: &SectionTitles, language: Language) -> Node {
    let entries = cv.work.iter().map(|job| work_item(job, language));
    section_element(Section::Experience, titles)
        .child(Node::element("ul").children(entries))
}

fn work_item(job: &WorkEntry, language: Language) -> Node {
    let years = format_range(&job.start_date, job.end_date.as_deref(), language);

    Node::element("li").child(
        Node::element("article")
            .child(
                Node::element("header")
                    .child(
                        Node::element("div")
                            .child(Node::element("h3").child(Node::text(&job.name)))
                            .child(Node::element("h4").child(Node::text(&job.position))),
                    )
                    .child(Node::element("time").child(Node::text(years))),
            )
            .child(
                Node::element("footer")
                    .child(Node::element("p").child(Node::text(&job.summary))),
            ),
    )
}

fn education_section(cv: &Cv, titles: &SectionTitles) -> Node {
    let entries = cv.education.iter().map(education_item);
    section_element(Section::Education, titles)
        .child(Node::element("ul").children(entries))
}

fn education_item(entry: &EducationEntry) -> Node {
    Node::element("li").child(
        Node::element("article")
            .child(
                Node::element("header").child(
                    Node::element("div")
                        .child(Node::element("h3").child(Node::text(&entry.institution))),
                ),
            )
            .child(
                Node::element("footer")
                    .child(Node::element("p").child(Node::text(&entry.area))),
            ),
    )
}

fn projects_section(cv: &Cv, titles: &SectionTitles, language: Language) -> Node {
    let entries = cv
        .projects
        .iter()
        .map(|project| project_item(project, language));
    section_element(Section::Projects, titles)
        .child(Node::element("ul").children(entries))
}

fn project_item(project: &Project, language: Language) -> Node {
    let mut heading = Node::element("h3").child(
        Node::element("a")
            .attr("href", &project.url)
            .attr("title", project_link_label(language, &project.name))
            .child(Node::text(&project.name)),
    );
    if project.is_active {
        heading = heading.child(Node::element("span").child(Node::text("•")));
    }

    let highlights = project
        .highlights
        .iter()
        .map(|highlight| Node::element("span").child(Node::text(highlight)));

    Node::element("li").child(
        Node::element("article")
            .child(
                Node::element("header")
                    .child(heading)
                    .child(Node::element("p").child(Node::text(&project.description))),
            )
            .child(Node::element("footer").children(highlights)),
    )
}

fn skills_section(cv: &Cv, titles: &SectionTitles) -> Node {
    let entries = cv.skills.iter().map(skill_item);
    section_element(Section::Skills, titles).child(Node::element("ul").children(entries))
}

fn skill_item(skill: &Skill) -> Node {
    Node::element("li").child(Node::element("span").child(Node::text(&skill.name)))
}
