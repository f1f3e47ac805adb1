//! Home page - the single-page portfolio.
//!
//! Sections in page order: hero, about, experience, projects, skills,
//! contact. The project detail modal and the scroll-to-top button sit above
//! the page content.

use chrono::Datelike;
use dioxus::prelude::*;
use portfolio_core::Section;

use crate::components::{ContactFormView, NavHeader, ProjectGallery, ProjectModal, ScrollToTop};
use crate::context::use_presentation_config;
use crate::dom;

/// Skill groups shown in the skills section
const SKILL_GROUPS: &[(&str, &[&str])] = &[
    ("Languages", &["Python", "SQL", "JavaScript", "MATLAB", "HTML/CSS"]),
    ("Data", &["Data Analysis", "Data Visualization", "Power BI", "Database Design"]),
    ("Engineering", &["Battery Testing", "Experimental Design", "Automation", "Scientific Modeling"]),
];

/// Experience entries: (organization, summary)
const EXPERIENCE: &[(&str, &str)] = &[
    (
        "Tesla battery team",
        "Validation pipelines and analysis tooling for cell electrical test data.",
    ),
    (
        "Third Coast Supply Company",
        "The auction platform and the internal inventory system.",
    ),
    (
        "UC Berkeley Combustion Modeling Lab",
        "Multi-species gas diffusion modeling and validation experiments.",
    ),
];

#[component]
pub fn Home() -> Element {
    let config = use_presentation_config();
    let header_offset = config.header_offset;
    let year = chrono::Local::now().year();

    rsx! {
        NavHeader {}

        main { class: "page",
            section { id: "{Section::Home.id()}", class: "hero",
                h1 { class: "hero-title", "Engineering Portfolio" }
                p { class: "hero-subtitle",
                    "Data pipelines, test automation and tools that save people time."
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        spawn(dom::scroll_to_section(Section::Projects, header_offset));
                    },
                    "View Projects"
                }
            }

            section { id: "{Section::About.id()}", class: "section about",
                h2 { class: "section-title", "About" }
                p {
                    "Engineer working where hardware testing meets software. "
                    "Most of these projects started as a slow manual process and ended as a single button."
                }
            }

            section { id: "{Section::Experience.id()}", class: "section experience",
                h2 { class: "section-title", "Experience" }
                div { class: "timeline",
                    for (org, summary) in EXPERIENCE.iter() {
                        div { key: "{org}", class: "timeline-item",
                            h3 { "{org}" }
                            p { "{summary}" }
                        }
                    }
                }
            }

            section { id: "{Section::Projects.id()}", class: "section projects",
                h2 { class: "section-title", "Projects" }
                ProjectGallery {}
            }

            section { id: "{Section::Skills.id()}", class: "section skills",
                h2 { class: "section-title", "Skills" }
                div { class: "skills-grid",
                    for (group, skills) in SKILL_GROUPS.iter() {
                        div { key: "{group}", class: "skill-group",
                            h3 { "{group}" }
                            ul { class: "project-tech",
                                for skill in skills.iter() {
                                    li { key: "{skill}", class: "tech-tag", "{skill}" }
                                }
                            }
                        }
                    }
                }
            }

            section { id: "{Section::Contact.id()}", class: "section contact",
                h2 { class: "section-title", "Contact" }
                ContactFormView {}
            }
        }

        footer { class: "footer",
            p { "\u{00A9} {year} Portfolio" }
        }

        ProjectModal {}
        ScrollToTop {}
    }
}
