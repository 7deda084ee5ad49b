use axum::response::IntoResponse;
use folio_contact::ContactSubmission;

use crate::{config::SiteConfig, template::Template};

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Visualization",
        skills: &[
            Skill {
                name: "Power BI",
                level: 95,
            },
            Skill {
                name: "Tableau",
                level: 85,
            },
            Skill {
                name: "Data walls",
                level: 90,
            },
        ],
    },
    SkillGroup {
        title: "Data",
        skills: &[
            Skill {
                name: "SQL",
                level: 90,
            },
            Skill {
                name: "Excel",
                level: 95,
            },
            Skill {
                name: "Python",
                level: 75,
            },
        ],
    },
    SkillGroup {
        title: "Web",
        skills: &[
            Skill {
                name: "HTML & CSS",
                level: 80,
            },
            Skill {
                name: "JavaScript",
                level: 70,
            },
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Sales Performance Dashboard",
        category: "dashboards",
        description: "Interactive Power BI dashboard tracking regional sales against targets.",
        tags: &["Power BI", "DAX", "SQL"],
    },
    Project {
        title: "Operations Data Wall",
        category: "data-walls",
        description: "Wall-mounted live view of warehouse throughput and backlog.",
        tags: &["Data walls", "Excel"],
    },
    Project {
        title: "Customer Churn Analysis",
        category: "analysis",
        description: "Cohort analysis surfacing the drivers behind subscription churn.",
        tags: &["Python", "SQL"],
    },
];

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub site: &'a SiteConfig,
    pub skill_groups: &'static [SkillGroup],
    pub projects: &'static [Project],
    pub fields: &'a ContactSubmission,
}

pub async fn page(template: Template) -> impl IntoResponse {
    let fields = ContactSubmission::default();

    template.render(IndexTemplate {
        site: &template.site,
        skill_groups: SKILL_GROUPS,
        projects: PROJECTS,
        fields: &fields,
    })
}
