//! Static content of the portfolio page.
//!
//! Plain data rendered by the frontend sections. Keeping it here lets the
//! navigation and section ids be checked against each other in tests.

use crate::model::project::{Project, ProjectLinks};

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub bio: &'static str,
    pub email: &'static str,
    pub socials: &'static [SocialLink],
}

pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub struct NavLink {
    pub name: &'static str,
    /// Id of the target section, without the leading `#`.
    pub section: &'static str,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub highlights: &'static [&'static str],
    pub tech_stack: &'static [&'static str],
}

pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub duration: &'static str,
    pub distinction: &'static str,
    pub coursework: &'static [&'static str],
}

pub const PROFILE: Profile = Profile {
    name: "Vandan Sheth",
    role: "Software Engineer",
    company: "OneIT",
    bio: "I build things for the Web. Passionate about creating scalable enterprise \
          applications with clean architecture, AI integration, and modern web technologies.",
    email: "vandansheth.work@gmail.com",
    socials: &[
        SocialLink {
            name: "LinkedIn",
            href: "https://www.linkedin.com/in/vandan-sheth08/",
        },
        SocialLink {
            name: "GitHub",
            href: "https://github.com/vandan08",
        },
    ],
};

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", section: "home" },
    NavLink { name: "Skills", section: "skills" },
    NavLink { name: "Experience", section: "experience" },
    NavLink { name: "Projects", section: "projects" },
    NavLink { name: "Education", section: "education" },
    NavLink { name: "Contact", section: "contact" },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Languages",
        skills: &[
            "Java",
            "JavaScript",
            "TypeScript",
            "Python",
            "Ruby",
            "Solidity",
            "SQL",
            "Shell",
        ],
    },
    SkillCategory {
        title: "Frameworks & Libraries",
        skills: &[
            "Spring Boot",
            "Hibernate",
            "Angular",
            "React.js",
            "Node.js",
            "Express.js",
        ],
    },
    SkillCategory {
        title: "Databases",
        skills: &["PostgreSQL", "MySQL", "MongoDB"],
    },
    SkillCategory {
        title: "AI Engineering",
        skills: &["RAG", "CAG", "MCP", "Spring AI", "Vector DB", "Context Design"],
    },
    SkillCategory {
        title: "Tools & Platforms",
        skills: &[
            "Git",
            "GitHub",
            "Docker",
            "Jenkins",
            "Postman",
            "IntelliJ IDEA",
            "VS Code",
            "Render",
        ],
    },
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Software Engineer",
        company: "OneIT",
        location: "Remote",
        duration: "Jul 2024 - Present",
        highlights: &[
            "Built scalable backend modules using Core Java and RESTful APIs to streamline enterprise workflows",
            "Built an AI Wrapper supporting multiple LLM providers (OpenAI, Anthropic) with unified API abstraction",
            "Implemented Model Context Protocol (MCP)-based workflows to manage contextual memory, tool usage, and knowledge grounding across AI-powered projects",
            "Integrated Eway Payment Gateway and Chargebee for secure payments and automated billing",
            "Worked on automated code generation using Ruby-based pipelines, enabling faster UI scaffolding",
            "Migrated the entire frontend from Angular 9 to Angular 19, improving performance and maintainability",
        ],
        tech_stack: &[
            "Core Java",
            "RESTful APIs",
            "Angular 19",
            "TypeScript",
            "PostgreSQL",
            "Ruby",
            "MCP",
            "AI Integration",
        ],
    },
    Experience {
        title: "Software Engineer Intern",
        company: "TEACHNOOKPRO",
        location: "Bangalore, India",
        duration: "Aug 2023 - Nov 2023",
        highlights: &[
            "Gained hands-on experience in JavaScript, React.js, Node.js, and Tailwind CSS through practical assignments",
            "Built small-scale web components and APIs to strengthen full-stack development fundamentals",
            "Demonstrated quick adaptability by learning new frameworks and tools within short timelines",
        ],
        tech_stack: &["JavaScript", "React.js", "Node.js", "Tailwind CSS"],
    },
];

pub const EDUCATION: Education = Education {
    degree: "Bachelor of Computer Application",
    institution: "Indus University",
    duration: "Aug 2021 - Jun 2024",
    distinction: "First Class with Distinction",
    coursework: &[
        "Data Structures & Algorithms",
        "Software Architecture",
        "Database Management",
        "Full-Stack Development",
        "Cloud Computing",
        "Computer Networks",
        "Agile Engineering",
    ],
};

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Aveling LMS Portal",
        description: "A flagship enterprise-grade Learning Management System tailored for Aveling \
                      Australia, offering a unified experience across client, trainer, and admin portals.",
        features: &[
            "Multi-role access: clients (individual/company), trainers, and admins",
            "Fully functional group booking and scheduling engine",
            "Invoice generation, company-level pricing, and payment management",
            "Secure Eway Payment Gateway integration",
        ],
        tech_stack: &[
            "Java",
            "Angular 19",
            "TypeScript",
            "REST APIs",
            "PostgreSQL",
            "Eway Gateway",
        ],
        links: ProjectLinks::Private,
    },
    Project {
        title: "Skyline Estate",
        description: "A modern real estate platform that breaks away from conventional limitations \
                      by allowing dynamic property type creation and better property discovery.",
        features: &[
            "Dynamic property type selection during listing creation",
            "Advanced filtering and category management",
            "User dashboard for property listing and management",
            "30% faster page load with optimized backend queries",
        ],
        tech_stack: &[
            "React.js",
            "Node.js",
            "Express.js",
            "MongoDB",
            "REST APIs",
            "Tailwind CSS",
        ],
        links: ProjectLinks::SingleRepo("https://github.com/vandan08/skyline-estate"),
    },
];

/// Profile page listing the rest of the public work.
pub const MORE_PROJECTS_URL: &str = "https://github.com/vandan08";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::project::RepoLink;
    use std::collections::HashSet;

    #[test]
    fn nav_sections_are_unique() {
        let sections: HashSet<_> = NAV_LINKS.iter().map(|l| l.section).collect();
        assert_eq!(sections.len(), NAV_LINKS.len());
        assert!(sections.contains("contact"));
    }

    #[test]
    fn public_projects_expose_their_repositories() {
        for project in PROJECTS {
            match project.links {
                ProjectLinks::Private | ProjectLinks::Hidden => {
                    assert!(project.links.repos().is_empty())
                }
                ProjectLinks::SingleRepo(_) | ProjectLinks::MultiRepo(_) => {
                    let repos = project.links.repos();
                    assert!(!repos.is_empty());
                    assert!(repos.iter().all(|r| r.url.starts_with("https://")))
                }
            }
        }
    }

    #[test]
    fn multi_repo_links_keep_display_order() {
        const LINKS: &[RepoLink] = &[
            RepoLink { label: "API", url: "https://example.com/api" },
            RepoLink { label: "Web", url: "https://example.com/web" },
        ];
        assert_eq!(ProjectLinks::MultiRepo(LINKS).repos(), LINKS.to_vec());
    }

    #[test]
    fn single_repo_is_labelled_github() {
        assert_eq!(
            ProjectLinks::SingleRepo("https://example.com/app").repos(),
            vec![RepoLink { label: "GitHub", url: "https://example.com/app" }]
        );
    }
}
