use common::content::{MORE_PROJECTS_URL, PROJECTS};
use common::model::project::{Project, ProjectLinks};
use yew::{html, Component, Context, Html};

use super::{section_heading, tech_chips};

pub struct ProjectsSection;

impl Component for ProjectsSection {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ProjectsSection
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section id="projects">
                { section_heading("My Work", "Featured Projects", "Some of the projects I've worked on that showcase my skills") }
                <div class="project-grid">
                    { for PROJECTS.iter().map(project_card) }
                </div>
                <a class="more-link" href={MORE_PROJECTS_URL} target="_blank" rel="noopener noreferrer">
                    { "View more projects on GitHub" }
                </a>
            </section>
        }
    }
}

fn project_card(project: &Project) -> Html {
    html! {
        <article class="glass card project">
            <div class="project-title">
                <h3>{ project.title }</h3>
                { project_links(&project.links) }
            </div>
            <p>{ project.description }</p>
            <h4>{ "Key Features" }</h4>
            <ul class="highlights">
                { for project.features.iter().map(|f| html! { <li>{ *f }</li> }) }
            </ul>
            { tech_chips(project.tech_stack) }
        </article>
    }
}

fn project_links(links: &ProjectLinks) -> Html {
    match links {
        ProjectLinks::Private => html! {
            <span class="private-badge">{ "Private" }</span>
        },
        ProjectLinks::SingleRepo(_) | ProjectLinks::MultiRepo(_) => html! {
            <div class="repo-links">
                { for links.repos().into_iter().map(|repo| html! {
                    <a class="repo-link" href={repo.url} target="_blank" rel="noopener noreferrer">
                        { repo.label }
                    </a>
                }) }
            </div>
        },
        ProjectLinks::Hidden => Html::default(),
    }
}
