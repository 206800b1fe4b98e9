//! Read-only sections of the page, rendered from `common::content`.

mod education;
mod experience;
mod footer;
mod hero;
mod projects;
mod skills;

pub use education::EducationSection;
pub use experience::ExperienceSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;

use yew::{html, Html};

/// Heading block shared by every section: eyebrow, title and subtitle.
fn section_heading(eyebrow: &str, title: &str, subtitle: &str) -> Html {
    html! {
        <div class="section-heading">
            <p class="eyebrow">{ eyebrow.to_string() }</p>
            <h2 class="gradient-text">{ title.to_string() }</h2>
            <p class="subtitle">{ subtitle.to_string() }</p>
        </div>
    }
}

fn tech_chips(items: &[&'static str]) -> Html {
    html! {
        <div class="chips">
            { for items.iter().map(|item| html! { <span class="chip">{ *item }</span> }) }
        </div>
    }
}
