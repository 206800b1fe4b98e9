use common::content::{Experience, EXPERIENCES};
use yew::{html, Component, Context, Html};

use super::{section_heading, tech_chips};

pub struct ExperienceSection;

impl Component for ExperienceSection {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ExperienceSection
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section id="experience">
                { section_heading("My Journey", "Experience", "Where I've worked and what I've built") }
                <div class="timeline">
                    { for EXPERIENCES.iter().map(experience_card) }
                </div>
            </section>
        }
    }
}

fn experience_card(exp: &Experience) -> Html {
    html! {
        <article class="glass card timeline-entry">
            <header>
                <h3>{ exp.title }</h3>
                <p class="accent">{ exp.company }</p>
                <p class="meta">{ format!("{} · {}", exp.duration, exp.location) }</p>
            </header>
            <ul class="highlights">
                { for exp.highlights.iter().map(|h| html! { <li>{ *h }</li> }) }
            </ul>
            { tech_chips(exp.tech_stack) }
        </article>
    }
}
