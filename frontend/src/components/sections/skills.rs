use common::content::SKILL_CATEGORIES;
use yew::{html, Component, Context, Html};

use super::{section_heading, tech_chips};

pub struct SkillsSection;

impl Component for SkillsSection {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        SkillsSection
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section id="skills">
                { section_heading("What I Work With", "Skills", "Technologies and tools I use to bring ideas to life") }
                <div class="skill-grid">
                    { for SKILL_CATEGORIES.iter().map(|category| html! {
                        <div class="glass card">
                            <h3>{ category.title }</h3>
                            { tech_chips(category.skills) }
                        </div>
                    }) }
                </div>
            </section>
        }
    }
}
