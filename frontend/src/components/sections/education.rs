use common::content::EDUCATION;
use yew::{html, Component, Context, Html};

use super::{section_heading, tech_chips};

pub struct EducationSection;

impl Component for EducationSection {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        EducationSection
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section id="education">
                { section_heading("My Background", "Education", "My academic background and qualifications") }
                <div class="glass card">
                    <h3>{ EDUCATION.degree }</h3>
                    <p class="accent">{ EDUCATION.institution }</p>
                    <p class="meta">{ EDUCATION.duration }</p>
                    <span class="badge">{ EDUCATION.distinction }</span>
                    <h4>{ "Relevant Coursework" }</h4>
                    { tech_chips(EDUCATION.coursework) }
                </div>
            </section>
        }
    }
}
