use crate::components::contact::ContactComponent;
use crate::components::header::Header;
use crate::components::sections::{
    EducationSection, ExperienceSection, Footer, HeroSection, ProjectsSection, SkillsSection,
};
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                <Header />
                <main>
                    <HeroSection />
                    <SkillsSection />
                    <ExperienceSection />
                    <ProjectsSection />
                    <EducationSection />
                    <ContactComponent />
                </main>
                <Footer />
            </>
        }
    }
}
