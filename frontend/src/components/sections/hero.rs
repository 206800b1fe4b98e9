use common::content::PROFILE;
use yew::{html, Component, Context, Html};

pub struct HeroSection;

impl Component for HeroSection {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        HeroSection
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section id="home" class="hero">
                <p class="eyebrow">{ "Hello, I'm" }</p>
                <h1 class="gradient-text">{ PROFILE.name }</h1>
                <h2>
                    { format!("{} at ", PROFILE.role) }
                    <span class="accent">{ PROFILE.company }</span>
                </h2>
                <p class="bio">{ PROFILE.bio }</p>
                <div class="hero-actions">
                    <a class="btn-primary" href="#contact">{ "Get In Touch" }</a>
                    <a class="btn-secondary" href={format!("mailto:{}", PROFILE.email)}>
                        { PROFILE.email }
                    </a>
                </div>
                <ul class="socials">
                    { for PROFILE.socials.iter().map(|social| html! {
                        <li>
                            <a href={social.href} target="_blank" rel="noopener noreferrer">
                                { social.name }
                            </a>
                        </li>
                    }) }
                </ul>
            </section>
        }
    }
}
