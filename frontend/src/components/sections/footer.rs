use common::content::PROFILE;
use yew::{html, Component, Context, Html};

pub struct Footer;

impl Component for Footer {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Footer
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <footer class="site-footer">
                <p>{ format!("Designed & built by {}", PROFILE.name) }</p>
            </footer>
        }
    }
}
