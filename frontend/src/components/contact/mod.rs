//! Contact form: root module wiring the Yew `Component` implementation with
//! submodules for state, messages, update logic and view rendering.
//!
//! Field rules and the submission lifecycle live in
//! `common::contact::SubmissionForm`; this component only forwards DOM events
//! to it and carries out the effects it returns (the POST request and the
//! reset timer).

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::ContactComponent;

impl Component for ContactComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ContactComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
