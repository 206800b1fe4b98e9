//! Update function for the contact form component.
//!
//! Translates `Msg` into `FormEvent`, dispatches it to the form, and performs
//! the returned effect:
//! - `Send`: one POST to `/api/contact`, answered with `Msg::Sent`.
//! - `ScheduleReset`: a timer that answers with `Msg::ResetElapsed`.

use std::time::Duration;

use common::contact::{FormEffect, FormEvent};
use common::model::contact::{ContactMessage, ErrorBody};
use gloo_console::error;
use gloo_net::http::Request;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ContactComponent;

const CONTACT_ENDPOINT: &str = "/api/contact";

/// Central update function for the component.
///
/// Returns `true` when the form state changed and the view must re-render.
pub fn update(component: &mut ContactComponent, ctx: &Context<ContactComponent>, msg: Msg) -> bool {
    let event = match msg {
        Msg::Edit(field, value) => FormEvent::Edit(field, value),
        Msg::SelectEnquiry(kind) => FormEvent::SelectEnquiry(kind),
        Msg::Submit => FormEvent::Submit,
        Msg::Sent(Ok(())) => FormEvent::SubmitSucceeded,
        Msg::Sent(Err(reason)) => {
            error!(format!("Contact form submission failed: {}", reason));
            FormEvent::SubmitFailed(reason)
        }
        Msg::ResetElapsed => FormEvent::ResetElapsed,
    };

    let effect = component.form.dispatch(event);
    let render = effect.should_render();

    match effect {
        FormEffect::Send(message) => send_message(ctx.link().clone(), message),
        FormEffect::ScheduleReset(delay) => schedule_reset(ctx.link().clone(), delay),
        FormEffect::Noop | FormEffect::Render => {}
    }

    render
}

fn send_message(link: Scope<ContactComponent>, message: ContactMessage) {
    spawn_local(async move {
        let outcome = post_message(&message).await;
        link.send_message(Msg::Sent(outcome));
    });
}

async fn post_message(message: &ContactMessage) -> Result<(), String> {
    let response = Request::post(CONTACT_ENDPOINT)
        .json(message)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.ok() {
        return Ok(());
    }

    let detail = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => response.status_text(),
    };
    Err(format!("{} {}", response.status(), detail))
}

fn schedule_reset(link: Scope<ContactComponent>, delay: Duration) {
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(millis).await;
        link.send_message(Msg::ResetElapsed);
    });
}
