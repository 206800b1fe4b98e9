//! View rendering for the contact form component.
//!
//! While the form is `Submitted` a success panel replaces it; otherwise the
//! four controls are rendered with their inline errors, and the submit button
//! is disabled while a request is in flight.

use common::contact::{FormField, FormStatus};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ContactComponent;
use crate::components::enquiry_select::EnquirySelect;

pub fn view(component: &ContactComponent, ctx: &Context<ContactComponent>) -> Html {
    let link = ctx.link();

    html! {
        <section id="contact">
            <div class="section-heading">
                <p class="eyebrow">{ "Get In Touch" }</p>
                <h2 class="gradient-text">{ "Let's Connect" }</h2>
                <p class="subtitle">
                    { "Ready to collaborate on exciting projects? Let's discuss how we can work together!" }
                </p>
            </div>
            <div class="glass card contact-card">
                {
                    if component.form.status == FormStatus::Submitted {
                        success_panel()
                    } else {
                        build_form(component, link)
                    }
                }
            </div>
        </section>
    }
}

fn success_panel() -> Html {
    html! {
        <div class="contact-success">
            <h3>{ "Message Sent!" }</h3>
            <p>{ "Thank you for reaching out. I'll get back to you soon!" }</p>
        </div>
    }
}

fn build_form(component: &ContactComponent, link: &Scope<ContactComponent>) -> Html {
    let form = &component.form;
    let busy = form.is_busy();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="contact-form" novalidate={true} {onsubmit}>
            <div class="field">
                <label for="name">{ "Name" }</label>
                <input
                    type="text"
                    id="name"
                    name="name"
                    placeholder="Your name"
                    class={invalid_class(component, FormField::Name)}
                    value={form.name.clone()}
                    oninput={input_callback(link, FormField::Name)}
                />
                { field_error(component, FormField::Name) }
            </div>

            <div class="field">
                <label for="email">{ "Email" }</label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    placeholder="your.email@example.com"
                    class={invalid_class(component, FormField::Email)}
                    value={form.email.clone()}
                    oninput={input_callback(link, FormField::Email)}
                />
                { field_error(component, FormField::Email) }
            </div>

            <div class="field">
                <label for="enquiryType">{ "Enquiry Type" }</label>
                <EnquirySelect
                    value={form.enquiry_type}
                    invalid={form.errors.contains_key(&FormField::EnquiryType)}
                    on_select={link.callback(Msg::SelectEnquiry)}
                />
                { field_error(component, FormField::EnquiryType) }
            </div>

            <div class="field">
                <label for="message">{ "Message" }</label>
                <textarea
                    id="message"
                    name="message"
                    rows="5"
                    placeholder="Tell me about your project or just say hi!"
                    class={invalid_class(component, FormField::Message)}
                    value={form.message.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        Msg::Edit(FormField::Message, input.value())
                    })}
                />
                { field_error(component, FormField::Message) }
            </div>

            if let Some(error) = &form.submit_error {
                <p class="form-error" role="alert">{ error.clone() }</p>
            }

            <button type="submit" class="btn-primary" disabled={busy}>
                { if busy { "Sending..." } else { "Send Message" } }
            </button>
        </form>
    }
}

fn input_callback(link: &Scope<ContactComponent>, field: FormField) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Edit(field, input.value())
    })
}

fn invalid_class(component: &ContactComponent, field: FormField) -> Classes {
    classes!(component
        .form
        .errors
        .contains_key(&field)
        .then_some("invalid"))
}

fn field_error(component: &ContactComponent, field: FormField) -> Html {
    match component.form.error_for(field) {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => Html::default(),
    }
}
