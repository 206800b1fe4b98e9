//! Custom dropdown for the enquiry type.
//!
//! The list closes on any pointer-down outside the control. A capture-phase
//! listener is attached to the document on first render and detached in
//! `destroy`, so it lives exactly as long as the component.

use common::model::contact::EnquiryType;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Node};
use yew::prelude::*;

const PLACEHOLDER: &str = "Select an option";

#[derive(Properties, PartialEq, Clone)]
pub struct EnquirySelectProps {
    pub value: Option<EnquiryType>,
    pub on_select: Callback<Option<EnquiryType>>,
    #[prop_or_default]
    pub invalid: bool,
}

pub enum Msg {
    Toggle,
    Choose(Option<EnquiryType>),
    Close,
}

pub struct EnquirySelect {
    open: bool,
    root: NodeRef,
    outside_listener: Option<Closure<dyn Fn(Event)>>,
}

impl Component for EnquirySelect {
    type Message = Msg;
    type Properties = EnquirySelectProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            open: false,
            root: NodeRef::default(),
            outside_listener: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Toggle => {
                self.open = !self.open;
                true
            }
            Msg::Choose(kind) => {
                self.open = false;
                ctx.props().on_select.emit(kind);
                true
            }
            Msg::Close => {
                if !self.open {
                    return false;
                }
                self.open = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();
        let current = props.value.map(EnquiryType::label).unwrap_or(PLACEHOLDER);

        html! {
            <div class="dropdown" ref={self.root.clone()}>
                <button
                    type="button"
                    id="enquiryType"
                    class={classes!("dropdown-toggle", props.invalid.then_some("invalid"))}
                    aria-haspopup="listbox"
                    aria-expanded={self.open.to_string()}
                    onclick={link.callback(|_| Msg::Toggle)}
                >
                    { current }
                </button>
                if self.open {
                    <ul class="dropdown-menu" role="listbox">
                        <li role="option" onclick={link.callback(|_| Msg::Choose(None))}>
                            { PLACEHOLDER }
                        </li>
                        { for EnquiryType::ALL.into_iter().map(|kind| html! {
                            <li
                                role="option"
                                aria-selected={(props.value == Some(kind)).to_string()}
                                onclick={link.callback(move |_| Msg::Choose(Some(kind)))}
                            >
                                { kind.label() }
                            </li>
                        }) }
                    </ul>
                }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let root = self.root.clone();
        let link = ctx.link().clone();
        let listener = Closure::<dyn Fn(Event)>::new(move |event: Event| {
            let Some(bounds) = root.cast::<Element>() else {
                return;
            };
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !bounds.contains(target.as_ref()) {
                link.send_message(Msg::Close);
            }
        });

        if document
            .add_event_listener_with_callback_and_bool(
                "pointerdown",
                listener.as_ref().unchecked_ref(),
                true,
            )
            .is_ok()
        {
            self.outside_listener = Some(listener);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(listener), Some(document)) = (
            self.outside_listener.take(),
            web_sys::window().and_then(|w| w.document()),
        ) {
            let _ = document.remove_event_listener_with_callback_and_bool(
                "pointerdown",
                listener.as_ref().unchecked_ref(),
                true,
            );
        }
    }
}
