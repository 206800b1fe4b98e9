use common::content::{NAV_LINKS, PROFILE};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

pub enum Msg {
    ToggleMenu,
    Navigate(&'static str),
}

pub struct Header {
    menu_open: bool,
    active_section: &'static str,
}

impl Component for Header {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            menu_open: false,
            active_section: "home",
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleMenu => {
                self.menu_open = !self.menu_open;
                true
            }
            Msg::Navigate(section) => {
                scroll_to_section(section);
                self.active_section = section;
                self.menu_open = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let links = NAV_LINKS.iter().map(|nav| {
            let section = nav.section;
            let class = classes!(
                "nav-pill",
                (self.active_section == section).then_some("active")
            );
            html! {
                <a
                    href={format!("#{}", section)}
                    class={class}
                    onclick={link.callback(move |e: MouseEvent| {
                        e.prevent_default();
                        Msg::Navigate(section)
                    })}
                >
                    { nav.name }
                </a>
            }
        });

        html! {
            <header class="site-header">
                <a class="brand" href="#home">{ PROFILE.name }</a>
                <button
                    class="menu-toggle"
                    aria-expanded={self.menu_open.to_string()}
                    onclick={link.callback(|_| Msg::ToggleMenu)}
                >
                    { if self.menu_open { "Close" } else { "Menu" } }
                </button>
                <nav class={classes!("nav-links", self.menu_open.then_some("open"))}>
                    { for links }
                </nav>
            </header>
        }
    }
}

fn scroll_to_section(section: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section))
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
