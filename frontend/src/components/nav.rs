use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent};

use crate::effects::scroll::{header_is_scrolled, is_in_page_hash, smooth_scroll_to_hash};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

pub enum NavAction {
    Toggle,
    Close,
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            NavAction::Toggle => !self.open,
            NavAction::Close => false,
        };
        if open == self.open {
            self
        } else {
            Rc::new(NavState { open })
        }
    }
}

impl NavState {
    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    pub fn aria_hidden(&self) -> &'static str {
        if self.open { "false" } else { "true" }
    }
}

const SECTIONS: [(&str, &str); 5] = [
    ("#services", "Services"),
    ("#about", "About"),
    ("#testimonials", "Stories"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let nav = use_reducer(NavState::default);
    let scroll = use_window_scroll();

    // Escape closes the mobile menu
    {
        let nav = nav.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                nav.dispatch(NavAction::Close);
            }
        });
    }

    // In-page links scroll smoothly under the fixed header and close the menu
    {
        let nav = nav.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let link = e
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| element.closest("a[href^=\"#\"]").ok().flatten());
            let Some(href) = link.and_then(|link| link.get_attribute("href")) else {
                return;
            };
            if !is_in_page_hash(&href) {
                return;
            }
            e.prevent_default();
            if !smooth_scroll_to_hash(&href) {
                log::warn!("No section matches {}", href);
            }
            nav.dispatch(NavAction::Close);
        });
    }

    let toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.dispatch(NavAction::Toggle);
        })
    };

    html! {
        <header id="header" class={classes!("site-header", header_is_scrolled(scroll.1).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo">{"TenaCare"}</a>

                <button
                    id="hamburger"
                    class="hamburger"
                    aria-label="Toggle navigation"
                    aria-controls="nav-links"
                    aria-expanded={nav.aria_expanded()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <ul
                    id="nav-links"
                    class={classes!("nav-links", nav.open.then(|| "open"))}
                    aria-hidden={nav.aria_hidden()}
                >
                    { for SECTIONS.iter().map(|(href, label)| html! {
                        <li><a href={*href} class="nav-link">{*label}</a></li>
                    }) }
                </ul>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(actions: Vec<NavAction>) -> NavState {
        let mut state = Rc::new(NavState::default());
        for action in actions {
            state = state.reduce(action);
        }
        *state
    }

    #[test]
    fn starts_closed_with_matching_aria() {
        let state = NavState::default();
        assert!(!state.open);
        assert_eq!(state.aria_expanded(), "false");
        assert_eq!(state.aria_hidden(), "true");
    }

    #[test]
    fn rapid_toggles_end_in_last_state() {
        let toggles = |n| (0..n).map(|_| NavAction::Toggle).collect::<Vec<_>>();
        assert!(apply(toggles(1)).open);
        assert!(!apply(toggles(2)).open);
        assert!(apply(toggles(7)).open);
        assert!(!apply(toggles(10)).open);
    }

    #[test]
    fn close_is_idempotent() {
        assert!(!apply(vec![NavAction::Close, NavAction::Close]).open);
        assert!(!apply(vec![NavAction::Toggle, NavAction::Close, NavAction::Close]).open);
        assert!(apply(vec![NavAction::Close, NavAction::Toggle]).open);
    }

    #[test]
    fn aria_follows_open_state() {
        let open = apply(vec![NavAction::Toggle]);
        assert_eq!(open.aria_expanded(), "true");
        assert_eq!(open.aria_hidden(), "false");
    }
}
