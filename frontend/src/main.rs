use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::{info, Level};
use web_sys::{window, KeyboardEvent};

mod config;
mod contact;
mod components {
    pub mod carousel;
    pub mod contact_form;
    pub mod faq;
    pub mod nav;
    pub mod notice;
    pub mod scroll_top;
}
mod effects {
    pub mod counter;
    pub mod reveal;
    pub mod scroll;
}
mod pages {
    pub mod landing;
    pub mod thank_you;
}

use components::{
    nav::Header,
    scroll_top::ScrollTopButton,
};
use pages::{
    landing::Landing,
    thank_you::ThankYou,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/thank-you")]
    ThankYou,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::NotFound => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::ThankYou => {
            info!("Rendering Thank You page");
            html! { <ThankYou /> }
        },
    }
}

/// First Tab press marks the body so focus outlines only show for keyboard users.
#[hook]
fn use_keyboard_focus_hint() {
    let marked = use_mut_ref(|| false);
    use_event_with_window("keydown", move |e: KeyboardEvent| {
        if *marked.borrow() || e.key() != "Tab" {
            return;
        }
        if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().add_1("user-is-tabbing");
            *marked.borrow_mut() = true;
        }
    });
}

#[function_component]
fn App() -> Html {
    use_keyboard_focus_hint();

    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
            <ScrollTopButton />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
