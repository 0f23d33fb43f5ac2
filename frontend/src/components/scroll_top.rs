use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::MouseEvent;

use crate::effects::scroll::{scroll_top_is_visible, smooth_scroll_to_y};

#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let scroll = use_window_scroll();

    let onclick = Callback::from(|_: MouseEvent| smooth_scroll_to_y(0.0));

    html! {
        <button
            id="scroll-top"
            class={classes!("scroll-top", scroll_top_is_visible(scroll.1).then(|| "show"))}
            aria-label="Back to top"
            onclick={onclick}
        >
            {"↑"}
        </button>
    }
}
