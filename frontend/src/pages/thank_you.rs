use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(ThankYou)]
pub fn thank_you() -> Html {
    html! {
        <main class="thank-you-page">
            <section class="thank-you">
                <h1>{"Thank you"}</h1>
                <p>{"Your message has been sent. A member of our team will be in touch within one business day."}</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">
                    {"Back to home"}
                </Link<Route>>
            </section>
        </main>
    }
}
