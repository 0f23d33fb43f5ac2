use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use gloo_console::{error, log};

use crate::components::notice::{FormNotice, Notice};
use crate::config;
use crate::contact::{validate_submission, ContactSubmission, RelayReply, SENDING_MESSAGE, SENT_MESSAGE};
use crate::Route;

const SEND_FAILED: &str = "Message could not be sent.";

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// Post valid submissions to the relay. Off means demo mode: validate,
    /// show the notice and clear the form without any network call.
    #[prop_or(false)]
    pub live: bool,
}

/// What a submit does before any network call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub notice: Notice,
    pub reset: bool,
    pub send: bool,
}

pub fn submit_outcome(submission: &ContactSubmission, live: bool) -> SubmitOutcome {
    match validate_submission(submission) {
        Err(err) => SubmitOutcome { notice: Notice::error(err.to_string()), reset: false, send: false },
        Ok(()) if live => SubmitOutcome { notice: Notice::info(SENDING_MESSAGE), reset: false, send: true },
        Ok(()) => SubmitOutcome { notice: Notice::success(SENT_MESSAGE), reset: true, send: false },
    }
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

fn textarea_value(node: &NodeRef) -> String {
    node.cast::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}

fn reset_form(node: &NodeRef) {
    if let Some(form) = node.cast::<HtmlFormElement>() {
        form.reset();
    }
}

async fn send_to_relay(submission: &ContactSubmission) -> Result<String, String> {
    let request = Request::post(&format!("{}/api/contact", config::get_backend_url()))
        .json(submission)
        .map_err(|e| {
            error!("Failed to encode contact request:", e.to_string());
            SEND_FAILED.to_string()
        })?;

    let response = request.send().await.map_err(|e| {
        error!("Contact request failed:", e.to_string());
        SEND_FAILED.to_string()
    })?;

    let accepted = response.ok();
    log!("Contact relay answered with status", response.status());
    let reply = response.json::<RelayReply>().await.map_err(|e| {
        error!("Unreadable relay reply:", e.to_string());
        SEND_FAILED.to_string()
    })?;

    if accepted {
        Ok(reply.message.unwrap_or_else(|| SENT_MESSAGE.to_string()))
    } else {
        Err(reply.error.unwrap_or_else(|| SEND_FAILED.to_string()))
    }
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();
    let notice = use_state(|| None::<Notice>);
    let is_sending = use_state(|| false);
    let navigator = use_navigator();

    let onsubmit = {
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let message_ref = message_ref.clone();
        let notice = notice.clone();
        let is_sending = is_sending.clone();
        let navigator = navigator.clone();
        let live = props.live;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_sending {
                return;
            }

            let submission = ContactSubmission::new(
                &input_value(&name_ref),
                &input_value(&email_ref),
                &textarea_value(&message_ref),
            );

            let outcome = submit_outcome(&submission, live);
            notice.set(Some(outcome.notice));
            if outcome.reset {
                reset_form(&form_ref);
            }
            if !outcome.send {
                return;
            }

            is_sending.set(true);

            let notice = notice.clone();
            let is_sending = is_sending.clone();
            let form_ref = form_ref.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match send_to_relay(&submission).await {
                    Ok(text) => {
                        notice.set(Some(Notice::success(text)));
                        reset_form(&form_ref);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::ThankYou);
                        }
                    }
                    Err(text) => notice.set(Some(Notice::error(text))),
                }
                is_sending.set(false);
            });
        })
    };

    html! {
        <>
            <form class="contact-form" ref={form_ref} onsubmit={onsubmit}>
                <label for="contact-name">{"Name"}</label>
                <input id="contact-name" type="text" name="name" autocomplete="name" ref={name_ref} />

                <label for="contact-email">{"Email"}</label>
                <input id="contact-email" type="text" inputmode="email" name="email" autocomplete="email" ref={email_ref} />

                <label for="contact-message">{"Message"}</label>
                <textarea id="contact-message" name="message" rows="5" ref={message_ref}></textarea>

                <button type="submit" class="btn btn-primary" disabled={*is_sending}>
                    { if *is_sending { "Sending…" } else { "Send Message" } }
                </button>
            </form>
            {
                if let Some(notice) = (*notice).clone() {
                    html! { <FormNotice notice={notice} /> }
                } else {
                    html! {}
                }
            }
        </>
    }
}
