use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement, SubmitEvent};
use yew::prelude::*;

use crate::config;
use crate::dom;
use crate::error::SiteError;
use crate::features::contact::{
    deliver, submit_target, ContactFields, FormAction, FormState, Outcome, RawReply,
    STATUS_CLEAR_MS,
};

async fn post(target: String, data: FormData) -> Result<RawReply, SiteError> {
    let response = Request::post(&target)
        .header("Accept", "application/json")
        .body(data)
        .send()
        .await?;

    let http_ok = response.ok();
    let body = response.text().await.unwrap_or_default();
    Ok(RawReply { http_ok, body })
}

fn read_fields(data: &FormData) -> ContactFields {
    ContactFields::from_lookup(|key| data.get(key).as_string())
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let state = use_reducer(FormState::default);
    let form_ref = use_node_ref();

    {
        let form_ref = form_ref.clone();
        use_effect_with_deps(
            move |token| {
                if *token > 0 {
                    if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                        form.reset();
                    }
                }
                || ()
            },
            state.reset_token,
        );
    }

    // each finished submission owns the status until the next one lands
    {
        let generation = state.generation;
        let state = state.clone();
        use_effect_with_deps(
            move |generation| {
                let generation = *generation;
                let timeout = (generation > 0).then(|| {
                    Timeout::new(STATUS_CLEAR_MS, move || {
                        state.dispatch(FormAction::Expire(generation))
                    })
                });
                move || drop(timeout)
            },
            generation,
        );
    }

    let onsubmit = {
        let state = state.clone();
        let form_ref = form_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if state.submitting {
                return;
            }
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let data = match FormData::new_with_form(&form) {
                Ok(data) => data,
                Err(err) => {
                    log::error!("could not read contact form: {:?}", err);
                    state.dispatch(FormAction::Finish(Outcome::Failed));
                    return;
                }
            };
            let fields = read_fields(&data);
            let target = submit_target(
                form.get_attribute("action").as_deref(),
                &config::contact_endpoint(),
            );
            if fields.is_spam() {
                info!("Contact submission dropped by honeypot");
                state.dispatch(FormAction::Finish(Outcome::Spam));
                return;
            }

            state.dispatch(FormAction::Begin);
            let state = state.clone();
            spawn_local(async move {
                let outcome = deliver(fields, move |_| post(target, data)).await;
                info!("Contact submission finished: {:?}", outcome);
                state.dispatch(FormAction::Finish(outcome));
            });
        })
    };

    html! {
        <form
            id={dom::CONTACT_FORM}
            class="contact-form"
            action={config::contact_endpoint()}
            method="POST"
            ref={form_ref}
            {onsubmit}
        >
            <style>
                {r#"
                    .contact-form {
                        display: grid;
                        gap: 1rem;
                        max-width: 36rem;
                    }
                    .contact-form input,
                    .contact-form textarea {
                        padding: 0.75rem 1rem;
                        border: 1px solid #d1d5db;
                        border-radius: 8px;
                        font: inherit;
                    }
                    .contact-form .honeypot {
                        position: absolute;
                        left: -9999px;
                        width: 1px;
                        height: 1px;
                        overflow: hidden;
                    }
                    .contact-form button {
                        justify-self: start;
                        padding: 0.75rem 2rem;
                        border: 0;
                        border-radius: 999px;
                        background: #000;
                        color: #fff;
                        cursor: pointer;
                    }
                    .contact-form button:disabled {
                        opacity: 0.5;
                        cursor: wait;
                    }
                    .contact-status {
                        min-height: 1.5em;
                    }
                "#}
            </style>
            <input type="text" name="name" placeholder="Name" required=true />
            <input type="email" name="email" placeholder="Email" required=true />
            <input type="tel" name="phone" placeholder="Phone" />
            <textarea name="message" rows="5" placeholder="Message" required=true></textarea>
            <div class="honeypot" aria-hidden="true">
                <label for="website">{"Website"}</label>
                <input type="text" id="website" name="website" tabindex="-1" autocomplete="off" />
            </div>
            <button type="submit" disabled={state.submitting}>
                { if state.submitting { "Sending..." } else { "Send" } }
            </button>
            <p id={dom::CONTACT_STATUS} class="contact-status" aria-live="polite">
                { state.status.clone().unwrap_or_default() }
            </p>
        </form>
    }
}
