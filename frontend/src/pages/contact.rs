use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::contact::{submit_contact, ContactSubmission};
use crate::config;
use crate::fetch::endpoints::SERVICES;
use crate::fetch::hooks::use_collection;
use crate::fetch::transport::BrowserTransport;
use crate::models::map_service;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let form = use_state(ContactSubmission::default);
    let is_submitting = use_state(|| false);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);
    let services = use_collection(SERVICES, map_service);

    let text_input = |update: fn(&mut ContactSubmission, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            update(&mut next, input.value());
            form.set(next);
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = input.value();
            form.set(next);
        })
    };

    let on_service = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            let value = select.value();
            next.service_id = (!value.is_empty()).then_some(value);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            let submission = (*form).clone();
            let form = form.clone();
            let is_submitting = is_submitting.clone();
            let error = error.clone();
            let success = success.clone();

            is_submitting.set(true);
            error.set(None);
            success.set(None);
            spawn_local(async move {
                match submit_contact(&BrowserTransport, config::get_backend_url(), &submission).await {
                    Ok(message) => {
                        success.set(Some(message));
                        form.set(ContactSubmission::default());
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <div class="contact-page">
            <section class="page-hero">
                <h1>{"Contact Us"}</h1>
                <p>{"Tell us what you need and an expert will get back to you within one working day"}</p>
            </section>

            <div class="contact-layout">
                <form class="contact-form" {onsubmit}>
                    <div class="form-row">
                        <input type="text" placeholder="Your Name" value={form.name.clone()}
                            oninput={text_input(|f, v| f.name = v)} />
                        <input type="email" placeholder="Email Address" value={form.email.clone()}
                            oninput={text_input(|f, v| f.email = v)} />
                    </div>
                    <div class="form-row">
                        <input type="tel" placeholder="Phone Number" value={form.phone.clone()}
                            oninput={text_input(|f, v| f.phone = v)} />
                        <select onchange={on_service}>
                            <option value="" selected={form.service_id.is_none()}>{"Select a service (optional)"}</option>
                            { for services.data.iter().map(|s| html! {
                                <option
                                    value={s.id.clone()}
                                    selected={form.service_id.as_deref() == Some(s.id.as_str())}
                                >
                                    { &s.title }
                                </option>
                            }) }
                        </select>
                    </div>
                    <input type="text" placeholder="Subject" value={form.subject.clone()}
                        oninput={text_input(|f, v| f.subject = v)} />
                    <textarea placeholder="How can we help?" rows="5" value={form.message.clone()}
                        oninput={on_message} />

                    if let Some(message) = (*error).clone() {
                        <div class="form-error">{ message }</div>
                    }
                    if let Some(message) = (*success).clone() {
                        <div class="form-success">{ message }</div>
                    }

                    <button type="submit" disabled={*is_submitting}>
                        { if *is_submitting { "Sending..." } else { "Send Message" } }
                    </button>
                </form>

                <aside class="contact-info">
                    <h3>{"Reach us directly"}</h3>
                    <p><a href={format!("tel:{}", config::SUPPORT_PHONE.replace(' ', ""))}>{ config::SUPPORT_PHONE }</a></p>
                    <p><a href={format!("mailto:{}", config::SUPPORT_EMAIL)}>{ config::SUPPORT_EMAIL }</a></p>
                    <p>{"Mon–Sat, 9:00 AM – 6:00 PM IST"}</p>
                </aside>
            </div>
        </div>
    }
}
