use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::application::{lookup_application, ApplicationStatus};
use crate::config;
use crate::fetch::transport::BrowserTransport;
use crate::models::asset_url;

fn status_class(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "approved" | "completed" | "verified" => "status-success",
        "rejected" | "cancelled" => "status-danger",
        _ => "status-pending",
    }
}

#[derive(Properties, PartialEq)]
struct ApplicationCardProps {
    application: ApplicationStatus,
}

#[function_component(ApplicationCard)]
fn application_card(props: &ApplicationCardProps) -> Html {
    let app = &props.application;
    html! {
        <div class="application-card">
            <div class="application-header">
                <div>
                    <h2>{ app.service_name.clone().unwrap_or_else(|| "Application".to_string()) }</h2>
                    <span class="application-id">{ format!("ID: {}", app.application_id) }</span>
                </div>
                <span class={classes!("status-badge", status_class(&app.status))}>{ &app.status }</span>
            </div>
            if let Some(name) = &app.applicant_name {
                <p>{ format!("Applicant: {}", name) }</p>
            }
            if let Some(submitted) = &app.submitted_at {
                <p>{ format!("Submitted: {}", submitted.get(..10).unwrap_or(submitted)) }</p>
            }

            if !app.history.is_empty() {
                <h3>{"History"}</h3>
                <ul class="status-timeline">
                    { for app.history.iter().map(|event| html! {
                        <li>
                            <span class={classes!("status-dot", status_class(&event.status))}></span>
                            <strong>{ &event.status }</strong>
                            <span class="timeline-date">{ event.updated_at.get(..10).unwrap_or(&event.updated_at) }</span>
                            if let Some(note) = &event.note {
                                <p>{ note }</p>
                            }
                        </li>
                    }) }
                </ul>
            }

            if !app.documents.is_empty() {
                <h3>{"Documents"}</h3>
                <ul class="document-list">
                    { for app.documents.iter().map(|doc| html! {
                        <li>
                            {
                                match &doc.url {
                                    Some(url) => html! { <a href={asset_url(url)} target="_blank" rel="noopener">{ &doc.name }</a> },
                                    None => html! { <span>{ &doc.name }</span> },
                                }
                            }
                            if let Some(status) = &doc.status {
                                <span class={classes!("status-badge", status_class(status))}>{ status }</span>
                            }
                        </li>
                    }) }
                </ul>
            }
        </div>
    }
}

#[function_component(ApplicationStatusPage)]
pub fn application_status_page() -> Html {
    let id_param = use_search_param("id".to_string());
    let application_id = use_state(|| id_param.clone().unwrap_or_default());
    let result = use_state(|| None::<ApplicationStatus>);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let run_lookup = {
        let result = result.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        Callback::from(move |id: String| {
            let result = result.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            is_loading.set(true);
            error.set(None);
            spawn_local(async move {
                match lookup_application(&BrowserTransport, config::get_backend_url(), &id).await {
                    Ok(app) => result.set(Some(app)),
                    Err(e) => {
                        result.set(None);
                        error.set(Some(e.to_string()));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    // links from confirmation emails carry ?id=
    {
        let run_lookup = run_lookup.clone();
        use_effect_with_deps(
            move |id: &Option<String>| {
                if let Some(id) = id.as_ref().filter(|id| !id.trim().is_empty()) {
                    run_lookup.emit(id.clone());
                }
                || ()
            },
            id_param,
        );
    }

    let oninput = {
        let application_id = application_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            application_id.set(input.value());
        })
    };

    let onsubmit = {
        let application_id = application_id.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            run_lookup.emit((*application_id).clone());
        })
    };

    html! {
        <div class="status-page">
            <section class="page-hero">
                <h1>{"Track Your Application"}</h1>
                <p>{"Enter the application ID from your confirmation email"}</p>
            </section>

            <form class="status-form" {onsubmit}>
                <input
                    type="text"
                    placeholder="e.g. GM-2026-0042"
                    value={(*application_id).clone()}
                    {oninput}
                />
                <button type="submit" disabled={*is_loading}>
                    { if *is_loading { "Checking..." } else { "Check Status" } }
                </button>
            </form>

            if let Some(message) = (*error).clone() {
                <div class="form-error">{ message }</div>
            }
            if let Some(application) = (*result).clone() {
                <ApplicationCard {application} />
            }
        </div>
    }
}
