use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::load_state::LoadState;
use crate::fetch::endpoints::FAQS;
use crate::fetch::hooks::use_collection;
use crate::models::{map_faq, Faq};

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub faq: Faq,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.faq.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.faq.answer.split("\n\n").map(|p| html! { <p>{ p }</p> }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    #[prop_or_default]
    pub limit: Option<usize>,
}

/// FAQ accordion fed from the API, grouped by category when the CMS sets one.
#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let faqs = use_collection(FAQS, map_faq);

    let shown: Vec<Faq> = match props.limit {
        Some(limit) => faqs.data.iter().take(limit).cloned().collect(),
        None => faqs.data.clone(),
    };

    let mut groups: Vec<(String, Vec<Faq>)> = Vec::new();
    for faq in shown {
        let category = faq.category.clone().unwrap_or_else(|| "General".to_string());
        match groups.iter_mut().find(|(c, _)| *c == category) {
            Some((_, items)) => items.push(faq),
            None => groups.push((category, vec![faq])),
        }
    }
    let single_group = groups.len() <= 1;

    html! {
        <LoadState loading={faqs.loading} error={faqs.error.clone()}>
            { for groups.into_iter().map(|(category, items)| html! {
                <>
                    if !single_group {
                        <h2>{ category }</h2>
                    }
                    { for items.into_iter().map(|faq| html! { <FaqItem key={faq.id.clone()} faq={faq.clone()} /> }) }
                </>
            }) }
        </LoadState>
    }
}

#[function_component(FaqPage)]
pub fn faq_page() -> Html {
    html! {
        <div class="faq-page">
            <section class="faq-hero">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"Answers to the questions we hear most about licenses, registrations and compliance"}</p>
            </section>

            <section class="faq-section">
                <FaqList />
            </section>
        </div>
    }
}
