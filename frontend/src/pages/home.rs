use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::load_state::LoadState;
use crate::fetch::endpoints::{BANNERS, LATEST_UPDATES, SERVICES, TESTIMONIALS};
use crate::fetch::hooks::use_collection;
use crate::models::{map_banner, map_service, map_testimonial, map_update, Service, Testimonial};
use crate::pages::faq::FaqList;
use crate::Route;

const BANNER_ROTATE_MS: u32 = 5_000;
const TESTIMONIALS_PER_PAGE: usize = 3;

#[function_component(HeroBanner)]
fn hero_banner() -> Html {
    let banners = use_collection(BANNERS, map_banner);
    let current = use_state(|| 0usize);

    {
        let current = current.clone();
        let count = banners.data.len();
        use_interval(
            move || {
                if count > 1 {
                    current.set((*current + 1) % count);
                }
            },
            BANNER_ROTATE_MS,
        );
    }

    let Some(banner) = banners.data.get(*current % banners.data.len().max(1)) else {
        // fall back to the static hero when the CMS has nothing or is down
        return html! {
            <section class="hero">
                <div class="hero-content">
                    <h1>{"Your Partner for Business Registrations & Licenses"}</h1>
                    <p>{"FSSAI, GST, Trademark, Company Registration and more, handled end to end by experts."}</p>
                    <Link<Route> to={Route::Contact} classes="hero-cta">{"Get a Free Consultation"}</Link<Route>>
                </div>
            </section>
        };
    };

    html! {
        <section class="hero" style={format!("background-image: url('{}');", banner.image_url)}>
            <div class="hero-content">
                <h1>{ &banner.title }</h1>
                <p>{ &banner.subtitle }</p>
                {
                    match &banner.link {
                        Some(link) => html! { <a href={link.clone()} class="hero-cta">{"Learn More"}</a> },
                        None => html! {
                            <Link<Route> to={Route::Contact} classes="hero-cta">{"Get a Free Consultation"}</Link<Route>>
                        },
                    }
                }
            </div>
            <div class="hero-dots">
                { for (0..banners.data.len()).map(|i| {
                    let onclick = {
                        let current = current.clone();
                        Callback::from(move |_: MouseEvent| current.set(i))
                    };
                    html! { <button class={classes!("hero-dot", (i == *current).then_some("active"))} {onclick}></button> }
                }) }
            </div>
        </section>
    }
}

#[function_component(UpdatesMarquee)]
fn updates_marquee() -> Html {
    let updates = use_collection(LATEST_UPDATES, map_update);

    if updates.loading || updates.data.is_empty() {
        return html! {};
    }

    // rendered twice so the CSS animation loops without a gap
    let items = || {
        updates.data.iter().map(|u| match &u.link {
            Some(link) => html! { <a class="marquee-item" href={link.clone()}>{ &u.title }</a> },
            None => html! { <span class="marquee-item">{ &u.title }</span> },
        })
    };

    html! {
        <div class="updates-marquee">
            <span class="marquee-label">{"Latest Updates"}</span>
            <div class="marquee-track">
                { for items() }
                { for items() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;
    html! {
        <div class="service-card">
            if let Some(image) = &service.image_url {
                <img src={image.clone()} alt={service.title.clone()} loading="lazy" />
            }
            <h3>{ &service.title }</h3>
            <p>{ &service.summary }</p>
            if let Some(price) = service.price {
                <span class="service-price">{ format!("Starting at ₹{:.0}", price) }</span>
            }
            <Link<Route> to={Route::Contact} classes="service-link">{"Enquire Now →"}</Link<Route>>
        </div>
    }
}

#[function_component(ServicesSection)]
fn services_section() -> Html {
    let services = use_collection(SERVICES, map_service);

    html! {
        <section class="services-section">
            <h2>{"Our Services"}</h2>
            <LoadState loading={services.loading} error={services.error.clone()}>
                <div class="services-grid">
                    { for services.data.iter().take(6).map(|s| html! { <ServiceCard key={s.id.clone()} service={s.clone()} /> }) }
                </div>
                <Link<Route> to={Route::Services} classes="section-more">{"View all services"}</Link<Route>>
            </LoadState>
        </section>
    }
}

fn stars(rating: u8) -> String {
    (0..5).map(|i| if i < rating { '★' } else { '☆' }).collect()
}

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = &props.testimonial;
    html! {
        <div class="testimonial-card">
            <div class="testimonial-rating">{ stars(t.rating) }</div>
            <p class="testimonial-message">{ format!("“{}”", t.message) }</p>
            <div class="testimonial-author">
                if let Some(image) = &t.image_url {
                    <img src={image.clone()} alt={t.name.clone()} />
                }
                <div>
                    <strong>{ &t.name }</strong>
                    <span>{ &t.role }</span>
                </div>
            </div>
        </div>
    }
}

#[function_component(TestimonialsSection)]
fn testimonials_section() -> Html {
    let testimonials = use_collection(TESTIMONIALS, map_testimonial);
    let page = use_state(|| 0usize);

    let pages = testimonials.data.len().div_ceil(TESTIMONIALS_PER_PAGE).max(1);
    let current = *page % pages;
    let step = |delta: usize| {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.set((current + delta) % pages))
    };

    html! {
        <section class="testimonials-section">
            <h2>{"What Our Clients Say"}</h2>
            <LoadState loading={testimonials.loading} error={testimonials.error.clone()}>
                <div class="testimonials-row">
                    { for testimonials.data
                        .iter()
                        .skip(current * TESTIMONIALS_PER_PAGE)
                        .take(TESTIMONIALS_PER_PAGE)
                        .map(|t| html! { <TestimonialCard key={t.id.clone()} testimonial={t.clone()} /> }) }
                </div>
                if pages > 1 {
                    <div class="carousel-controls">
                        <button onclick={step(pages - 1)}>{"‹"}</button>
                        <button onclick={step(1)}>{"›"}</button>
                    </div>
                }
            </LoadState>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <HeroBanner />
            <UpdatesMarquee />
            <ServicesSection />
            <section class="why-us">
                <h2>{"Why Choose Geemadhura"}</h2>
                <div class="why-grid">
                    <div class="why-item"><h3>{"10,000+"}</h3><p>{"Registrations completed"}</p></div>
                    <div class="why-item"><h3>{"100% Online"}</h3><p>{"No office visits needed"}</p></div>
                    <div class="why-item"><h3>{"Expert CAs"}</h3><p>{"Dedicated compliance advisor"}</p></div>
                </div>
            </section>
            <TestimonialsSection />
            <section class="faq-section">
                <h2>{"Frequently Asked Questions"}</h2>
                <FaqList limit={Some(5)} />
                <Link<Route> to={Route::Faq} classes="section-more">{"See all FAQs"}</Link<Route>>
            </section>
        </div>
    }
}
