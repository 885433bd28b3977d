use yew::prelude::*;

use crate::components::load_state::LoadState;
use crate::fetch::endpoints::{COURSES, SERVICES};
use crate::fetch::hooks::use_collection;
use crate::models::{map_course, map_service};
use crate::pages::home::ServiceCard;

#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    let services = use_collection(SERVICES, map_service);
    let courses = use_collection(COURSES, map_course);

    html! {
        <div class="services-page">
            <section class="page-hero">
                <h1>{"Our Services"}</h1>
                <p>{"Registrations, licenses and compliance filings for every stage of your business"}</p>
            </section>

            <section class="services-section">
                <LoadState loading={services.loading} error={services.error.clone()}>
                    <div class="services-grid">
                        { for services.data.iter().map(|s| html! { <ServiceCard key={s.id.clone()} service={s.clone()} /> }) }
                    </div>
                </LoadState>
            </section>

            if courses.loading || !courses.data.is_empty() || courses.error.is_some() {
                <section class="courses-section">
                    <h2>{"Courses & Training"}</h2>
                    <LoadState loading={courses.loading} error={courses.error.clone()}>
                        <div class="courses-grid">
                            { for courses.data.iter().map(|c| html! {
                                <div class="course-card" key={c.id.clone()}>
                                    if let Some(image) = &c.image_url {
                                        <img src={image.clone()} alt={c.title.clone()} loading="lazy" />
                                    }
                                    <h3>{ &c.title }</h3>
                                    <p>{ &c.description }</p>
                                    if let Some(duration) = &c.duration {
                                        <span class="course-duration">{ duration }</span>
                                    }
                                </div>
                            }) }
                        </div>
                    </LoadState>
                </section>
            }
        </div>
    }
}
