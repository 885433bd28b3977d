use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod models;
mod api {
    pub mod application;
    pub mod contact;
}
mod fetch {
    pub mod collection;
    pub mod endpoints;
    pub mod envelope;
    pub mod hooks;
    pub mod retry;
    pub mod transport;
}
mod chat {
    pub mod engine;
    pub mod hours;
    pub mod lead;
    pub mod steps;
    pub mod widget;
}
mod components {
    pub mod load_state;
}
mod pages {
    pub mod application_status;
    pub mod contact;
    pub mod faq;
    pub mod gallery;
    pub mod home;
    pub mod services;
}
mod utils {
    pub mod youtube;
}

use chat::widget::ChatWidget;
use pages::{
    application_status::ApplicationStatusPage,
    contact::ContactPage,
    faq::FaqPage,
    gallery::GalleryPage,
    home::Home,
    services::ServicesPage,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/gallery")]
    Gallery,
    #[at("/contact")]
    Contact,
    #[at("/application-status")]
    ApplicationStatus,
    #[at("/faq")]
    Faq,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <ServicesPage /> }
        },
        Route::Gallery => {
            info!("Rendering Gallery page");
            html! { <GalleryPage /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        },
        Route::ApplicationStatus => {
            info!("Rendering Application Status page");
            html! { <ApplicationStatusPage /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <FaqPage /> }
        },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"Page not found"}</h1>
                <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
            </div>
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let document = window.document();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document
                        .as_ref()
                        .and_then(|d| d.document_element())
                        .map(|el| el.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(scroll_top > 80);
                }) as Box<dyn FnMut()>);
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let links = [
        (Route::Services, "Services"),
        (Route::Gallery, "Gallery"),
        (Route::Faq, "FAQ"),
        (Route::ApplicationStatus, "Track Application"),
    ];

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Geemadhura"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for links.into_iter().map(|(route, label)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route} classes="nav-link">
                                {label}
                            </Link<Route>>
                        </div>
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-cta-button">
                            {"Contact Us"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <footer class="site-footer">
                <p>{ format!("{} · {}", config::SUPPORT_PHONE, config::SUPPORT_EMAIL) }</p>
                <p>{"© Geemadhura Business Solutions"}</p>
            </footer>
            <ChatWidget />
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
