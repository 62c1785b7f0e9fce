use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod dom;
mod error;
mod motion {
    pub mod easing;
    pub mod progress;
    pub mod choreography;
    pub mod tween;
}
mod features {
    pub mod toggle;
    pub mod slideshow;
    pub mod reveal;
    pub mod lightbox;
    pub mod contact;
    pub mod observer;
    pub mod entrances;
    pub mod scroll_scene;
    pub mod smooth_scroll;
}
mod components {
    pub mod nav;
    pub mod ticker;
    pub mod hero;
    pub mod about;
    pub mod history;
    pub mod gallery;
    pub mod contact_form;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::nav::Nav;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
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
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if console_log::init_with_level(Level::Info).is_err() {
        gloo_console::log!("logger already initialised");
    }

    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}
