use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod dom;
mod state;
mod tilt;
mod components {
    pub mod contact_form;
    pub mod nav;
    pub mod profile_card;
}
mod pages {
    pub mod detail;
    pub mod portfolio;
}

use config::SiteConfig;
use pages::portfolio::Portfolio;

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
            info!("Rendering Portfolio page");
            html! { <Portfolio config={SiteConfig::active()} /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
