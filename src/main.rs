use yew::prelude::*;
use yew_router::prelude::*;

mod error;
mod config;
mod models {
    pub mod work_models;
    pub mod showcase_models;
    pub mod site_models;
}
mod utils {
    pub mod cycle;
    pub mod dom;
    pub mod filter_query;
    pub mod focus_trap;
    pub mod media;
    pub mod scroll_lock;
    pub mod settle;
    pub mod storage;
    pub mod swipe;
}
mod components {
    pub mod gallery_state;
    pub mod topbar;
    pub mod hero_slider;
    pub mod work_section;
    pub mod portfolio_modal;
    pub mod brands;
    pub mod about_section;
    pub mod contact_section;
    pub mod footer;
}
mod pages {
    pub mod home;
}

use components::topbar::TopBar;
use pages::home::Home;

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
        Route::Home => html! { <Home /> },
        Route::NotFound => {
            log::info!("Unknown path, rendering the home page");
            html! { <Home /> }
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <TopBar />
            <main>
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("Starting {}", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
