use yew::prelude::*;
use yew_router::prelude::*;

mod api_client;
mod common;
mod components;
pub mod hooks;
pub mod settings;

use common::toast::ToastProvider;
use components::calculator::Calculator;
use components::layout::layout::Layout;
use components::prediction::Prediction;
use components::statistics::Statistics;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/statistics")]
    Statistics,
    #[at("/calculator")]
    Calculator,
    #[at("/prediction")]
    Prediction,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::Statistics => {
            html! { <Layout><Statistics /></Layout> }
        }
        Route::Calculator => {
            html! { <Layout><Calculator /></Layout> }
        }
        Route::Prediction => {
            html! { <Layout><Prediction /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== EAI Watch Frontend Starting ===");
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    yew::Renderer::<App>::new().render();
}
