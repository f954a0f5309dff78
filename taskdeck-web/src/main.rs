mod api;
mod app;
mod components;
mod config;
mod credentials;
mod guard;
mod pages;
mod routes;
mod services;
mod stores;
#[cfg(test)]
mod test_support;

use app::App;
use config::FrontendConfig;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    html! {
        <YewduxRoot>
            <App config={FrontendConfig::new()} />
        </YewduxRoot>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let config = FrontendConfig::new();
    if let Err(err) = console_log::init_with_level(config.log_level) {
        web_sys::console::error_1(&format!("logger already installed: {err}").into());
    }

    log::info!("starting TaskDeck against {}", config.api_base_url());

    Renderer::<Root>::new().render();
}
