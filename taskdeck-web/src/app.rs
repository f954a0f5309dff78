use crate::config::FrontendConfig;
use crate::routes::{Route, switch};
use crate::services::Services;
use yew::{ContextProvider, Html, function_component, html, use_memo};
use yew_router::prelude::*;

#[derive(yew::Properties, PartialEq)]
pub struct AppProps {
    pub config: FrontendConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let services = use_memo(props.config.clone(), |config| {
        Services::browser(config.clone())
    });

    html! {
        <ContextProvider<Services> context={(*services).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Services>>
    }
}
