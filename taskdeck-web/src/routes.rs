use crate::guard::{self, GuardOutcome};
use crate::pages::{AuthPage, DashboardPage};
use crate::services::use_services;
use yew::prelude::*;
use yew_router::prelude::*;

/// The app routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable)]
pub enum Route {
    /// Public entry: sign in or register.
    #[at("/")]
    Home,
    /// Task board; requires a session token.
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Whether entering this route goes through the session guard.
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

/// Programmatic navigation as seen by the stores.
#[cfg_attr(test, mockall::automock)]
pub trait Navigate {
    fn navigate(&self, route: Route);
}

/// [`Navigate`] backed by the yew-router history.
#[derive(Clone)]
pub struct RouterNavigator(pub Navigator);

impl Navigate for RouterNavigator {
    fn navigate(&self, route: Route) {
        self.0.push(&route);
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteViewProps {
    pub route: Route,
}

/// Renders `route` once the session guard lets it through.
#[function_component(RouteView)]
pub fn route_view(props: &RouteViewProps) -> Html {
    let services = use_services();
    match guard::check(props.route, services.credentials.as_ref()) {
        GuardOutcome::Redirected(target) => html! { <Redirect<Route> to={target} /> },
        GuardOutcome::Allowed => match props.route {
            Route::Home => html! { <AuthPage /> },
            Route::Dashboard => html! { <DashboardPage /> },
            Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
        },
    }
}

pub fn switch(route: Route) -> Html {
    html! { <RouteView {route} /> }
}
