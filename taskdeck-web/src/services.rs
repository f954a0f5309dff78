//! The handles every store needs, bundled for the component tree.

use crate::api::{ApiClient, HttpTransport, ReqwestTransport};
use crate::config::FrontendConfig;
use crate::credentials::{CookieCredentialStore, CredentialStore};
use std::fmt;
use std::rc::Rc;
use yew::{hook, use_context};

/// Configuration, credential store and both API clients.
///
/// Provided once through a Yew context; stores borrow it when they are built
/// for an action, so there is no process-wide client.
#[derive(Clone)]
pub struct Services {
    pub config: Rc<FrontendConfig>,
    pub credentials: Rc<dyn CredentialStore>,
    /// Never sends credentials. Used for login and registration.
    pub api: ApiClient,
    /// Attaches the stored token as a bearer header.
    pub auth_api: ApiClient,
}

impl Services {
    pub fn new(
        config: FrontendConfig,
        transport: Rc<dyn HttpTransport>,
        credentials: Rc<dyn CredentialStore>,
    ) -> Self {
        let api = ApiClient::new(config.api_base_url(), transport.clone());
        let auth_api =
            ApiClient::with_credentials(config.api_base_url(), transport, credentials.clone());
        Self {
            config: Rc::new(config),
            credentials,
            api,
            auth_api,
        }
    }

    /// Services for the browser: `reqwest` transport and the session cookie.
    pub fn browser(config: FrontendConfig) -> Self {
        let credentials = Rc::new(CookieCredentialStore::new(config.session_cookie()));
        Self::new(config, Rc::new(ReqwestTransport::new()), credentials)
    }
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services")
            .field("config", &self.config)
            .field("api", &self.api)
            .field("auth_api", &self.auth_api)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config) && Rc::ptr_eq(&self.credentials, &other.credentials)
    }
}

/// The [`Services`] provided by the app root.
///
/// Falls back to fresh browser services when rendered outside the provider.
#[hook]
pub fn use_services() -> Services {
    use_context::<Services>().unwrap_or_else(|| {
        log::warn!("no Services context; building browser defaults");
        Services::browser(FrontendConfig::new())
    })
}
