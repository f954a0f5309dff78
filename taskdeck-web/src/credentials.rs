//! Where the session token lives.
//!
//! The browser build keeps it in a site-wide cookie; tests use an in-memory
//! store.

use cookie::Cookie;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Get/set/delete access to the persisted session token.
///
/// A present, non-empty token is all the client knows about a session; it is
/// never checked for expiry or signature here.
pub trait CredentialStore {
    /// The current token, if one is stored and non-empty.
    fn token(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value.
    fn store_token(&self, token: &str);

    /// Forget the token. Clearing an absent token is a no-op.
    fn clear_token(&self);
}

/// Session token kept in `document.cookie` under a fixed name, path `/`.
#[derive(Debug, Clone)]
pub struct CookieCredentialStore {
    name: String,
}

impl CookieCredentialStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn document() -> Option<HtmlDocument> {
        web_sys::window()?.document()?.dyn_into().ok()
    }

    fn write(&self, cookie: &str) {
        let Some(document) = Self::document() else {
            log::warn!("no document available; cookie {} not written", self.name);
            return;
        };
        if let Err(err) = document.set_cookie(cookie) {
            log::error!("failed to write cookie {}: {:?}", self.name, err);
        }
    }
}

impl CredentialStore for CookieCredentialStore {
    fn token(&self) -> Option<String> {
        let header = Self::document()?.cookie().ok()?;
        find_cookie(&header, &self.name)
    }

    fn store_token(&self, token: &str) {
        self.write(&session_cookie(&self.name, token));
    }

    fn clear_token(&self) {
        self.write(&removal_cookie(&self.name));
    }
}

/// Token held in memory for the lifetime of the value.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: std::cell::RefCell<Option<String>>,
}

#[cfg(test)]
impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: std::cell::RefCell::new(Some(token.into())),
        }
    }
}

#[cfg(test)]
impl CredentialStore for MemoryCredentialStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone().filter(|token| !token.is_empty())
    }

    fn store_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear_token(&self) {
        self.token.borrow_mut().take();
    }
}

/// `Set-Cookie`-style string that stores `token` for the whole site.
pub(crate) fn session_cookie(name: &str, token: &str) -> String {
    Cookie::build((name, token)).path("/").build().to_string()
}

/// String that expires the cookie `name` on path `/`.
pub(crate) fn removal_cookie(name: &str) -> String {
    let mut cookie = Cookie::build((name, "")).path("/").build();
    cookie.make_removal();
    cookie.to_string()
}

/// Looks `name` up in a `document.cookie` header; empty values count as absent.
pub(crate) fn find_cookie(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse(header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}
