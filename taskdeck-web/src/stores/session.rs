//! Authenticated user, sign-in, registration and logout.

use crate::api::{ApiClient, ApiError, ApiResponse};
use crate::credentials::CredentialStore;
use crate::routes::{Navigate, Route};
use crate::services::Services;
use reqwest::StatusCode;
use shared::models::{AuthResponse, CurrentUser, FieldErrors, RegisterRequest, SignInRequest, User};
use std::rc::Rc;
use yewdux::{Dispatch, Store};

/// Reactive snapshot of the session.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct SessionState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub errors: Option<FieldErrors>,
}

/// Session operations, writing into the shared [`SessionState`] as each
/// step completes.
pub struct SessionStore {
    dispatch: Dispatch<SessionState>,
    api: ApiClient,
    auth_api: ApiClient,
    credentials: Rc<dyn CredentialStore>,
    navigator: Rc<dyn Navigate>,
}

impl SessionStore {
    pub fn new(
        services: &Services,
        navigator: Rc<dyn Navigate>,
        dispatch: Dispatch<SessionState>,
    ) -> Self {
        Self {
            dispatch,
            api: services.api.clone(),
            auth_api: services.auth_api.clone(),
            credentials: services.credentials.clone(),
            navigator,
        }
    }

    /// Exchange credentials for a session token, then load the user and open
    /// the dashboard.
    pub async fn sign_in(&self, email: &str, password: &str) {
        let request = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let result = self.api.post::<_, AuthResponse>("login", &request).await;
        self.complete_auth("sign-in", StatusCode::OK, result).await;
    }

    /// Create an account, then continue exactly as a successful sign-in.
    pub async fn register(&self, name: &str, email: &str, password: &str) {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let result = self.api.post::<_, AuthResponse>("register", &request).await;
        self.complete_auth("registration", StatusCode::CREATED, result).await;
    }

    /// Drop the session locally. The server-side session is left alone.
    pub fn logout(&self) {
        self.credentials.clear_token();
        self.dispatch.reduce_mut(|state| {
            state.user = None;
            state.is_authenticated = false;
        });
        log::info!("user logged out");
    }

    /// Refresh the user from `GET user` when a token is stored.
    ///
    /// Without a token this does nothing. Any failure clears the user and the
    /// authentication flag before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] of the failed request.
    pub async fn load_user(&self) -> Result<(), ApiError> {
        if self.credentials.token().is_none() {
            return Ok(());
        }
        match self.auth_api.get::<CurrentUser>("user").await {
            Ok(ApiResponse { status, data }) if status == StatusCode::OK => {
                self.dispatch.reduce_mut(|state| {
                    state.user = Some(data.user);
                    state.is_authenticated = true;
                });
                Ok(())
            }
            Ok(ApiResponse { status, .. }) => {
                log::warn!("ignoring user response with status {status}");
                Ok(())
            }
            Err(err) => {
                self.dispatch.reduce_mut(|state| {
                    state.user = None;
                    state.is_authenticated = false;
                });
                if err.status() == Some(StatusCode::UNAUTHORIZED) {
                    log::info!("stored session token was rejected");
                } else {
                    log::error!("failed to fetch user data: {err}");
                }
                Err(err)
            }
        }
    }

    async fn complete_auth(
        &self,
        action: &str,
        expected: StatusCode,
        result: Result<ApiResponse<AuthResponse>, ApiError>,
    ) {
        let response = match result {
            Ok(response) => response,
            Err(err) => {
                self.record_failure(action, &err);
                return;
            }
        };
        if response.status != expected {
            log::warn!("{action} answered {} instead of {expected}", response.status);
            return;
        }

        // Token before the user fetch so the bearer header carries it.
        self.credentials.store_token(&response.data.token);
        if let Err(err) = self.load_user().await {
            self.record_failure(action, &err);
            return;
        }
        self.dispatch.reduce_mut(|state| state.errors = None);
        self.navigator.navigate(Route::Dashboard);
        log::info!("{action} succeeded and user data fetched");
    }

    fn record_failure(&self, action: &str, err: &ApiError) {
        log::error!("{action} error: {err}");
        let errors = FieldErrors::from_body(err.body());
        self.dispatch.reduce_mut(|state| state.errors = Some(errors));
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;
