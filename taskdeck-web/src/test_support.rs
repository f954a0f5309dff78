//! Scripted doubles shared by the unit tests.

use crate::api::{ApiError, ApiRequest, HttpTransport, RawResponse};
use crate::config::FrontendConfig;
use crate::credentials::MemoryCredentialStore;
use crate::services::Services;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use yewdux::{Context, Dispatch, Store};

pub const BASE_URL: &str = "http://api.test/api";

/// Transport that replays queued responses in order and records every request.
#[derive(Debug, Default)]
pub struct FakeTransport {
    responses: RefCell<VecDeque<Result<RawResponse, ApiError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: Value) {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.responses
            .borrow_mut()
            .push_back(Ok(RawResponse { status, body }));
    }

    pub fn fail(&self, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::Transport(message.to_string())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("at least one request was sent")
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_string())))
    }
}

pub fn test_config() -> FrontendConfig {
    FrontendConfig {
        api_base_url: BASE_URL.to_string(),
        ..FrontendConfig::default()
    }
}

/// Services wired to a fake transport and an in-memory credential store.
pub fn test_services() -> (Services, Rc<FakeTransport>, Rc<MemoryCredentialStore>) {
    let transport = FakeTransport::new();
    let credentials = Rc::new(MemoryCredentialStore::new());
    let services = Services::new(test_config(), transport.clone(), credentials.clone());
    (services, transport, credentials)
}

pub fn url(path: &str) -> String {
    format!("{BASE_URL}/{path}")
}

/// A dispatch on a fresh context, seeded with `state`.
pub fn dispatch_with<S: Store>(state: S) -> Dispatch<S> {
    let dispatch = Dispatch::new(&Context::new());
    dispatch.set(state);
    dispatch
}
