//! Test doubles shared by the client and session tests.

use std::cell::RefCell;
use std::rc::Rc;

use store::MemoryStore;

use crate::client::ApiClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Transport};

type Responder = Rc<dyn Fn(&ApiRequest) -> Result<ApiResponse, ApiError>>;

/// Records every request and answers with a scripted response.
#[derive(Clone)]
pub struct RecordingTransport {
    requests: Rc<RefCell<Vec<ApiRequest>>>,
    responder: Responder,
}

impl RecordingTransport {
    pub fn new(respond: impl Fn(&ApiRequest) -> ApiResponse + 'static) -> Self {
        Self {
            requests: Rc::default(),
            responder: Rc::new(move |req| Ok(respond(req))),
        }
    }

    /// Every send fails before reaching a server.
    pub fn failing(reason: &str) -> Self {
        let reason = reason.to_string();
        Self {
            requests: Rc::default(),
            responder: Rc::new(move |_| Err(ApiError::Transport(reason.clone()))),
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|r| r.path.clone()).collect()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let response = (self.responder)(&request);
        self.requests.borrow_mut().push(request);
        response
    }
}

pub fn client_with(transport: RecordingTransport, store: MemoryStore) -> ApiClient<RecordingTransport, MemoryStore> {
    ApiClient::new(transport, store, ApiConfig::default())
}
