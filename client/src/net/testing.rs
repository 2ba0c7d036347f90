//! In-memory transport for unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::channel::oneshot;

use super::api::ApiClient;
use super::transport::{ApiError, ApiRequest, ApiResponse, HttpMethod, Transport};

pub(crate) const TEST_ORIGIN: &str = "https://api.devset.test";

/// Records every request and answers from a per-route table (404 otherwise).
#[derive(Default)]
pub(crate) struct RecordingTransport {
    routes: Mutex<HashMap<(HttpMethod, String), Result<ApiResponse, ApiError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn respond(&self, method: HttpMethod, path: &str, status: u16, body: serde_json::Value) {
        self.routes
            .lock()
            .unwrap()
            .insert((method, format!("{TEST_ORIGIN}{path}")), Ok(ApiResponse::new(status, body.to_string())));
    }

    pub(crate) fn respond_raw(&self, method: HttpMethod, path: &str, status: u16, body: &str) {
        self.routes
            .lock()
            .unwrap()
            .insert((method, format!("{TEST_ORIGIN}{path}")), Ok(ApiResponse::new(status, body)));
    }

    pub(crate) fn fail(&self, method: HttpMethod, path: &str, error: ApiError) {
        self.routes
            .lock()
            .unwrap()
            .insert((method, format!("{TEST_ORIGIN}{path}")), Err(error));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests sent to `path` (origin stripped).
    pub(crate) fn requests_to(&self, path: &str) -> Vec<ApiRequest> {
        let url = format!("{TEST_ORIGIN}{path}");
        self.requests().into_iter().filter(|r| r.url == url).collect()
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let key = (request.method, request.url.clone());
        self.requests.lock().unwrap().push(request);
        self.routes
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Ok(ApiResponse::new(404, "{\"detail\":\"Not Found\"}")))
    }
}

pub(crate) fn client(transport: &Arc<RecordingTransport>) -> ApiClient {
    ApiClient::new(TEST_ORIGIN, transport.clone())
}

/// Holds each GET until the test releases its response, so tests choose the
/// order in which concurrent requests complete.
#[derive(Default)]
pub(crate) struct GatedTransport {
    gates: Mutex<HashMap<String, oneshot::Receiver<ApiResponse>>>,
}

impl GatedTransport {
    /// Register `path`; sending on the returned channel releases its response.
    pub(crate) fn gate(&self, path: &str) -> oneshot::Sender<ApiResponse> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(format!("{TEST_ORIGIN}{path}"), rx);
        tx
    }

    pub(crate) fn client(self: &Arc<Self>) -> ApiClient {
        ApiClient::new(TEST_ORIGIN, self.clone())
    }
}

#[async_trait(?Send)]
impl Transport for GatedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let gate = self.gates.lock().unwrap().remove(&request.url);
        match gate {
            Some(rx) => rx.await.map_err(|_| ApiError::Transport("gate dropped".to_owned())),
            None => Ok(ApiResponse::new(404, "{\"detail\":\"Not Found\"}")),
        }
    }
}
