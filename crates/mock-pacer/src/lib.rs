//! In-process stub of the PACER services.
//!
//! Hosts both endpoints the SDK talks to — the authentication service
//! (`POST /services/cso-auth`) and the PCL case search
//! (`POST /pcl-public-api/rest/cases/find`) — under a single Axum
//! router.  [`MockPacer`] holds the canned responses and records every
//! request it receives (bodies, the `X-NEXT-GEN-CSO` header, call
//! counts) so tests can assert the exact wire contract.
//!
//! Used as a library from integration tests, or run standalone via the
//! `mock-pacer` binary.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

/// Route of the stub authentication endpoint.
pub const AUTH_PATH: &str = "/services/cso-auth";

/// Route of the stub case-search endpoint.
pub const FIND_PATH: &str = "/pcl-public-api/rest/cases/find";

/// Token issued by a freshly constructed [`MockPacer`].
pub const DEFAULT_TOKEN: &str = "mock-next-gen-cso";

/// A search request as seen by the stub.
#[derive(Debug, Clone)]
pub struct RecordedSearch {
    /// Value of the `X-NEXT-GEN-CSO` header, if the request carried one.
    pub token_header: Option<String>,
    /// The JSON request body, verbatim.
    pub body: Value,
}

/// Shared state behind the stub endpoints.
///
/// The authentication endpoint answers with the configured token (or a
/// login-failure payload when the token is cleared); the search
/// endpoint answers with the configured response document regardless of
/// input.
pub struct MockPacer {
    token: RwLock<Option<String>>,
    search_response: RwLock<Value>,
    auth_calls: AtomicUsize,
    search_calls: AtomicUsize,
    last_auth_body: Mutex<Option<Value>>,
    last_search: Mutex<Option<RecordedSearch>>,
}

impl Default for MockPacer {
    fn default() -> Self {
        Self {
            token: RwLock::new(Some(DEFAULT_TOKEN.to_string())),
            search_response: RwLock::new(default_search_response()),
            auth_calls: AtomicUsize::new(0),
            search_calls: AtomicUsize::new(0),
            last_auth_body: Mutex::new(None),
            last_search: Mutex::new(None),
        }
    }
}

impl MockPacer {
    /// Stub issuing [`DEFAULT_TOKEN`] and a one-case search response.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Stub issuing the given token.
    pub fn with_token(token: impl Into<String>) -> Arc<Self> {
        let mock = Self::default();
        *mock.token.write().unwrap() = Some(token.into());
        Arc::new(mock)
    }

    /// Stub whose authentication responses carry no `nextGenCSO` field,
    /// simulating rejected credentials.
    pub fn without_token() -> Arc<Self> {
        let mock = Self::default();
        *mock.token.write().unwrap() = None;
        Arc::new(mock)
    }

    /// Replace the token issued by the authentication endpoint.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap() = token;
    }

    /// Replace the document returned by the search endpoint.
    pub fn set_search_response(&self, response: Value) {
        *self.search_response.write().unwrap() = response;
    }

    /// The document the search endpoint currently returns.
    pub fn search_response(&self) -> Value {
        self.search_response.read().unwrap().clone()
    }

    /// Number of requests the authentication endpoint has served.
    pub fn auth_calls(&self) -> usize {
        self.auth_calls.load(Ordering::SeqCst)
    }

    /// Number of requests the search endpoint has served.
    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    /// Body of the most recent authentication request, if any.
    pub fn last_auth_body(&self) -> Option<Value> {
        self.last_auth_body.lock().unwrap().clone()
    }

    /// The most recent search request, if any.
    pub fn last_search(&self) -> Option<RecordedSearch> {
        self.last_search.lock().unwrap().clone()
    }
}

/// A PCL-shaped search response with a single bankruptcy case.
pub fn default_search_response() -> Value {
    json!({
        "content": [{
            "caseId": 171_121,
            "caseYear": 2002,
            "caseNumber": 20_340,
            "caseNumberFull": "1:2002bk20340",
            "caseOffice": "1",
            "caseTitle": "Mock Debtor",
            "caseType": "bk",
            "courtId": "nysbke",
            "dateFiled": "2002-06-14",
            "jurisdictionType": "Bankruptcy"
        }],
        "pageInfo": {
            "number": 0,
            "size": 54,
            "totalElements": 1,
            "totalPages": 1,
            "first": true,
            "last": true
        }
    })
}

/// Build the stub router over shared [`MockPacer`] state.
pub fn router(state: Arc<MockPacer>) -> Router {
    Router::new()
        .route(AUTH_PATH, post(cso_auth))
        .route(FIND_PATH, post(find_case))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `POST /services/cso-auth` — answer with the configured token.
async fn cso_auth(State(state): State<Arc<MockPacer>>, Json(body): Json<Value>) -> Json<Value> {
    state.auth_calls.fetch_add(1, Ordering::SeqCst);
    *state.last_auth_body.lock().unwrap() = Some(body);

    let token = state.token.read().unwrap().clone();
    match token {
        Some(token) => Json(json!({
            "nextGenCSO": token,
            "loginResult": "0",
            "errorDescription": "",
        })),
        None => Json(json!({
            "loginResult": "1",
            "errorDescription": "Invalid username or password",
        })),
    }
}

/// `POST /pcl-public-api/rest/cases/find` — record the request and
/// answer with the configured document.
async fn find_case(
    State(state): State<Arc<MockPacer>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    state.search_calls.fetch_add(1, Ordering::SeqCst);

    let token_header = headers
        .get("x-next-gen-cso")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    *state.last_search.lock().unwrap() = Some(RecordedSearch { token_header, body });

    Json(state.search_response.read().unwrap().clone())
}
