//! End-to-end client flow against the stub PACER endpoints.
//!
//! Each test serves the `mock-pacer` router (or a bespoke router for
//! failure cases) on an ephemeral port and points a [`PacerClient`] at
//! it, asserting the wire contract: request bodies, the
//! `X-NEXT-GEN-CSO` header, and call ordering between the two
//! endpoints.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use mock_pacer::MockPacer;
use pacer_sdk::{
    CaseQuery, ClientOptions, NoCredentials, PacerClient, PacerError, PartialCredentials,
};
use serde_json::json;

/// Serve a router on an ephemeral local port, returning its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// A client for `foo`/`bar` pointed at the given base URL.
fn client_for(base: &str) -> PacerClient {
    PacerClient::with_options(
        PartialCredentials::new("foo", "bar"),
        ClientOptions::with_base_url(base),
        &NoCredentials,
    )
    .unwrap()
}

async fn serve_mock(mock: Arc<MockPacer>) -> String {
    serve(mock_pacer::router(mock)).await
}

#[tokio::test]
async fn authenticate_caches_issued_token() {
    let mock = MockPacer::with_token("abc123");
    let base = serve_mock(mock.clone()).await;
    let client = client_for(&base);

    assert_eq!(client.token().await, None);
    client.authenticate().await.unwrap();

    assert_eq!(client.token().await.as_deref(), Some("abc123"));
    assert_eq!(mock.auth_calls(), 1);
    assert_eq!(
        mock.last_auth_body(),
        Some(json!({ "loginId": "foo", "password": "bar" }))
    );
}

#[tokio::test]
async fn find_case_authenticates_then_searches() {
    let mock = MockPacer::with_token("abc123");
    let base = serve_mock(mock.clone()).await;
    let client = client_for(&base);

    let results = client
        .find_case(&CaseQuery::number("1:2002bk20340"))
        .await
        .unwrap();

    assert_eq!(mock.auth_calls(), 1);
    assert_eq!(mock.search_calls(), 1);
    assert_eq!(results, mock.search_response());

    let search = mock.last_search().unwrap();
    assert_eq!(search.token_header.as_deref(), Some("abc123"));
    assert_eq!(search.body, json!({ "caseNumberFull": "1:2002bk20340" }));
}

#[tokio::test]
async fn missing_token_field_fails_without_searching() {
    let mock = MockPacer::without_token();
    let base = serve_mock(mock.clone()).await;
    let client = client_for(&base);

    let err = client
        .find_case(&CaseQuery::number("1:2002bk20340"))
        .await
        .unwrap_err();

    assert!(matches!(err, PacerError::Authorization(_)));
    assert_eq!(mock.auth_calls(), 1);
    assert_eq!(mock.search_calls(), 0);
}

#[tokio::test]
async fn empty_token_value_is_not_usable() {
    // An empty nextGenCSO is cached as-is by authenticate() but rejected
    // by find_case, which retries authentication once before failing.
    let mock = MockPacer::with_token("");
    let base = serve_mock(mock.clone()).await;
    let client = client_for(&base);

    client.authenticate().await.unwrap();
    assert_eq!(client.token().await.as_deref(), Some(""));

    let err = client.find_case(&CaseQuery::default()).await.unwrap_err();
    assert!(matches!(err, PacerError::Authorization(_)));
    assert_eq!(mock.auth_calls(), 2);
    assert_eq!(mock.search_calls(), 0);
}

#[tokio::test]
async fn second_search_reuses_cached_token() {
    let mock = MockPacer::with_token("abc123");
    let base = serve_mock(mock.clone()).await;
    let client = client_for(&base);

    client.find_case(&CaseQuery::number("1:2002bk20340")).await.unwrap();
    client.find_case(&CaseQuery::number("2:2010cv00123")).await.unwrap();

    assert_eq!(mock.auth_calls(), 1);
    assert_eq!(mock.search_calls(), 2);
}

#[tokio::test]
async fn concurrent_first_searches_share_one_authentication() {
    let mock = MockPacer::with_token("abc123");
    let base = serve_mock(mock.clone()).await;
    let client = client_for(&base);

    let first = CaseQuery::number("1:2002bk20340");
    let second = CaseQuery::number("2:2010cv00123");
    let (a, b) = tokio::join!(client.find_case(&first), client.find_case(&second));
    a.unwrap();
    b.unwrap();

    assert_eq!(mock.auth_calls(), 1);
    assert_eq!(mock.search_calls(), 2);
}

#[tokio::test]
async fn search_response_is_returned_verbatim() {
    let mock = MockPacer::new();
    let document = json!({
        "content": [
            { "caseNumberFull": "1:2002bk20340", "courtId": "nysbke" },
            { "caseNumberFull": "1:2002bk20341", "courtId": "nysbke" },
        ],
        "pageInfo": { "number": 0, "totalElements": 2 },
        "receipt": { "searchFee": ".10" },
    });
    mock.set_search_response(document.clone());
    let base = serve_mock(mock).await;
    let client = client_for(&base);

    let results = client
        .find_case(&CaseQuery::number("1:2002bk20340"))
        .await
        .unwrap();

    assert_eq!(results, document);
}

#[tokio::test]
async fn authenticate_overwrites_previous_token() {
    let mock = MockPacer::with_token("first");
    let base = serve_mock(mock.clone()).await;
    let client = client_for(&base);

    client.authenticate().await.unwrap();
    assert_eq!(client.token().await.as_deref(), Some("first"));

    // A later response without the token field clears the cache.
    mock.set_token(None);
    client.authenticate().await.unwrap();
    assert_eq!(client.token().await, None);
}

#[tokio::test]
async fn non_2xx_auth_response_is_a_transport_error() {
    let app = Router::new().route(
        "/services/cso-auth",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance window") }),
    );
    let base = serve(app).await;
    let client = client_for(&base);

    let err = client.authenticate().await.unwrap_err();
    assert!(matches!(err, PacerError::Http(_)));
    assert!(err.is_transport());
}

#[tokio::test]
async fn non_json_body_is_a_transport_error() {
    let app = Router::new().route("/services/cso-auth", post(|| async { "<html>login</html>" }));
    let base = serve(app).await;
    let client = client_for(&base);

    let err = client.authenticate().await.unwrap_err();
    assert!(matches!(err, PacerError::Serialization(_)));
    assert!(err.is_transport());
}
