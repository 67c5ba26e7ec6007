mod common;

use okbo::{
    ebay::{EbayError, browse},
    types::UpstreamResponse,
};
use reqwest::Client;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

use common::*;

async fn mount_token_once(server: &MockServer, access_token: &str) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(access_token, 7200)))
        .up_to_n_times(1)
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_browse(server: &MockServer, bearer: &str, status: u16, times: u64) {
    Mock::given(method("GET"))
        .and(path(BROWSE_PATH))
        .and(header("authorization", format!("Bearer {bearer}").as_str()))
        .respond_with(
            ResponseTemplate::new(status).set_body_json(json!({ "status": status, "total": 0 })),
        )
        .expect(times)
        .mount(server)
        .await;
}

async fn run(server: &MockServer, query: &str) -> Result<UpstreamResponse, EbayError> {
    let manager = token_manager(server, credentials());
    browse::search(
        &Client::new(),
        &manager,
        &endpoints(server).browse_url,
        query,
        browse::DEFAULT_LIMIT,
    )
    .await
}

#[test]
fn test_validate_query() {
    assert_eq!(browse::validate_query("  eli manning ").unwrap(), "eli manning");
    assert_eq!(browse::validate_query("abc").unwrap(), "abc");
    assert!(matches!(
        browse::validate_query(" ab "),
        Err(EbayError::Validation(_))
    ));
}

#[tokio::test]
async fn test_success_is_returned_verbatim() {
    let server = MockServer::start().await;
    mount_token_once(&server, "tok-1").await;
    Mock::given(method("GET"))
        .and(path(BROWSE_PATH))
        .and(query_param("q", "eli manning"))
        .and(query_param("limit", "10"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"total":1}"#))
        .expect(1)
        .mount(&server)
        .await;

    let res = run(&server, " eli manning ").await.unwrap();
    assert_eq!(res.status, 200);
    assert_eq!(res.body, r#"{"total":1}"#);
}

#[tokio::test]
async fn test_rejected_token_is_refreshed_and_retried_once() {
    let server = MockServer::start().await;
    mount_token_once(&server, "stale").await;
    mount_token_once(&server, "fresh").await;
    mount_browse(&server, "stale", 401, 1).await;
    mount_browse(&server, "fresh", 200, 1).await;

    let res = run(&server, "eli manning").await.unwrap();
    assert_eq!(res.status, 200);
}

#[tokio::test]
async fn test_second_rejection_is_passed_through_without_third_call() {
    let server = MockServer::start().await;
    mount_token(&server, "tok", 7200, 2).await;
    mount_browse(&server, "tok", 401, 2).await;

    let res = run(&server, "eli manning").await.unwrap();
    assert_eq!(res.status, 401);
}

#[tokio::test]
async fn test_other_failures_are_not_retried() {
    for status in [400, 403, 404, 429, 500, 503] {
        let server = MockServer::start().await;
        mount_token(&server, "tok", 7200, 1).await;
        mount_browse(&server, "tok", status, 1).await;

        let res = run(&server, "eli manning").await.unwrap();
        assert_eq!(res.status, status);
        assert!(res.body.contains(&status.to_string()));
    }
}

#[tokio::test]
async fn test_short_query_makes_no_outbound_call() {
    let server = MockServer::start().await;

    let err = run(&server, "ab").await.unwrap_err();
    assert!(matches!(err, EbayError::Validation(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_token_failure_stops_before_search() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;
    mount_browse(&server, "tok", 200, 0).await;

    let err = run(&server, "eli manning").await.unwrap_err();
    assert!(matches!(err, EbayError::CredentialFetch { status: 500, .. }));
}

#[test]
fn test_into_result_maps_statuses() {
    let ok = UpstreamResponse { status: 200, body: "{}".to_string() };
    assert_eq!(ok.into_result().unwrap(), "{}");

    let rejected = UpstreamResponse { status: 401, body: "no".to_string() };
    assert!(matches!(
        rejected.into_result(),
        Err(EbayError::UpstreamRejected { status: 401, .. })
    ));

    let failed = UpstreamResponse { status: 503, body: "down".to_string() };
    assert!(matches!(
        failed.into_result(),
        Err(EbayError::Upstream { status: 503, .. })
    ));
}
