//! Integration tests for search pagination: the drain-pattern pager, the
//! stream adapter, sticky failure, and the exhaustion rules.

use futures_util::TryStreamExt;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use orcid_rs::{ClientConfig, OrcidClient, SearchParams, SearchQuery};

const QUERY: &str = "family-name:Carberry";

fn client_for(server: &MockServer) -> OrcidClient {
    OrcidClient::new(
        ClientConfig::default()
            .with_api_url(server.uri())
            .with_token("test-token")
            .with_rate_limit(0)
            .with_max_retries(0),
    )
}

fn page_body(num_found: u64, start: u64, ids: &[&str]) -> String {
    let results: Vec<String> = ids
        .iter()
        .map(|id| format!(r#"{{"orcid-identifier":{{"path":"{id}","host":"orcid.org"}}}}"#))
        .collect();
    format!(
        r#"{{"num-found":{num_found},"start":{start},"num-rows":{},"result":[{}]}}"#,
        ids.len(),
        results.join(",")
    )
}

async fn mount_page(server: &MockServer, start: Option<u64>, body: String) {
    let mock = Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", QUERY))
        .and(query_param("rows", "10"));
    let mock = match start {
        None => mock.and(query_param_is_missing("start")),
        Some(start) => mock.and(query_param("start", start.to_string())),
    };
    mock.respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(server)
        .await;
}

async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.unwrap_or_default().len()
}

/// The scenario from the service's pagination contract: 25 reported
/// matches served as short pages of 2, 2, and 1 items at offsets 0, 10,
/// and 20. Completion is judged against the requested page size, so the
/// short pages must not end iteration early.
#[tokio::test]
async fn pager_walks_short_pages_up_to_the_reported_total() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        None,
        page_body(25, 0, &["0000-0002-0000-0001", "0000-0002-0000-0002"]),
    )
    .await;
    mount_page(
        &server,
        Some(10),
        page_body(25, 10, &["0000-0002-0000-0003", "0000-0002-0000-0004"]),
    )
    .await;
    mount_page(&server, Some(20), page_body(25, 20, &["0000-0002-0000-0005"])).await;

    let client = client_for(&server);
    let mut pager = client
        .search()
        .pager(SearchQuery::new().family_name("Carberry").build());

    assert_eq!(pager.total_results(), 0);

    let mut seen = Vec::new();
    while pager.advance().await {
        let record = pager.current().expect("advance returned true");
        seen.push(
            record
                .orcid_identifier
                .as_ref()
                .and_then(|id| id.path.clone())
                .unwrap(),
        );
        assert_eq!(pager.total_results(), 25);
    }

    assert!(pager.last_error().is_none());
    assert_eq!(
        seen,
        [
            "0000-0002-0000-0001",
            "0000-0002-0000-0002",
            "0000-0002-0000-0003",
            "0000-0002-0000-0004",
            "0000-0002-0000-0005",
        ]
    );
    assert_eq!(request_count(&server).await, 3);
    assert_eq!(pager.total_results(), 25);

    // Exhaustion is final.
    assert!(!pager.advance().await);
    assert_eq!(request_count(&server).await, 3);
}

#[tokio::test]
async fn empty_first_page_ends_after_one_fetch_regardless_of_total() {
    let server = MockServer::start().await;
    mount_page(&server, None, page_body(25, 0, &[])).await;

    let client = client_for(&server);
    let mut pager = client.search().pager(SearchParams::new(QUERY));

    assert!(!pager.advance().await);
    assert!(pager.last_error().is_none());
    assert!(pager.current().is_none());
    assert_eq!(request_count(&server).await, 1);

    assert!(!pager.advance().await);
    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn short_page_then_empty_page_is_treated_as_exhaustion() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        None,
        page_body(25, 0, &["0000-0002-0000-0001", "0000-0002-0000-0002"]),
    )
    .await;
    mount_page(&server, Some(10), page_body(25, 10, &[])).await;

    let client = client_for(&server);
    let mut pager = client.search().pager(SearchParams::new(QUERY));

    let mut yielded = 0;
    while pager.advance().await {
        yielded += 1;
    }

    assert_eq!(yielded, 2);
    assert!(pager.last_error().is_none());
    assert_eq!(request_count(&server).await, 2);
    assert!(!pager.advance().await);
    assert_eq!(request_count(&server).await, 2);
}

#[tokio::test]
async fn failure_is_sticky_and_stops_io() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        None,
        page_body(25, 0, &["0000-0002-0000-0001", "0000-0002-0000-0002"]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", "10"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut pager = client.search().pager(SearchParams::new(QUERY));

    assert!(pager.advance().await);
    assert!(pager.advance().await);
    assert!(!pager.advance().await);

    let err = pager.last_error().expect("failed fetch should be recorded");
    assert_eq!(err.status(), Some(500));

    // No further I/O after the failure.
    assert!(!pager.advance().await);
    assert!(!pager.advance().await);
    assert_eq!(request_count(&server).await, 2);
}

#[tokio::test]
async fn pager_honors_a_nonzero_start_offset() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        Some(5),
        page_body(7, 5, &["0000-0002-0000-0006", "0000-0002-0000-0007"]),
    )
    .await;

    let client = client_for(&server);
    let mut params = SearchParams::new(QUERY);
    params.start = 5;
    let mut pager = client.search().pager(params);

    let mut yielded = 0;
    while pager.advance().await {
        yielded += 1;
    }

    // 5 + 10 >= 7: the window after the first page is past the total.
    assert_eq!(yielded, 2);
    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn pager_with_cancelled_token_fails_without_io() {
    let server = MockServer::start().await;
    let cancel = CancellationToken::new();
    cancel.cancel();

    let client = client_for(&server).with_cancellation(cancel);
    let mut pager = client.search().pager(SearchParams::new(QUERY));

    assert!(!pager.advance().await);
    assert!(pager.last_error().unwrap().is_cancelled());
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn stream_yields_every_record_across_pages() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        None,
        page_body(25, 0, &["0000-0002-0000-0001", "0000-0002-0000-0002"]),
    )
    .await;
    mount_page(
        &server,
        Some(10),
        page_body(25, 10, &["0000-0002-0000-0003", "0000-0002-0000-0004"]),
    )
    .await;
    mount_page(&server, Some(20), page_body(25, 20, &["0000-0002-0000-0005"])).await;

    let client = client_for(&server);
    let mut stream = client.search().stream(SearchParams::new(QUERY));

    let mut seen = Vec::new();
    while let Some(record) = stream.try_next().await.unwrap() {
        seen.push(record.orcid_identifier.unwrap().path.unwrap());
    }

    assert_eq!(seen.len(), 5);
    assert_eq!(seen[4], "0000-0002-0000-0005");
    assert_eq!(request_count(&server).await, 3);
}

#[tokio::test]
async fn stream_surfaces_the_first_error_and_ends() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        None,
        page_body(25, 0, &["0000-0002-0000-0001", "0000-0002-0000-0002"]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("start", "10"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut stream = client.search().stream(SearchParams::new(QUERY));

    assert!(stream.try_next().await.unwrap().is_some());
    assert!(stream.try_next().await.unwrap().is_some());

    let err = stream.try_next().await.unwrap_err();
    assert_eq!(err.status(), Some(503));

    // The stream is finished after the error.
    assert!(stream.try_next().await.unwrap().is_none());
    assert_eq!(request_count(&server).await, 2);
}

#[tokio::test]
async fn expanded_search_decodes_biographical_fields() {
    let body = r#"{
        "num-found": 1,
        "expanded-result": [{
            "orcid-id": "0000-0002-1825-0097",
            "given-names": "Josiah",
            "family-names": "Carberry",
            "institution-name": ["Brown University", "Wesleyan University"]
        }]
    }"#;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/expanded-search/"))
        .and(query_param("q", QUERY))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.search().expanded(QUERY).await.unwrap();

    assert_eq!(result.num_found, 1);
    let record = &result.expanded_results[0];
    assert_eq!(record.orcid_id.as_deref(), Some("0000-0002-1825-0097"));
    assert_eq!(record.family_names.as_deref(), Some("Carberry"));
    assert_eq!(record.institution_name.len(), 2);
}
