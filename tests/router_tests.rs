//! Integration tests for path-based dispatch.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use orcid_rs::{ClientConfig, Error, OrcidClient, Resource};

const TEST_ID: &str = "0000-0002-1825-0097";

fn client_for(server: &MockServer) -> OrcidClient {
    OrcidClient::new(
        ClientConfig::default()
            .with_api_url(server.uri())
            .with_token("test-token")
            .with_rate_limit(0)
            .with_max_retries(0),
    )
}

async fn mount_json(server: &MockServer, endpoint: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{TEST_ID}/{endpoint}")))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json"))
        .mount(server)
        .await;
}

async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.unwrap_or_default().len()
}

#[tokio::test]
async fn bare_id_routes_to_the_record() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "record",
        &format!(r#"{{"orcid-identifier":{{"path":"{TEST_ID}"}}}}"#),
    )
    .await;

    let client = client_for(&server);

    let resource = client.by_path(&format!("/{TEST_ID}")).await.unwrap();
    let Resource::Record(record) = resource else {
        panic!("expected a record");
    };
    assert_eq!(
        record.orcid_identifier.unwrap().path.as_deref(),
        Some(TEST_ID)
    );

    // An explicit `/record` suffix lands on the same endpoint.
    let resource = client.by_path(&format!("/{TEST_ID}/record")).await.unwrap();
    assert!(matches!(resource, Resource::Record(_)));
    assert_eq!(request_count(&server).await, 2);
}

#[tokio::test]
async fn works_and_single_work_routes() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "works",
        r#"{"group":[{"work-summary":[{"put-code":92636200}]}]}"#,
    )
    .await;
    mount_json(
        &server,
        "work/92636200",
        r#"{"put-code":92636200,"title":{"title":{"value":"Toward a Unified Theory of High-Energy Metaphysics"}}}"#,
    )
    .await;

    let client = client_for(&server);

    let resource = client.by_path(&format!("/{TEST_ID}/works")).await.unwrap();
    let Resource::Works(works) = resource else {
        panic!("expected works");
    };
    assert_eq!(works.group.len(), 1);

    let resource = client
        .by_path(&format!("/{TEST_ID}/work/92636200"))
        .await
        .unwrap();
    let Resource::Work(work) = resource else {
        panic!("expected a single work");
    };
    assert_eq!(work.put_code.unwrap().value(), 92_636_200);
}

#[tokio::test]
async fn affiliation_and_activity_routes() {
    let server = MockServer::start().await;
    mount_json(&server, "qualifications", r#"{"affiliation-group":[]}"#).await;
    mount_json(&server, "fundings", r#"{"group":[]}"#).await;
    mount_json(&server, "peer-reviews", r#"{"group":[]}"#).await;

    let client = client_for(&server);

    assert!(matches!(
        client
            .by_path(&format!("/{TEST_ID}/qualifications"))
            .await
            .unwrap(),
        Resource::Qualifications(_)
    ));
    assert!(matches!(
        client.by_path(&format!("/{TEST_ID}/fundings")).await.unwrap(),
        Resource::Fundings(_)
    ));
    assert!(matches!(
        client
            .by_path(&format!("/{TEST_ID}/peer-reviews"))
            .await
            .unwrap(),
        Resource::PeerReviews(_)
    ));
}

#[tokio::test]
async fn person_subresources_are_served_from_the_person_section() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "person",
        r#"{
            "biography": {"content": "Josiah Carberry is a fictional professor."},
            "keywords": {"keyword": [{"content": "psychoceramics"}]}
        }"#,
    )
    .await;

    let client = client_for(&server);

    let resource = client.by_path(&format!("/{TEST_ID}/keywords")).await.unwrap();
    let Resource::Keywords(Some(keywords)) = resource else {
        panic!("expected keywords");
    };
    assert_eq!(keywords.keyword[0].content, "psychoceramics");

    let resource = client
        .by_path(&format!("/{TEST_ID}/biography"))
        .await
        .unwrap();
    let Resource::Biography(Some(biography)) = resource else {
        panic!("expected a biography");
    };
    assert!(biography.content.contains("fictional"));

    // Sections absent from the response map to None, not an error.
    let resource = client.by_path(&format!("/{TEST_ID}/email")).await.unwrap();
    assert!(matches!(resource, Resource::Emails(None)));
}

#[tokio::test]
async fn activities_route_reads_the_full_record() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "record",
        r#"{"activities-summary":{"works":{"group":[]}}}"#,
    )
    .await;

    let client = client_for(&server);
    let resource = client
        .by_path(&format!("/{TEST_ID}/activities"))
        .await
        .unwrap();
    let Resource::Activities(Some(summary)) = resource else {
        panic!("expected an activities summary");
    };
    assert!(summary.works.is_some());
}

#[tokio::test]
async fn invalid_paths_fail_without_io() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let work_without_code = format!("/{TEST_ID}/work");
    let unknown_resource = format!("/{TEST_ID}/bogus");
    for bad in ["", "/", work_without_code.as_str(), unknown_resource.as_str()] {
        let err = client.by_path(bad).await.unwrap_err();
        assert!(matches!(err, Error::InvalidPath(_)), "path {bad:?}: {err:?}");
    }

    let err = client
        .by_path(&format!("/{TEST_ID}/work/not-a-number"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidPath(_)));

    assert_eq!(request_count(&server).await, 0);
}
