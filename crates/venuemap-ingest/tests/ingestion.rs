//! Integration tests for the full ingestion pipeline.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made. The workbook fixtures under `tests/fixtures/`
//! cover the happy path (mixed valid/invalid rows) and both run-level
//! rejection conditions.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use venuemap_ingest::{load_locations, IngestError, SourceClient};

const LOCATIONS_XLSX: &[u8] = include_bytes!("fixtures/locations.xlsx");
const HEADER_ONLY_XLSX: &[u8] = include_bytes!("fixtures/header_only.xlsx");
const ALL_INVALID_XLSX: &[u8] = include_bytes!("fixtures/all_invalid.xlsx");

fn test_client() -> SourceClient {
    SourceClient::new(5, "venuemap-test/0.1").expect("failed to build test SourceClient")
}

async fn serve_workbook(server: &MockServer, bytes: &[u8]) {
    Mock::given(method("GET"))
        .and(path("/locations.xlsx"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(bytes.to_vec()))
        .mount(server)
        .await;
}

fn source_url(server: &MockServer) -> String {
    format!("{}/locations.xlsx", server.uri())
}

#[tokio::test]
async fn load_locations_normalizes_mixed_workbook_in_row_order() {
    let server = MockServer::start().await;
    serve_workbook(&server, LOCATIONS_XLSX).await;

    let locations = load_locations(&test_client(), &source_url(&server))
        .await
        .expect("expected a valid location collection");

    // Four data rows, one with an unparseable latitude: three survive.
    assert_eq!(locations.len(), 3);

    let podium = &locations[0];
    assert_eq!(podium.name, "Podium");
    assert_eq!(podium.address, "Slingerweg 1");
    assert_eq!(podium.presenter, "Anke");
    assert!((podium.latitude - 50.97).abs() < 1e-9);
    assert!((podium.longitude - 4.69).abs() < 1e-9);
    assert_eq!(podium.video_url.as_deref(), Some("x.mp4"));

    // Native-number coordinates pass through untouched.
    let weide = &locations[1];
    assert_eq!(weide.name, "Weide");
    assert_eq!(weide.address, "");
    assert!((weide.latitude - 50.9611).abs() < 1e-9);
    assert_eq!(weide.video_url, None);

    // A row without any name column still survives on valid coordinates.
    let unnamed = &locations[2];
    assert_eq!(unnamed.name, "");
    assert!((unnamed.latitude - 50.955).abs() < 1e-9);
    assert!((unnamed.longitude - 4.7).abs() < 1e-9);
}

#[tokio::test]
async fn load_locations_fails_on_header_only_workbook() {
    let server = MockServer::start().await;
    serve_workbook(&server, HEADER_ONLY_XLSX).await;

    let result = load_locations(&test_client(), &source_url(&server)).await;
    assert!(
        matches!(result, Err(IngestError::EmptySource)),
        "expected EmptySource, got: {result:?}"
    );
}

#[tokio::test]
async fn load_locations_fails_when_every_row_is_rejected() {
    let server = MockServer::start().await;
    serve_workbook(&server, ALL_INVALID_XLSX).await;

    let result = load_locations(&test_client(), &source_url(&server)).await;
    assert!(
        matches!(result, Err(IngestError::NoValidLocations)),
        "expected NoValidLocations, got: {result:?}"
    );
}

#[tokio::test]
async fn load_locations_fails_on_not_found_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/locations.xlsx"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = load_locations(&test_client(), &source_url(&server)).await;
    assert!(
        matches!(result, Err(IngestError::UnexpectedStatus { status: 404, .. })),
        "expected UnexpectedStatus(404), got: {result:?}"
    );
}

#[tokio::test]
async fn load_locations_fails_on_server_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/locations.xlsx"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = load_locations(&test_client(), &source_url(&server)).await;
    assert!(
        matches!(result, Err(IngestError::UnexpectedStatus { status: 500, .. })),
        "expected UnexpectedStatus(500), got: {result:?}"
    );
}

#[tokio::test]
async fn load_locations_fails_on_undecodable_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/locations.xlsx"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"not a workbook".to_vec()))
        .mount(&server)
        .await;

    let result = load_locations(&test_client(), &source_url(&server)).await;
    assert!(
        matches!(result, Err(IngestError::Workbook(_))),
        "expected Workbook error, got: {result:?}"
    );
}

#[tokio::test]
async fn load_locations_is_repeatable() {
    // Retry is the caller's responsibility: a second invocation over the
    // same source yields the same collection.
    let server = MockServer::start().await;
    serve_workbook(&server, LOCATIONS_XLSX).await;

    let client = test_client();
    let url = source_url(&server);
    let first = load_locations(&client, &url).await.unwrap();
    let second = load_locations(&client, &url).await.unwrap();
    assert_eq!(first, second);
}
