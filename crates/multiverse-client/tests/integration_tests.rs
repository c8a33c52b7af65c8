//! Integration tests for multiverse-client
//!
//! These tests spin up a real server on the bundled dataset and use the
//! client to interact with it. This keeps the client in sync with the API.

use multiverse_api::{create_router, AppState};
use multiverse_client::testing::TestServer;
use multiverse_client::{LocationQuery, MultiverseClientError};
use multiverse_core::Dataset;
use pretty_assertions::assert_eq;

// =============================================================================
// Test Helpers
// =============================================================================

async fn create_test_server() -> TestServer {
    TestServer::start_with(|base_url| {
        let state = AppState::with_public_url(Dataset::bundled().unwrap(), base_url).unwrap();
        create_router(state)
    })
    .await
    .expect("Failed to start test server")
}

// =============================================================================
// Health & Index
// =============================================================================

#[tokio::test]
async fn test_health() {
    let server = create_test_server().await;
    assert_eq!(server.client.health().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_api_root_points_at_server() {
    let server = create_test_server().await;
    let root = server.client.api_root().await.unwrap();
    assert_eq!(root.locations, format!("{}/api/location", server.base_url()));
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_list_and_follow_links() {
    let server = create_test_server().await;

    let first = server
        .client
        .list_locations(&LocationQuery::new())
        .await
        .unwrap();
    assert_eq!(first.results.len(), 20);
    assert_eq!(first.info.prev, "");
    assert!(first.info.next.ends_with("page=2"));

    let second = server.client.follow(&first.info.next).await.unwrap();
    assert_eq!(second.results[0].id, 21);
    assert!(second.info.prev.ends_with("page=1"));

    let back = server.client.follow(&second.info.prev).await.unwrap();
    assert_eq!(back.results, first.results);
}

#[tokio::test]
async fn test_list_with_filters() {
    let server = create_test_server().await;

    let query = LocationQuery::new()
        .name("earth")
        .location_type("planet")
        .dimension("c-137");
    let page = server.client.list_locations(&query).await.unwrap();

    assert!(!page.results.is_empty());
    assert!(page.results.iter().any(|l| l.id == 1));
    for location in &page.results {
        assert!(location.name.contains("Earth"));
        assert!(location.location_type.contains("Planet"));
        assert!(location.dimension.contains("C-137"));
    }
}

#[tokio::test]
async fn test_page_past_end() {
    let server = create_test_server().await;

    let err = server
        .client
        .list_locations(&LocationQuery::new().page(12345))
        .await
        .unwrap_err();
    assert!(matches!(err, MultiverseClientError::PageNotFound(_)));
}

// =============================================================================
// Lookup
// =============================================================================

#[tokio::test]
async fn test_get_location() {
    let server = create_test_server().await;

    let location = server.client.get_location(1).await.unwrap();
    assert_eq!(location.id, 1);
    assert_eq!(location.name, "Earth (C-137)");
}

#[tokio::test]
async fn test_get_locations_in_requested_order() {
    let server = create_test_server().await;

    let locations = server.client.get_locations(&[5, 3, 1]).await.unwrap();
    let ids: Vec<u32> = locations.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![5, 3, 1]);

    assert!(server.client.get_locations(&[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_locations_with_one_id_is_a_list() {
    let server = create_test_server().await;

    let locations = server.client.get_locations(&[5]).await.unwrap();
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].id, 5);
}

#[tokio::test]
async fn test_get_raw_bracketed_list() {
    let server = create_test_server().await;

    let body = server.client.get_raw("[1,2,3]").await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_error_classification() {
    let server = create_test_server().await;

    let err = server.client.get_location(12345).await.unwrap_err();
    assert!(matches!(err, MultiverseClientError::LocationNotFound(_)));

    let err = server.client.get_raw("asdasd").await.unwrap_err();
    assert!(matches!(err, MultiverseClientError::BadParam(_)));

    for selector in ["1,2]", "[1,2", "[1,asdasd]"] {
        let err = server.client.get_raw(selector).await.unwrap_err();
        assert!(
            matches!(err, MultiverseClientError::BadArray(_)),
            "{} gave {:?}",
            selector,
            err
        );
    }
}
