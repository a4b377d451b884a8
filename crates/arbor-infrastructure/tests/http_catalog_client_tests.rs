//! HttpCatalogClient tests against a mock HTTP server.

use arbor_core::catalog::{CatalogClient, ItemId, extract_plant_detail, extract_plants};
use arbor_core::error::ArborError;
use arbor_infrastructure::HttpCatalogClient;
use mockito::Server;
use serde_json::json;

#[tokio::test]
async fn test_categories_returns_raw_payload() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/categories")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"data": [{"id": 1, "category_name": "Fruit"}]}).to_string())
        .create_async()
        .await;

    let client = HttpCatalogClient::new(server.url());
    let payload = client.categories().await.expect("Should fetch categories");

    assert_eq!(payload, json!({"data": [{"id": 1, "category_name": "Fruit"}]}));
}

#[tokio::test]
async fn test_plants_by_category_hits_category_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/category/1")
        .with_status(200)
        .with_body(json!({"data": [{"id": 9, "plant_name": "Mango", "price": "150"}]}).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = HttpCatalogClient::new(format!("{}/", server.url()));
    let payload = client
        .plants_by_category(&ItemId::from(1))
        .await
        .expect("Should fetch category plants");

    mock.assert_async().await;
    let plants = extract_plants(&payload);
    assert_eq!(plants.len(), 1);
    assert_eq!(plants[0].name, "Mango");
    assert_eq!(plants[0].price, 150.0);
}

#[tokio::test]
async fn test_all_plants_and_detail_paths() {
    let mut server = Server::new_async().await;
    let _plants = server
        .mock("GET", "/plants")
        .with_status(200)
        .with_body(json!({"plants": []}).to_string())
        .create_async()
        .await;
    let _detail = server
        .mock("GET", "/plant/9")
        .with_status(200)
        .with_body(json!({"data": [{"id": 9, "plant_name": "Mango"}]}).to_string())
        .create_async()
        .await;

    let client = HttpCatalogClient::new(server.url());

    let plants = client.all_plants().await.unwrap();
    assert!(extract_plants(&plants).is_empty());

    let detail = client.plant_detail(&ItemId::from(9)).await.unwrap();
    let detail = extract_plant_detail(&detail).expect("Should unwrap detail list");
    assert_eq!(detail.name.as_deref(), Some("Mango"));
}

#[tokio::test]
async fn test_non_success_status_is_transport_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/plant/9")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let client = HttpCatalogClient::new(server.url());
    let err = client.plant_detail(&ItemId::from(9)).await.unwrap_err();

    let expected_url = format!("{}/plant/9", server.url());
    match err {
        ArborError::Transport { status, url, .. } => {
            assert_eq!(status, Some(500));
            assert_eq!(url, expected_url);
        }
        other => panic!("Expected Transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_not_found_is_transport_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/category/404")
        .with_status(404)
        .create_async()
        .await;

    let client = HttpCatalogClient::new(server.url());
    let err = client
        .plants_by_category(&ItemId::from(404))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_non_json_body_is_transport_error_without_status() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/plants")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let client = HttpCatalogClient::new(server.url());
    let err = client.all_plants().await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    // Port 9 (discard) on loopback is not expected to accept HTTP.
    let client = HttpCatalogClient::new("http://127.0.0.1:9");
    let err = client.categories().await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_plant_detail_id_cannot_reach_other_endpoints() {
    let mut server = Server::new_async().await;
    let plants = server
        .mock("GET", "/plants")
        .with_status(200)
        .with_body(json!({"data": [{"id": 1, "plant_name": "Mango"}]}).to_string())
        .expect(0)
        .create_async()
        .await;

    let client = HttpCatalogClient::new(server.url());
    let result = client.plant_detail(&ItemId::from("../plants")).await;

    plants.assert_async().await;
    let err = result.expect_err("Unknown path should not succeed");
    assert!(err.is_transport());
}
