mod common;

use assert_matches::assert_matches;
use dropsearch::{errors::DropsearchError, FetchRaindrops, RaindropClient, Ref};
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn test_collections() {
    let mock_server = common::start_mock_server().await;
    common::mount_raindrop_api(&mock_server, &[1, 2, 0]).await;
    let config = common::test_config(&mock_server);
    let client = RaindropClient::new(&config).unwrap();

    let collections = client.collections().await.unwrap();
    assert_eq!(collections.len(), 3);
    assert_eq!(collections[0].id, 1);
    assert_eq!(collections[0].title, "Collection 1");
    assert_eq!(collections[0].parent, None);
    assert_eq!(collections[2].user, Ref { id: 32 });
}

#[tokio::test]
async fn test_raindrops() {
    let mock_server = common::start_mock_server().await;
    common::mount_raindrop_api(&mock_server, &[3, 5]).await;
    let config = common::test_config(&mock_server);
    let client = RaindropClient::new(&config).unwrap();

    let raindrops = client.raindrops(2).await.unwrap();
    assert_eq!(raindrops.len(), 5);
    assert!(raindrops
        .iter()
        .all(|raindrop| raindrop.collection == Ref { id: 2 }));
    assert_eq!(raindrops[0].title, "Raindrop 200");
    assert_eq!(raindrops[0].link, "https://example.com/200");
    assert_eq!(raindrops[0].tags, vec!["rust", "search"]);
    assert_eq!(
        raindrops[0].created.to_rfc3339(),
        "2023-03-14T09:26:53.123+00:00"
    );
}

#[tokio::test]
async fn test_collections_unauthorized() {
    let mock_server = common::start_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/collections"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "result": false, "errorMessage": "Unauthorized" })),
        )
        .mount(&mock_server)
        .await;
    let config = common::test_config(&mock_server);
    let client = RaindropClient::new(&config).unwrap();

    let res = client.collections().await;
    assert_matches!(res, Err(DropsearchError::HttpStatus { status, .. }) if status.starts_with("401"));
}

#[tokio::test]
async fn test_collections_rejected() {
    let mock_server = common::start_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/collections"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "result": false, "errorMessage": "Invalid token" })),
        )
        .mount(&mock_server)
        .await;
    let config = common::test_config(&mock_server);
    let client = RaindropClient::new(&config).unwrap();

    let res = client.collections().await;
    assert_matches!(res, Err(DropsearchError::Rejected { message, .. }) if message == "Invalid token");
}

#[tokio::test]
async fn test_raindrops_malformed_json() {
    let mock_server = common::start_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/raindrops/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"items\": ["))
        .mount(&mock_server)
        .await;
    let config = common::test_config(&mock_server);
    let client = RaindropClient::new(&config).unwrap();

    let res = client.raindrops(1).await;
    assert_matches!(res, Err(DropsearchError::DeserializeJson(_)));
}

