#![allow(dead_code)]

use dropsearch::Config;
use serde_json::{json, Value};
use url::Url;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

pub const RAINDROP_TOKEN: &str = "raindrop-token";
pub const MEILISEARCH_TOKEN: &str = "meilisearch-token";

pub async fn start_mock_server() -> MockServer {
    MockServer::start().await
}

/// A config pointing both services to the mock server.
pub fn test_config(mock_server: &MockServer) -> Config {
    let url = Url::parse(&mock_server.uri()).unwrap();
    Config::new(RAINDROP_TOKEN, MEILISEARCH_TOKEN, url.clone(), url)
}

pub fn collection_json(id: i64, title: &str) -> Value {
    json!({
        "_id": id,
        "access": { "level": 4, "draggable": true },
        "color": "#0c797d",
        "count": 0,
        "cover": [],
        "created": "2023-01-01T10:00:00.000Z",
        "expanded": true,
        "lastUpdate": "2023-01-02T10:00:00.000Z",
        "parent": null,
        "public": false,
        "sort": id,
        "title": title,
        "user": { "$id": 32 },
        "view": "list"
    })
}

pub fn raindrop_json(id: i64, collection_id: i64) -> Value {
    json!({
        "_id": id,
        "collection": { "$id": collection_id },
        "cover": "",
        "created": "2023-03-14T09:26:53.123Z",
        "domain": "example.com",
        "excerpt": format!("Excerpt {id}"),
        "note": "",
        "lastUpdate": "2023-03-15T10:00:00.000Z",
        "link": format!("https://example.com/{id}"),
        "media": [],
        "tags": ["rust", "search"],
        "title": format!("Raindrop {id}"),
        "type": "link",
        "user": { "$id": 32 },
        "broken": false,
        "cache": { "status": "ready", "size": 512, "created": "2023-03-14T09:27:00.000Z" },
        "creatorRef": { "_id": 32, "fullName": "Jane Doe" },
        "file": { "name": "", "size": 0, "type": "" },
        "important": false,
        "highlights": []
    })
}

/// Mount `GET /collections` returning one collection per entry of
/// `raindrops_per_collection`, and `GET /raindrops/{id}` for each of them.
pub async fn mount_raindrop_api(mock_server: &MockServer, raindrops_per_collection: &[i64]) {
    let collections = raindrops_per_collection
        .iter()
        .enumerate()
        .map(|(i, _)| collection_json(i as i64 + 1, &format!("Collection {}", i + 1)))
        .collect::<Vec<_>>();

    Mock::given(method("GET"))
        .and(path("/collections"))
        .and(header("Authorization", format!("Bearer {RAINDROP_TOKEN}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "result": true, "items": collections })),
        )
        .mount(mock_server)
        .await;

    for (i, count) in raindrops_per_collection.iter().enumerate() {
        let collection_id = i as i64 + 1;
        let raindrops = (0..*count)
            .map(|j| raindrop_json(collection_id * 100 + j, collection_id))
            .collect::<Vec<_>>();

        Mock::given(method("GET"))
            .and(path(format!("/raindrops/{collection_id}")))
            .and(header("Authorization", format!("Bearer {RAINDROP_TOKEN}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "result": true, "items": raindrops })),
            )
            .mount(mock_server)
            .await;
    }
}

/// Mount the document endpoint of the `raindrops` index.
pub async fn mount_add_documents(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/indexes/raindrops/documents"))
        .and(query_param("primaryKey", "_id"))
        .and(header("Authorization", format!("Bearer {MEILISEARCH_TOKEN}")))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "taskUid": 7,
            "indexUid": "raindrops",
            "status": "enqueued",
            "type": "documentAdditionOrUpdate",
            "enqueuedAt": "2023-03-15T10:00:00.000Z"
        })))
        .mount(mock_server)
        .await;
}

/// The documents received by the document endpoint, per request.
pub async fn submitted_documents(mock_server: &MockServer) -> Vec<Vec<Value>> {
    mock_server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|request| request.url.path() == "/indexes/raindrops/documents")
        .map(|request| serde_json::from_slice::<Vec<Value>>(&request.body).unwrap())
        .collect()
}
