use super::SearchIndex;
use crate::{config, errors::DropsearchError, json, Config, Raindrop};
use async_trait::async_trait;
use log::{debug, trace};
use reqwest::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    Client as ReqwestClient, Method,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

/// The attribute identifying a raindrop document.
const PRIMARY_KEY: &str = "_id";

/// The task enqueued by Meilisearch for an asynchronous operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInfo {
    pub task_uid: u64,
    #[serde(default)]
    pub index_uid: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default, rename = "type")]
    pub task_type: String,
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    q: &'a str,
    limit: usize,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: Vec<Raindrop>,
}

/// A client for the Meilisearch HTTP API bound to a single index.
#[derive(Debug, Clone)]
pub struct MeilisearchClient {
    client: ReqwestClient,
    host: Url,
    api_key: String,
    index_name: String,
}

impl MeilisearchClient {
    pub fn new(config: &Config) -> Result<Self, DropsearchError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(DropsearchError::CreateClient)?;
        Ok(Self {
            client,
            host: config.meilisearch_url.clone(),
            api_key: config.meilisearch_token.clone(),
            index_name: config.index_name.clone(),
        })
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Vec<u8>,
    ) -> Result<T, DropsearchError> {
        let url = config::endpoint(&self.host, path);
        debug!("{method} {url}");

        let mut request = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        if !self.api_key.is_empty() {
            request = request.header(AUTHORIZATION, format!("Bearer {}", self.api_key));
        }

        let response = request
            .send()
            .await
            .map_err(|err| DropsearchError::HttpRequest {
                url: url.clone(),
                err,
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| DropsearchError::ReadResponse {
                url: url.clone(),
                err,
            })?;
        trace!("Response from {url} ({status}): {} bytes", body.len());

        if !status.is_success() {
            return Err(DropsearchError::HttpStatus {
                status: status.to_string(),
                url,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        json::deserialize(&body)
    }
}

#[async_trait]
impl SearchIndex for MeilisearchClient {
    async fn add_documents(&self, documents: &[Raindrop]) -> Result<TaskInfo, DropsearchError> {
        let path = format!(
            "indexes/{}/documents?primaryKey={PRIMARY_KEY}",
            self.index_name
        );
        let body = json::serialize(documents)?;
        let task = self.send(Method::POST, &path, body).await?;
        Ok(task)
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Raindrop>, DropsearchError> {
        let path = format!("indexes/{}/search", self.index_name);
        let body = json::serialize(SearchRequest { q: query, limit })?;
        let response = self.send::<SearchResponse>(Method::POST, &path, body).await?;
        Ok(response.hits)
    }
}
