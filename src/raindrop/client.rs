use super::models::{Collection, CollectionsResponse, Raindrop, RaindropsResponse};
use crate::{config, errors::DropsearchError, json, Config};
use anyhow::anyhow;
use async_trait::async_trait;
use log::{debug, trace};
use parking_lot::Mutex;
use reqwest::{header::AUTHORIZATION, Client as ReqwestClient};
use serde::de::DeserializeOwned;
use std::{collections::HashMap, sync::Arc};
use url::Url;

/// A trait to fetch collections and raindrops from a real or mock client.
#[async_trait]
pub trait FetchRaindrops: Send + Sync {
    /// Fetch all collections of the authenticated user.
    async fn collections(&self) -> Result<Vec<Collection>, DropsearchError>;

    /// Fetch the raindrops in the given collection.
    async fn raindrops(&self, collection_id: i64) -> Result<Vec<Raindrop>, DropsearchError>;
}

/// A client for the Raindrop.io REST API.
#[derive(Debug, Clone)]
pub struct RaindropClient {
    client: ReqwestClient,
    base_url: Url,
    token: String,
}

impl RaindropClient {
    pub fn new(config: &Config) -> Result<Self, DropsearchError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(DropsearchError::CreateClient)?;
        Ok(Self {
            client,
            base_url: config.raindrop_url.clone(),
            token: config.raindrop_token.clone(),
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, DropsearchError> {
        let url = config::endpoint(&self.base_url, path);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
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
impl FetchRaindrops for RaindropClient {
    async fn collections(&self) -> Result<Vec<Collection>, DropsearchError> {
        let response = self.get::<CollectionsResponse>("collections").await?;

        if !response.result {
            return Err(DropsearchError::Rejected {
                url: config::endpoint(&self.base_url, "collections"),
                message: response.error_message.unwrap_or_default(),
            });
        }

        Ok(response.items)
    }

    async fn raindrops(&self, collection_id: i64) -> Result<Vec<Raindrop>, DropsearchError> {
        let path = format!("raindrops/{collection_id}");
        let response = self.get::<RaindropsResponse>(&path).await?;

        if !response.result {
            return Err(DropsearchError::Rejected {
                url: config::endpoint(&self.base_url, &path),
                message: response.error_message.unwrap_or_default(),
            });
        }

        Ok(response.items)
    }
}

/// A mock client to fetch raindrops used in testing.
#[derive(Debug, Clone)]
pub struct MockRaindropClient {
    /// Mock the collections; `None` makes the request fail.
    collections: Arc<Mutex<Option<Vec<Collection>>>>,
    /// Mock the raindrops per collection id.
    raindrops: Arc<Mutex<HashMap<i64, Vec<Raindrop>>>>,
    /// The collection ids requested so far, in order.
    requested: Arc<Mutex<Vec<i64>>>,
}

impl MockRaindropClient {
    pub fn new() -> Self {
        Self {
            collections: Arc::new(Mutex::new(Some(Vec::new()))),
            raindrops: Arc::new(Mutex::new(HashMap::new())),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a collection together with its raindrops.
    pub fn add(&self, collection: Collection, raindrops: Vec<Raindrop>) {
        let mut collections = self.collections.lock();
        let mut raindrops_map = self.raindrops.lock();
        raindrops_map.insert(collection.id, raindrops);
        collections.get_or_insert_with(Vec::new).push(collection);
    }

    /// Let the next request for collections fail.
    pub fn fail_collections(&self) {
        *self.collections.lock() = None;
    }

    pub fn requested(&self) -> Vec<i64> {
        self.requested.lock().clone()
    }
}

impl Default for MockRaindropClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FetchRaindrops for MockRaindropClient {
    async fn collections(&self) -> Result<Vec<Collection>, DropsearchError> {
        let collections = self
            .collections
            .lock()
            .clone()
            .ok_or(anyhow!("Can't fetch collections"))?;
        Ok(collections)
    }

    async fn raindrops(&self, collection_id: i64) -> Result<Vec<Raindrop>, DropsearchError> {
        self.requested.lock().push(collection_id);
        let raindrops = self
            .raindrops
            .lock()
            .get(&collection_id)
            .cloned()
            .ok_or(anyhow!("Can't fetch raindrops for collection {collection_id}"))?;
        Ok(raindrops)
    }
}
