mod meilisearch;

use crate::{config::INDEX_NAME, errors::DropsearchError, Raindrop};
use anyhow::anyhow;
use async_trait::async_trait;
pub use meilisearch::{MeilisearchClient, TaskInfo};
use parking_lot::Mutex;
use std::sync::Arc;

/// The maximum number of hits requested per search.
pub const SEARCH_LIMIT: usize = 10;

/// A trait to write to and query a search index.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Add or replace documents in the index.
    ///
    /// Documents which are missing in `documents` are kept in the index.
    async fn add_documents(&self, documents: &[Raindrop]) -> Result<TaskInfo, DropsearchError>;

    /// Search the index and return at most `limit` hits.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Raindrop>, DropsearchError>;
}

/// A mock search index used in testing.
#[derive(Debug, Clone)]
pub struct MockSearchIndex {
    /// The documents submitted per call of `add_documents`.
    submissions: Arc<Mutex<Vec<Vec<Raindrop>>>>,
    /// The queries received, together with the requested limit.
    queries: Arc<Mutex<Vec<(String, usize)>>>,
    /// Mock the hits returned for every query; `None` makes the search fail.
    hits: Arc<Mutex<Option<Vec<Raindrop>>>>,
}

impl MockSearchIndex {
    pub fn new() -> Self {
        Self {
            submissions: Arc::new(Mutex::new(Vec::new())),
            queries: Arc::new(Mutex::new(Vec::new())),
            hits: Arc::new(Mutex::new(Some(Vec::new()))),
        }
    }

    pub fn set_hits(&self, hits: Vec<Raindrop>) {
        *self.hits.lock() = Some(hits);
    }

    pub fn fail_search(&self) {
        *self.hits.lock() = None;
    }

    pub fn submissions(&self) -> Vec<Vec<Raindrop>> {
        self.submissions.lock().clone()
    }

    pub fn queries(&self) -> Vec<(String, usize)> {
        self.queries.lock().clone()
    }
}

impl Default for MockSearchIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchIndex for MockSearchIndex {
    async fn add_documents(&self, documents: &[Raindrop]) -> Result<TaskInfo, DropsearchError> {
        let mut submissions = self.submissions.lock();
        submissions.push(documents.to_vec());
        Ok(TaskInfo {
            task_uid: submissions.len() as u64 - 1,
            index_uid: Some(INDEX_NAME.to_owned()),
            status: "enqueued".to_owned(),
            task_type: "documentAdditionOrUpdate".to_owned(),
        })
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Raindrop>, DropsearchError> {
        self.queries.lock().push((query.to_owned(), limit));
        let hits = self
            .hits
            .lock()
            .clone()
            .ok_or(anyhow!("Can't search index"))?;
        Ok(hits.into_iter().take(limit).collect())
    }
}
