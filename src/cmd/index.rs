use crate::{Config, FetchRaindrops, MeilisearchClient, RaindropClient, SearchIndex};
use anyhow::Context;
use colored::Colorize;
use log::{debug, info};

/// Index all raindrops of all collections.
pub async fn index(config: &Config) -> Result<(), anyhow::Error> {
    let raindrop_client = RaindropClient::new(config)?;
    let search_index = MeilisearchClient::new(config)?;

    index_bookmarks(&raindrop_client, &search_index).await?;

    Ok(())
}

/// Fetch the raindrops of every collection and submit them to the index in a
/// single batch.
///
/// Aborts on the first error; nothing is submitted in that case.
pub async fn index_bookmarks(
    client: &impl FetchRaindrops,
    search_index: &impl SearchIndex,
) -> Result<usize, anyhow::Error> {
    info!("indexing started");

    debug!("Get collections");
    let collections = client
        .collections()
        .await
        .context("Can't get collections")?;
    debug!("Found {} collections", collections.len());

    let mut raindrops = Vec::new();

    for collection in &collections {
        debug!("Get raindrops for '{}'", collection.title);
        let collection_raindrops = client.raindrops(collection.id).await.context(format!(
            "Can't get raindrops for collection '{}' ({})",
            collection.title, collection.id
        ))?;
        raindrops.extend(collection_raindrops);
    }

    debug!("Insert {} raindrops into search index", raindrops.len());
    let task = search_index
        .add_documents(&raindrops)
        .await
        .context("Can't add documents to search index")?;
    debug!(
        "Enqueued task {} ({}) with status {}",
        task.task_uid, task.task_type, task.status
    );

    let num_documents = raindrops.len();
    info!(
        "{} documents indexed",
        num_documents.to_string().bright_yellow()
    );

    Ok(num_documents)
}
