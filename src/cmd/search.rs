use crate::{search::SEARCH_LIMIT, Config, MeilisearchClient, Raindrop, SearchIndex};
use anyhow::Context;
use colored::Colorize;
use log::{debug, info};
use std::io::{self, Write};

/// Search the index and print the hits to stdout.
pub async fn search(query: &str, config: &Config) -> Result<(), anyhow::Error> {
    let search_index = MeilisearchClient::new(config)?;
    let mut stdout = io::stdout();

    search_bookmarks(query, &search_index, &mut stdout).await?;

    Ok(())
}

/// Query the index for at most `SEARCH_LIMIT` hits and render them to `writer`.
pub async fn search_bookmarks(
    query: &str,
    search_index: &impl SearchIndex,
    writer: &mut impl Write,
) -> Result<usize, anyhow::Error> {
    debug!("Search for {query:?}");

    let hits = search_index
        .search(query, SEARCH_LIMIT)
        .await
        .context(format!("Can't search for '{query}'"))?;

    info!(
        "found {} hits for {}",
        hits.len().to_string().bright_yellow(),
        query.bright_cyan()
    );

    for (i, hit) in hits.iter().enumerate() {
        render_hit(writer, i + 1, hit)?;
    }

    writer.flush()?;

    Ok(hits.len())
}

/// Render a single hit.
///
/// The excerpt and the tags are omitted if they are empty.
pub fn render_hit(writer: &mut impl Write, rank: usize, hit: &Raindrop) -> Result<(), io::Error> {
    writeln!(writer, "{rank}. {}", hit.title.green())?;
    writeln!(writer, "   Link: {}", hit.link.blue())?;

    if !hit.excerpt.is_empty() {
        writeln!(writer, "   Excerpt: {}", hit.excerpt)?;
    }

    writeln!(
        writer,
        "   Domain: {}, Created: {}",
        hit.domain.dimmed(),
        hit.created.format("%Y-%m-%d").to_string().dimmed()
    )?;

    if !hit.tags.is_empty() {
        writeln!(writer, "   Tags: {}", hit.tags.join(", ").yellow())?;
    }

    writeln!(writer)?;

    Ok(())
}
