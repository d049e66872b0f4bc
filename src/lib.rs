/// Available arguments.
mod args;
/// Available commands.
pub mod cmd;
/// The configuration used in Dropsearch.
pub mod config;
/// The errors returned by the clients.
pub mod errors;
/// Helper functions to work with JSON.
pub mod json;
/// The logger writing to stderr.
mod logger;
/// The Raindrop.io data model and client.
mod raindrop;
/// The search index the raindrops are written to.
pub mod search;

pub use args::{Args, USAGE};
pub use config::Config;
pub use logger::Logger;
pub use raindrop::{
    Access, CacheStatus, Collection, CollectionsResponse, CreatorRef, FetchRaindrops, File,
    Highlight, Media, MockRaindropClient, Raindrop, RaindropClient, RaindropsResponse, Ref,
};
pub use search::{MeilisearchClient, MockSearchIndex, SearchIndex, TaskInfo};
