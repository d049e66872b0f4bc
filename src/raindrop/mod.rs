mod client;
mod models;

pub use client::{FetchRaindrops, MockRaindropClient, RaindropClient};
pub use models::{
    Access, CacheStatus, Collection, CollectionsResponse, CreatorRef, File, Highlight, Media,
    Raindrop, RaindropsResponse, Ref,
};
