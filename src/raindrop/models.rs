use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A reference to another Raindrop.io entity, serialized as `{"$id": 1}`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ref {
    #[serde(rename = "$id", default, deserialize_with = "null_as_default")]
    pub id: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Access {
    #[serde(deserialize_with = "null_as_default")]
    pub level: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub draggable: bool,
}

/// A collection of raindrops as returned by `GET /collections`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Collection {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub access: Access,
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub cover: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub expanded: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub last_update: DateTime<Utc>,
    /// The parent collection; `None` for root collections.
    pub parent: Option<Ref>,
    #[serde(deserialize_with = "null_as_default")]
    pub public: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub sort: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user: Ref,
    #[serde(deserialize_with = "null_as_default")]
    pub view: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub size: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub created: DateTime<Utc>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreatorRef {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct File {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub size: i64,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub file_type: String,
}

/// An annotation on the bookmarked page.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Highlight {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub note: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created: DateTime<Utc>,
}

/// A bookmark as returned by `GET /raindrops/{collection_id}`.
///
/// The same representation is submitted to the search index, so search hits
/// decode into this type as well.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Raindrop {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub collection: Ref,
    #[serde(deserialize_with = "null_as_default")]
    pub cover: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub excerpt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub note: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_update: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub media: Vec<Media>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub raindrop_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user: Ref,
    #[serde(deserialize_with = "null_as_default")]
    pub broken: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub cache: CacheStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub creator_ref: CreatorRef,
    #[serde(deserialize_with = "null_as_default")]
    pub file: File,
    #[serde(deserialize_with = "null_as_default")]
    pub important: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub highlights: Vec<Highlight>,
}

/// The response envelope of `GET /collections`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionsResponse {
    #[serde(default = "default_result")]
    pub result: bool,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Collection>,
}

/// The response envelope of `GET /raindrops/{collection_id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaindropsResponse {
    #[serde(default = "default_result")]
    pub result: bool,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Raindrop>,
}

fn default_result() -> bool {
    true
}

/// Decode an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
