use anyhow::Context;
use log::{debug, trace, warn};
use std::env;
use url::Url;

/// The environment variable holding the Raindrop.io API token.
pub const RAINDROP_TOKEN_VAR: &str = "DROPSEARCH_RAINDROP_TOKEN";
/// The environment variable holding the Meilisearch API key.
pub const MEILISEARCH_TOKEN_VAR: &str = "DROPSEARCH_MEILISEARCH_TOKEN";
/// The environment variable overriding the Raindrop.io API base url.
pub const RAINDROP_URL_VAR: &str = "DROPSEARCH_RAINDROP_URL";
/// The environment variable overriding the Meilisearch host.
pub const MEILISEARCH_URL_VAR: &str = "DROPSEARCH_MEILISEARCH_URL";

/// The default for `Config::raindrop_url`.
const RAINDROP_URL_DEFAULT: &str = "https://api.raindrop.io/rest/v1";
/// The default for `Config::meilisearch_url`.
const MEILISEARCH_URL_DEFAULT: &str = "http://search";

/// The name of the search index the raindrops are written to.
pub const INDEX_NAME: &str = "raindrops";

/// A configuration for running Dropsearch.
#[derive(Debug, PartialEq, Clone)]
pub struct Config {
    /// The token to authenticate against the Raindrop.io API.
    pub raindrop_token: String,
    /// The API key to authenticate against Meilisearch.
    pub meilisearch_token: String,
    /// The base url of the Raindrop.io REST API.
    pub raindrop_url: Url,
    /// The host of the Meilisearch instance.
    pub meilisearch_url: Url,
    /// The index the raindrops are written to and searched in.
    pub index_name: String,
}

impl Config {
    pub fn new(
        raindrop_token: &str,
        meilisearch_token: &str,
        raindrop_url: Url,
        meilisearch_url: Url,
    ) -> Self {
        Self {
            raindrop_token: raindrop_token.to_owned(),
            meilisearch_token: meilisearch_token.to_owned(),
            raindrop_url,
            meilisearch_url,
            index_name: INDEX_NAME.to_owned(),
        }
    }

    /// Read the configuration from the environment.
    ///
    /// Missing tokens are not treated as an error: the first request against
    /// the corresponding service will be rejected instead.
    pub fn init() -> Result<Config, anyhow::Error> {
        let raindrop_token = env::var(RAINDROP_TOKEN_VAR).unwrap_or_default();
        let meilisearch_token = env::var(MEILISEARCH_TOKEN_VAR).unwrap_or_default();

        if raindrop_token.is_empty() {
            debug!("{RAINDROP_TOKEN_VAR} is not set");
        }

        if meilisearch_token.is_empty() {
            debug!("{MEILISEARCH_TOKEN_VAR} is not set");
        }

        let raindrop_url = parse_url(RAINDROP_URL_VAR, RAINDROP_URL_DEFAULT)?;
        let meilisearch_url = parse_url(MEILISEARCH_URL_VAR, MEILISEARCH_URL_DEFAULT)?;

        if raindrop_url.scheme() == "http" {
            warn!("Raindrop.io token is sent unencrypted to {raindrop_url}");
        }

        let config = Config::new(
            &raindrop_token,
            &meilisearch_token,
            raindrop_url,
            meilisearch_url,
        );

        trace!("Config: {:#?}", config.redacted());

        Ok(config)
    }

    /// A copy of the config which is safe to be logged.
    fn redacted(&self) -> Config {
        let redact = |token: &str| {
            if token.is_empty() {
                String::new()
            } else {
                "***".to_owned()
            }
        };

        Config {
            raindrop_token: redact(&self.raindrop_token),
            meilisearch_token: redact(&self.meilisearch_token),
            ..self.clone()
        }
    }
}

fn parse_url(var: &str, default: &str) -> Result<Url, anyhow::Error> {
    let raw_url = env::var(var).unwrap_or_else(|_| default.to_owned());
    let url = Url::parse(&raw_url).context(format!("Invalid url in {var}: {raw_url}"))?;
    Ok(url)
}

/// Join a path to a base url without dropping the last segment of the base.
pub fn endpoint(base: &Url, path: &str) -> String {
    format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
