use thiserror::Error;

#[derive(Debug, Error)]
pub enum DropsearchError {
    #[error("Can't serialize json: {0}")]
    SerializeJson(serde_json::Error),
    #[error("Can't deserialize json: {0}")]
    DeserializeJson(serde_json::Error),
    #[error("Can't create client: {0}")]
    CreateClient(reqwest::Error),
    #[error("Can't send request to {url}: {err}")]
    HttpRequest { url: String, err: reqwest::Error },
    #[error("Unexpected status {status} for {url}: {body}")]
    HttpStatus {
        status: String,
        url: String,
        body: String,
    },
    #[error("Can't read response from {url}: {err}")]
    ReadResponse { url: String, err: reqwest::Error },
    #[error("Request rejected by {url}: {message}")]
    Rejected { url: String, message: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
