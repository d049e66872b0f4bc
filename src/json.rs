use crate::errors::DropsearchError;
use serde::{de::DeserializeOwned, Serialize};

pub fn serialize(value: impl Serialize) -> Result<Vec<u8>, DropsearchError> {
    serde_json::to_vec(&value).map_err(DropsearchError::SerializeJson)
}

pub fn deserialize<T: DeserializeOwned>(slice: &[u8]) -> Result<T, DropsearchError> {
    serde_json::from_slice(slice).map_err(DropsearchError::DeserializeJson)
}
