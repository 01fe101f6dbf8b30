// File: crates/heatmap-cli/src/fetch.rs
// Summary: Loads the anomaly dataset from the remote feed or a local JSON file.

use std::path::Path;

use heatmap_core::{Dataset, DatasetError};
use log::info;
use reqwest::{Client, StatusCode};
use thiserror::Error;

/// Published monthly global land-surface temperature feed (1753-2015).
pub const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Anything other than 200 OK; no retry is attempted.
    #[error("bad response status for {url}: {status}")]
    Status { url: String, status: StatusCode },

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// GET `url` once and parse the body as a dataset.
pub async fn fetch_dataset(client: &Client, url: &str) -> Result<Dataset, FetchError> {
    info!("Fetching {url}");
    let response = client.get(url).send().await?;
    if response.status() != StatusCode::OK {
        return Err(FetchError::Status { url: url.to_string(), status: response.status() });
    }
    let body = response.bytes().await?;
    let dataset = Dataset::from_json_slice(&body)?;
    info!("Loaded {} records (base {} ℃)", dataset.len(), dataset.base_temperature);
    Ok(dataset)
}

pub fn read_dataset(path: &Path) -> Result<Dataset, FetchError> {
    let dataset = Dataset::from_path(path)?;
    info!("Loaded {} records from {}", dataset.len(), path.display());
    Ok(dataset)
}
