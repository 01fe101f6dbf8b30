// File: crates/heatmap-core/src/error.rs
// Summary: Error types for dataset loading.

use thiserror::Error;

/// Failures raised while turning raw input into a [`crate::Dataset`].
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Payload was not valid JSON or did not match the expected shape.
    #[error("failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading the payload from disk or a stream failed.
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// A record carried a month outside 1..=12.
    #[error("record {index} has month {month}, expected 1..=12")]
    MonthOutOfRange { index: usize, month: u32 },
}

/// Type alias for Results using DatasetError
pub type Result<T> = std::result::Result<T, DatasetError>;
