//! Error types for the NBA stats collection CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NbaError>;

#[derive(Error, Debug)]
pub enum NbaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid season label: {label} (expected YYYY-YY, e.g. 2024-25)")]
    InvalidSeason { label: String },

    #[error("Invalid measure type: {value}")]
    InvalidMeasureType { value: String },

    #[error("Stats API returned no result sets")]
    NoData,

    #[error("Column not found: {column}")]
    MissingColumn { column: String },

    #[error("Fetching {query} failed after {attempts} attempts: {source}")]
    FetchExhausted {
        query: String,
        attempts: u32,
        #[source]
        source: Box<NbaError>,
    },
}
