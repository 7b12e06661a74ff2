use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcmError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: expected a top-level JSON array of points of interest, found {found}")]
    NotAnArray { path: String, found: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A coordinate was present but could not be read as a finite number.
    #[error("record {index}: {field} value {value} is not a valid coordinate")]
    InvalidCoordinate {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("failed to serialize normalized chargers: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
