use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Raw directory export read by `normalize`.
    pub input_path: PathBuf,
    /// Normalized array written by `normalize` and read by the query commands.
    pub output_path: PathBuf,
    /// Upper-case ISO 3166-1 alpha-2 code records must match to be kept.
    pub country_code: String,
    pub sanitize_coords: bool,
    pub query_limit: usize,
    pub log_level: String,
}
