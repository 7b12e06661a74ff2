use serde::{Deserialize, Serialize};

/// Station name used when a point of interest carries no title.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Operator name used when a point of interest carries none.
pub const UNKNOWN_OPERATOR: &str = "Unknown";

/// A charging location flattened out of a raw directory export.
///
/// Serialized field names follow the map UI contract (`powerKw`), so the
/// struct uses camelCase renaming rather than Rust field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedCharger {
    /// Dense, 1-based position in the normalized output.
    pub id: u64,
    /// Station title, `"Unknown"` when the source has none.
    pub name: String,
    pub operator: String,
    /// Town, falling back to state/province, or empty.
    pub city: String,
    pub lat: f64,
    pub lon: f64,
    /// Best connector rating in whole kilowatts. Serialized as `null` when
    /// no connection yielded a usable value.
    pub power_kw: Option<i64>,
}

impl NormalizedCharger {
    /// Returns `true` when the operator is a real name rather than the
    /// placeholder substituted during normalization.
    #[must_use]
    pub fn has_known_operator(&self) -> bool {
        let op = self.operator.trim();
        !op.is_empty() && op != UNKNOWN_OPERATOR
    }
}
