//! File-level driver: load the raw export, normalize it, write the result.
//!
//! Input and output are handled whole; a country export is a few thousand
//! records, so neither side streams.

use std::path::Path;

use chargemap_core::NormalizedCharger;
use serde_json::Value;

use crate::error::OcmError;
use crate::normalize::{NormalizeOptions, Normalizer, RunSummary};
use crate::types::RawPoi;

/// Reads and parses a raw export file.
///
/// # Errors
///
/// Returns [`OcmError::Io`] if the file cannot be read, or any error from
/// [`parse_raw_pois`].
pub fn load_raw_pois(path: &Path) -> Result<Vec<RawPoi>, OcmError> {
    let content = std::fs::read_to_string(path).map_err(|source| OcmError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_document(&content, &path.display().to_string())
}

/// Parses a raw export document.
///
/// # Errors
///
/// Returns [`OcmError::Deserialize`] if the document is not valid JSON or a
/// record does not have the expected object shape, and
/// [`OcmError::NotAnArray`] if the top-level value is not an array.
pub fn parse_raw_pois(content: &str) -> Result<Vec<RawPoi>, OcmError> {
    parse_document(content, "input document")
}

/// `origin` names the document in errors: a file path or a fixed label.
fn parse_document(content: &str, origin: &str) -> Result<Vec<RawPoi>, OcmError> {
    // Exports saved on Windows tools sometimes carry a BOM.
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let document: Value =
        serde_json::from_str(content).map_err(|source| OcmError::Deserialize {
            context: origin.to_string(),
            source,
        })?;

    let records = match document {
        Value::Array(records) => records,
        other => {
            return Err(OcmError::NotAnArray {
                path: origin.to_string(),
                found: json_type_name(&other).to_string(),
            })
        }
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record).map_err(|source| OcmError::Deserialize {
                context: format!("record {index}"),
                source,
            })
        })
        .collect()
}

/// Writes `chargers` as an indented JSON array with a trailing newline.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns [`OcmError::Serialize`] or [`OcmError::Write`].
pub fn write_chargers(path: &Path, chargers: &[NormalizedCharger]) -> Result<(), OcmError> {
    let mut output = serde_json::to_string_pretty(chargers)?;
    output.push('\n');

    let write_err = |source| OcmError::Write {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, output).map_err(write_err)
}

/// Reads a file previously produced by [`write_chargers`].
///
/// # Errors
///
/// Returns [`OcmError::Io`] or [`OcmError::Deserialize`].
pub fn read_chargers(path: &Path) -> Result<Vec<NormalizedCharger>, OcmError> {
    let content = std::fs::read_to_string(path).map_err(|source| OcmError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| OcmError::Deserialize {
        context: path.display().to_string(),
        source,
    })
}

/// Runs the full load, normalize and write pass.
///
/// # Errors
///
/// Any load, coordinate or write failure aborts the run; nothing is written
/// unless every record was processed.
pub fn run(
    input: &Path,
    output: &Path,
    options: &NormalizeOptions,
) -> Result<RunSummary, OcmError> {
    tracing::info!(
        input = %input.display(),
        country = %options.country_code,
        sanitize = options.bounds.is_some(),
        "normalizing charging stations"
    );

    let pois = load_raw_pois(input)?;
    let mut normalizer = Normalizer::new(options.clone());
    let chargers = normalizer.push_all(&pois)?;

    write_chargers(output, &chargers)?;

    let summary = normalizer.summary();
    tracing::info!(
        read = summary.read,
        written = summary.written,
        excluded_country = summary.excluded_country,
        excluded_coordinates = summary.excluded_coordinates,
        excluded_bounds = summary.excluded_bounds,
        swapped = summary.swapped_coordinates,
        output = %output.display(),
        "normalization complete"
    );
    Ok(summary)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_raw_pois_reads_array() {
        let doc = r#"[{"AddressInfo": {"Latitude": 60.1, "Longitude": 24.9}}, {}]"#;
        let pois = parse_raw_pois(doc).unwrap();
        assert_eq!(pois.len(), 2);
    }

    #[test]
    fn parse_raw_pois_accepts_empty_array() {
        assert!(parse_raw_pois("[]").unwrap().is_empty());
    }

    #[test]
    fn parse_raw_pois_strips_bom() {
        assert!(parse_raw_pois("\u{feff}[]").unwrap().is_empty());
    }

    #[test]
    fn parse_raw_pois_rejects_object_document() {
        let err = parse_raw_pois(r#"{"error": "rate limited"}"#).unwrap_err();
        assert!(
            matches!(
                err,
                OcmError::NotAnArray { ref path, ref found }
                    if path == "input document" && found == "an object"
            ),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn parse_raw_pois_rejects_invalid_json() {
        let err = parse_raw_pois("[{").unwrap_err();
        assert!(
            matches!(err, OcmError::Deserialize { ref context, .. } if context == "input document")
        );
    }

    #[test]
    fn parse_raw_pois_names_bad_record() {
        let err = parse_raw_pois(r#"[{}, "not a poi"]"#).unwrap_err();
        assert!(
            matches!(err, OcmError::Deserialize { ref context, .. } if context == "record 1")
        );
    }

    #[test]
    fn parse_raw_pois_rejects_non_object_address() {
        let err = parse_raw_pois(r#"[{"AddressInfo": "Helsinki"}]"#).unwrap_err();
        assert!(matches!(err, OcmError::Deserialize { .. }));
    }

    #[test]
    fn json_type_name_covers_scalars() {
        assert_eq!(json_type_name(&Value::Null), "null");
        assert_eq!(json_type_name(&Value::from(3)), "a number");
        assert_eq!(json_type_name(&Value::from("x")), "a string");
    }
}
