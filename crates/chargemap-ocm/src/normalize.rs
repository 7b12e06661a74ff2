//! Per-record filtering and field extraction.
//!
//! Records are processed strictly in input order. Ids are assigned only to
//! records that survive every filter, so the output ids are always `1..=N`.

use chargemap_core::{NormalizedCharger, UNKNOWN_NAME, UNKNOWN_OPERATOR};
use serde_json::Value;

use crate::coords::{sanitize, BoundingBox, Sanitized};
use crate::error::OcmError;
use crate::parse_helpers::coerce_f64;
use crate::power::pick_power_kw;
use crate::types::{RawAddressInfo, RawPoi};

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeOptions {
    /// Records whose country code is present and differs from this are
    /// dropped. Records without a country code pass through.
    pub country_code: String,
    /// When set, swapped coordinates are corrected and points outside the box
    /// are dropped.
    pub bounds: Option<BoundingBox>,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            country_code: "FI".to_string(),
            bounds: None,
        }
    }
}

/// Why a record was left out of the output. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    Country,
    MissingCoordinates,
    OutOfBounds,
}

impl Exclusion {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Exclusion::Country => "country",
            Exclusion::MissingCoordinates => "missing_coordinates",
            Exclusion::OutOfBounds => "out_of_bounds",
        }
    }
}

/// Counters for a normalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub read: usize,
    pub written: usize,
    pub excluded_country: usize,
    pub excluded_coordinates: usize,
    pub excluded_bounds: usize,
    pub swapped_coordinates: usize,
}

impl RunSummary {
    fn record_exclusion(&mut self, reason: Exclusion) {
        match reason {
            Exclusion::Country => self.excluded_country += 1,
            Exclusion::MissingCoordinates => self.excluded_coordinates += 1,
            Exclusion::OutOfBounds => self.excluded_bounds += 1,
        }
    }
}

/// Stateful normalizer that hands out sequential ids.
#[derive(Debug)]
pub struct Normalizer {
    options: NormalizeOptions,
    next_id: u64,
    summary: RunSummary,
}

impl Normalizer {
    #[must_use]
    pub fn new(options: NormalizeOptions) -> Self {
        Self {
            options,
            next_id: 1,
            summary: RunSummary::default(),
        }
    }

    /// Counters accumulated so far.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Normalizes one record. `index` is the record's position in the input
    /// array and is used only for diagnostics.
    ///
    /// Returns `Ok(None)` when the record is filtered out; no id is consumed
    /// in that case.
    ///
    /// # Errors
    ///
    /// Returns [`OcmError::InvalidCoordinate`] when a latitude or longitude is
    /// present but not a finite number.
    pub fn push(
        &mut self,
        index: usize,
        poi: &RawPoi,
    ) -> Result<Option<NormalizedCharger>, OcmError> {
        self.summary.read += 1;
        let addr = poi.address_info.as_ref();

        if addr.is_some_and(|a| a.is_outside_country(&self.options.country_code)) {
            self.exclude(index, Exclusion::Country);
            return Ok(None);
        }

        let Some((mut lat, mut lon)) = read_coordinates(index, addr)? else {
            self.exclude(index, Exclusion::MissingCoordinates);
            return Ok(None);
        };

        if let Some(bounds) = &self.options.bounds {
            match sanitize(lat, lon, bounds) {
                Sanitized::Unchanged { .. } => {}
                Sanitized::Swapped {
                    lat: fixed_lat,
                    lon: fixed_lon,
                } => {
                    tracing::warn!(record = index, lat, lon, "latitude and longitude swapped");
                    self.summary.swapped_coordinates += 1;
                    lat = fixed_lat;
                    lon = fixed_lon;
                }
                Sanitized::OutOfBounds => {
                    self.exclude(index, Exclusion::OutOfBounds);
                    return Ok(None);
                }
            }
        }

        let id = self.next_id;
        self.next_id += 1;
        self.summary.written += 1;

        Ok(Some(NormalizedCharger {
            id,
            name: addr
                .and_then(RawAddressInfo::title)
                .unwrap_or(UNKNOWN_NAME)
                .to_string(),
            operator: poi.operator_title().unwrap_or(UNKNOWN_OPERATOR).to_string(),
            city: addr
                .and_then(RawAddressInfo::city)
                .unwrap_or_default()
                .to_string(),
            lat,
            lon,
            power_kw: pick_power_kw(poi.connections()),
        }))
    }

    /// Pushes every record of `pois` in order, indexing them from zero.
    ///
    /// # Errors
    ///
    /// Stops at the first error from [`Normalizer::push`].
    pub fn push_all(&mut self, pois: &[RawPoi]) -> Result<Vec<NormalizedCharger>, OcmError> {
        let mut out = Vec::with_capacity(pois.len());
        for (index, poi) in pois.iter().enumerate() {
            if let Some(charger) = self.push(index, poi)? {
                out.push(charger);
            }
        }
        Ok(out)
    }

    fn exclude(&mut self, index: usize, reason: Exclusion) {
        tracing::debug!(record = index, reason = reason.as_str(), "record excluded");
        self.summary.record_exclusion(reason);
    }
}

/// Normalizes `pois` in order, returning only the surviving records.
///
/// # Errors
///
/// Returns the first [`OcmError::InvalidCoordinate`] encountered; the whole
/// batch fails rather than silently dropping the record.
pub fn normalize_pois(
    pois: &[RawPoi],
    options: &NormalizeOptions,
) -> Result<Vec<NormalizedCharger>, OcmError> {
    Normalizer::new(options.clone()).push_all(pois)
}

/// Reads both coordinates. `Ok(None)` when either is absent or null.
fn read_coordinates(
    index: usize,
    addr: Option<&RawAddressInfo>,
) -> Result<Option<(f64, f64)>, OcmError> {
    let Some(addr) = addr else {
        return Ok(None);
    };
    let (Some(lat), Some(lon)) = (addr.latitude.as_ref(), addr.longitude.as_ref()) else {
        return Ok(None);
    };
    Ok(Some((
        coerce_coordinate(index, "Latitude", lat)?,
        coerce_coordinate(index, "Longitude", lon)?,
    )))
}

fn coerce_coordinate(index: usize, field: &'static str, value: &Value) -> Result<f64, OcmError> {
    coerce_f64(value).ok_or_else(|| OcmError::InvalidCoordinate {
        index,
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
