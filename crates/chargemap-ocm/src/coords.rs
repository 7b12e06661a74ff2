//! Optional coordinate clean-up for country-scoped exports.
//!
//! Community-maintained POIs regularly have latitude and longitude entered the
//! wrong way round, and a handful carry coordinates nowhere near the country
//! the export was filtered on. When a bounding box is configured, swapped
//! pairs are corrected and points still outside the box are dropped.

/// Axis-aligned latitude/longitude box, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Mainland Finland plus Åland, with some margin.
    pub const FINLAND: Self = Self {
        min_lat: 59.0,
        max_lat: 71.5,
        min_lon: 19.0,
        max_lon: 32.5,
    };

    /// Known box for an ISO 3166-1 alpha-2 code.
    #[must_use]
    pub fn for_country(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "FI" => Some(Self::FINLAND),
            _ => None,
        }
    }

    #[must_use]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat)
            && (self.min_lon..=self.max_lon).contains(&lon)
    }
}

/// Outcome of checking a coordinate pair against a [`BoundingBox`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sanitized {
    Unchanged { lat: f64, lon: f64 },
    Swapped { lat: f64, lon: f64 },
    OutOfBounds,
}

/// Checks `(lat, lon)` against `bounds`, swapping the pair when only the
/// swapped order falls inside.
#[must_use]
pub fn sanitize(lat: f64, lon: f64, bounds: &BoundingBox) -> Sanitized {
    if bounds.contains(lat, lon) {
        Sanitized::Unchanged { lat, lon }
    } else if bounds.contains(lon, lat) {
        Sanitized::Swapped { lat: lon, lon: lat }
    } else {
        Sanitized::OutOfBounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_inside_box_is_unchanged() {
        assert_eq!(
            sanitize(60.17, 24.94, &BoundingBox::FINLAND),
            Sanitized::Unchanged {
                lat: 60.17,
                lon: 24.94
            }
        );
    }

    #[test]
    fn swapped_pair_is_corrected() {
        assert_eq!(
            sanitize(24.94, 60.17, &BoundingBox::FINLAND),
            Sanitized::Swapped {
                lat: 60.17,
                lon: 24.94
            }
        );
    }

    #[test]
    fn point_outside_box_is_rejected() {
        // Stockholm
        assert_eq!(
            sanitize(59.33, 18.07, &BoundingBox::FINLAND),
            Sanitized::OutOfBounds
        );
        assert_eq!(sanitize(0.0, 0.0, &BoundingBox::FINLAND), Sanitized::OutOfBounds);
    }

    #[test]
    fn bounds_are_inclusive() {
        let b = BoundingBox::FINLAND;
        assert!(b.contains(59.0, 19.0));
        assert!(b.contains(71.5, 32.5));
        assert!(!b.contains(71.6, 25.0));
    }

    #[test]
    fn for_country_knows_finland_only() {
        assert_eq!(BoundingBox::for_country("fi"), Some(BoundingBox::FINLAND));
        assert_eq!(BoundingBox::for_country("SE"), None);
    }
}
