//! Read-side filtering over a normalized charger list.
//!
//! These helpers back the `query`, `operators` and `powers` commands, which
//! operate on the file written by a previous `normalize` run.

use std::collections::BTreeSet;

use crate::NormalizedCharger;

pub const DEFAULT_QUERY_LIMIT: usize = 500;
pub const MAX_QUERY_LIMIT: usize = 10_000;

/// Filters applied by [`ChargerQuery::apply`]. Unset filters match everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargerQuery {
    /// Case-insensitive exact match on the charger's city.
    pub city: Option<String>,
    pub min_power_kw: Option<i64>,
    /// Case-insensitive substring match on the operator name.
    pub operator: Option<String>,
    /// Keep chargers with no power rating when `min_power_kw` is set.
    pub include_unknown_power: bool,
    pub limit: usize,
}

impl Default for ChargerQuery {
    fn default() -> Self {
        Self {
            city: None,
            min_power_kw: None,
            operator: None,
            include_unknown_power: false,
            limit: DEFAULT_QUERY_LIMIT,
        }
    }
}

impl ChargerQuery {
    /// Returns the chargers matching every filter, in input order, capped at
    /// the clamped limit.
    #[must_use]
    pub fn apply<'a>(&self, chargers: &'a [NormalizedCharger]) -> Vec<&'a NormalizedCharger> {
        let city = self
            .city
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);
        let operator = self
            .operator
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        chargers
            .iter()
            .filter(|c| {
                city.as_deref()
                    .is_none_or(|wanted| c.city.to_lowercase() == wanted)
            })
            .filter(|c| match (self.min_power_kw, c.power_kw) {
                (None, _) => true,
                (Some(min), Some(kw)) => kw >= min,
                (Some(_), None) => self.include_unknown_power,
            })
            .filter(|c| {
                operator
                    .as_deref()
                    .is_none_or(|needle| c.operator.to_lowercase().contains(needle))
            })
            .take(normalize_limit(self.limit))
            .collect()
    }
}

fn normalize_limit(limit: usize) -> usize {
    limit.clamp(1, MAX_QUERY_LIMIT)
}

/// Sorted, deduplicated operator names, excluding blanks and the
/// `"Unknown"` placeholder.
#[must_use]
pub fn distinct_operators(chargers: &[NormalizedCharger]) -> Vec<String> {
    chargers
        .iter()
        .filter(|c| c.has_known_operator())
        .map(|c| c.operator.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorted, deduplicated power ratings across chargers that have one.
#[must_use]
pub fn distinct_powers(chargers: &[NormalizedCharger]) -> Vec<i64> {
    chargers
        .iter()
        .filter_map(|c| c.power_kw)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
