//! Representative power rating for a POI.
//!
//! A POI lists one entry per connector, and connectors on the same site often
//! differ (a 150 kW CCS next to a 22 kW Type 2). The site is rated by its best
//! connector.

use serde_json::Value;

use crate::parse_helpers::coerce_f64;
use crate::types::RawConnection;

/// Returns the highest kilowatt rating across `connections`, rounded to the
/// nearest whole kilowatt with ties going to the even neighbour.
///
/// Each entry uses its stated `PowerKW` when present. Entries without one fall
/// back to `Voltage * Amps / 1000` when both are non-zero numbers. Entries with
/// no usable value are skipped; `None` means no entry produced one.
#[must_use]
pub fn pick_power_kw(connections: &[RawConnection]) -> Option<i64> {
    connections
        .iter()
        .enumerate()
        .filter_map(|(idx, conn)| {
            let kw = connection_kw(conn);
            if kw.is_none() {
                tracing::debug!(connection = idx, "connection has no usable power rating");
            }
            kw
        })
        .reduce(f64::max)
        .map(round_kw)
}

/// Kilowatt rating of a single connection entry.
///
/// A `PowerKW` that is present but not numeric disqualifies the entry; the
/// voltage fallback only applies when `PowerKW` is absent or null.
pub(crate) fn connection_kw(conn: &RawConnection) -> Option<f64> {
    if let Some(raw) = &conn.power_kw {
        return coerce_f64(raw);
    }

    let volts = non_zero(conn.voltage.as_ref())?;
    let amps = non_zero(conn.amps.as_ref())?;
    let kw = volts * amps / 1000.0;
    kw.is_finite().then_some(kw)
}

fn non_zero(value: Option<&Value>) -> Option<f64> {
    value.and_then(coerce_f64).filter(|v| v.abs() > 0.0)
}

// Saturating float-to-int cast; ratings are far inside i64 range.
#[allow(clippy::cast_possible_truncation)]
fn round_kw(kw: f64) -> i64 {
    kw.round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn conn(power_kw: Option<Value>, voltage: Option<Value>, amps: Option<Value>) -> RawConnection {
        RawConnection {
            power_kw,
            voltage,
            amps,
        }
    }

    fn kw(v: Value) -> RawConnection {
        conn(Some(v), None, None)
    }

    fn va(voltage: Value, amps: Value) -> RawConnection {
        conn(None, Some(voltage), Some(amps))
    }

    #[test]
    fn stated_power_wins_over_smaller_derived_power() {
        let conns = vec![kw(json!(50)), va(json!(400), json!(32))];
        assert_eq!(pick_power_kw(&conns), Some(50));
    }

    #[test]
    fn derives_power_from_voltage_and_amps() {
        let conns = vec![va(json!(230), json!(16))];
        assert_eq!(pick_power_kw(&conns), Some(4));
    }

    #[test]
    fn derived_power_can_beat_stated_power() {
        let conns = vec![kw(json!(11)), va(json!(400), json!(63))];
        assert_eq!(pick_power_kw(&conns), Some(25));
    }

    #[test]
    fn empty_connections_yield_none() {
        assert_eq!(pick_power_kw(&[]), None);
    }

    #[test]
    fn connections_without_numbers_yield_none() {
        let conns = vec![
            RawConnection::default(),
            kw(json!("unknown")),
            va(json!("n/a"), json!(16)),
        ];
        assert_eq!(pick_power_kw(&conns), None);
    }

    #[test]
    fn zero_voltage_or_amps_is_treated_as_absent() {
        assert_eq!(pick_power_kw(&[va(json!(0), json!(32))]), None);
        assert_eq!(pick_power_kw(&[va(json!(400), json!(0))]), None);
    }

    #[test]
    fn stated_zero_power_still_counts() {
        assert_eq!(pick_power_kw(&[kw(json!(0))]), Some(0));
    }

    #[test]
    fn null_power_falls_back_to_voltage_and_amps() {
        let poi: crate::RawPoi = serde_json::from_value(json!({
            "Connections": [{"PowerKW": null, "Voltage": 400, "Amps": 16}]
        }))
        .unwrap();
        assert_eq!(pick_power_kw(poi.connections()), Some(6));
    }

    #[test]
    fn non_numeric_stated_power_skips_fallback() {
        let conns = vec![conn(Some(json!("fast")), Some(json!(400)), Some(json!(32)))];
        assert_eq!(pick_power_kw(&conns), None);
    }

    #[test]
    fn malformed_entry_does_not_hide_valid_ones() {
        let conns = vec![kw(json!({"value": 300})), kw(json!(22))];
        assert_eq!(pick_power_kw(&conns), Some(22));
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let conns = vec![kw(json!("150")), va(json!("230"), json!("32"))];
        assert_eq!(pick_power_kw(&conns), Some(150));
    }

    #[test]
    fn rounds_half_to_even() {
        assert_eq!(pick_power_kw(&[kw(json!(2.5))]), Some(2));
        assert_eq!(pick_power_kw(&[kw(json!(3.5))]), Some(4));
        assert_eq!(pick_power_kw(&[kw(json!(7.4))]), Some(7));
        assert_eq!(pick_power_kw(&[kw(json!(10.6))]), Some(11));
    }

    #[test]
    fn connection_kw_reports_unrounded_value() {
        let value = connection_kw(&va(json!(230), json!(16))).unwrap();
        assert!((value - 3.68).abs() < 1e-9);
    }
}
