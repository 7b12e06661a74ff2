//! Raw Open Charge Map POI shapes.
//!
//! Only the fields the normalizer reads are modelled; everything else in the
//! export is ignored. Leaf values stay as [`serde_json::Value`] because the
//! export is not consistent about numbers versus numeric strings, and a
//! single odd value must not fail the whole document. Nested containers sent
//! as `""`, `[]`, `{}` or `false` read as absent.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::parse_helpers::{falsy_as_none, is_falsy, non_empty_str};

/// One point of interest from the export array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawPoi {
    #[serde(default, deserialize_with = "falsy_as_none")]
    pub address_info: Option<RawAddressInfo>,
    #[serde(default, deserialize_with = "falsy_as_none")]
    pub operator_info: Option<RawOperatorInfo>,
    #[serde(default, deserialize_with = "falsy_as_none")]
    pub connections: Option<Vec<RawConnection>>,
}

impl RawPoi {
    /// Connection entries, empty when the export omits them or sends `null`.
    #[must_use]
    pub fn connections(&self) -> &[RawConnection] {
        self.connections.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn operator_title(&self) -> Option<&str> {
        self.operator_info
            .as_ref()
            .and_then(|op| non_empty_str(op.title.as_ref()))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawAddressInfo {
    pub title: Option<Value>,
    pub town: Option<Value>,
    pub state_or_province: Option<Value>,
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
    #[serde(default, deserialize_with = "falsy_as_none")]
    pub country: Option<RawCountry>,
}

impl RawAddressInfo {
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        non_empty_str(self.title.as_ref())
    }

    /// Town, falling back to state or province.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        non_empty_str(self.town.as_ref())
            .or_else(|| non_empty_str(self.state_or_province.as_ref()))
    }

    /// ISO 3166-1 alpha-2 code of the nested country, if the export has one.
    #[must_use]
    pub fn country_code(&self) -> Option<&str> {
        self.country
            .as_ref()
            .and_then(|c| non_empty_str(c.iso_code.as_ref()))
    }

    /// `true` when the record carries a country code and it is not `target`.
    ///
    /// A missing or falsy code passes. A code that is present but not a
    /// string can never equal `target`, so it does not.
    #[must_use]
    pub fn is_outside_country(&self, target: &str) -> bool {
        match self.country.as_ref().and_then(|c| c.iso_code.as_ref()) {
            None => false,
            Some(code) if is_falsy(code) => false,
            Some(Value::String(code)) => code != target,
            Some(_) => true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCountry {
    #[serde(rename = "ISOCode")]
    pub iso_code: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawOperatorInfo {
    pub title: Option<Value>,
}

/// A single connector on a POI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawConnection {
    #[serde(rename = "PowerKW")]
    pub power_kw: Option<Value>,
    pub voltage: Option<Value>,
    pub amps: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_ocm_field_names() {
        let poi: RawPoi = serde_json::from_str(
            r#"{
                "ID": 1234,
                "AddressInfo": {
                    "Title": "Kauppakeskus Itis",
                    "Town": "Helsinki",
                    "StateOrProvince": "Uusimaa",
                    "Latitude": 60.21,
                    "Longitude": 25.08,
                    "Country": {"ISOCode": "FI", "Title": "Finland"}
                },
                "OperatorInfo": {"Title": "Recharge"},
                "Connections": [{"PowerKW": 50.0, "Voltage": 400, "Amps": 125}]
            }"#,
        )
        .unwrap();

        let addr = poi.address_info.as_ref().unwrap();
        assert_eq!(addr.title(), Some("Kauppakeskus Itis"));
        assert_eq!(addr.city(), Some("Helsinki"));
        assert_eq!(addr.country_code(), Some("FI"));
        assert_eq!(poi.operator_title(), Some("Recharge"));
        assert_eq!(poi.connections().len(), 1);
    }

    #[test]
    fn null_containers_read_as_absent() {
        let poi: RawPoi = serde_json::from_str(
            r#"{"AddressInfo": null, "OperatorInfo": null, "Connections": null}"#,
        )
        .unwrap();
        assert!(poi.address_info.is_none());
        assert!(poi.operator_title().is_none());
        assert!(poi.connections().is_empty());
    }

    #[test]
    fn city_falls_back_to_state_or_province() {
        let addr: RawAddressInfo =
            serde_json::from_str(r#"{"Town": "", "StateOrProvince": "Lappi"}"#).unwrap();
        assert_eq!(addr.city(), Some("Lappi"));
    }

    #[test]
    fn falsy_containers_read_as_absent() {
        let poi: RawPoi = serde_json::from_str(
            r#"{"AddressInfo": [], "OperatorInfo": "", "Connections": {}}"#,
        )
        .unwrap();
        assert!(poi.address_info.is_none());
        assert!(poi.operator_info.is_none());
        assert!(poi.connections().is_empty());

        let addr: RawAddressInfo =
            serde_json::from_str(r#"{"Latitude": 60.1, "Country": ""}"#).unwrap();
        assert!(addr.country.is_none());
    }

    #[test]
    fn truthy_container_with_wrong_shape_is_rejected() {
        let result = serde_json::from_str::<RawPoi>(r#"{"OperatorInfo": "Recharge"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn non_string_country_code_is_outside_country() {
        let addr: RawAddressInfo =
            serde_json::from_str(r#"{"Country": {"ISOCode": 246}}"#).unwrap();
        assert!(addr.country_code().is_none());
        assert!(addr.is_outside_country("FI"));
    }

    #[test]
    fn missing_or_empty_country_code_is_not_outside() {
        for doc in ["{}", r#"{"Country": null}"#, r#"{"Country": {"ISOCode": ""}}"#] {
            let addr: RawAddressInfo = serde_json::from_str(doc).unwrap();
            assert!(!addr.is_outside_country("FI"), "{doc}");
        }
        let addr: RawAddressInfo =
            serde_json::from_str(r#"{"Country": {"ISOCode": "FI"}}"#).unwrap();
        assert!(!addr.is_outside_country("FI"));
        assert!(addr.is_outside_country("SE"));
    }

    #[test]
    fn non_string_title_reads_as_absent() {
        let addr: RawAddressInfo = serde_json::from_str(r#"{"Title": 17}"#).unwrap();
        assert!(addr.title().is_none());
    }
}
