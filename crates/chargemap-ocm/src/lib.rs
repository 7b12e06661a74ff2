//! Normalization of Open Charge Map point-of-interest exports into the flat
//! [`chargemap_core::NormalizedCharger`] shape consumed by the map UI.

pub mod coords;
pub mod error;
pub mod normalize;
mod parse_helpers;
pub mod pipeline;
pub mod power;
pub mod types;

pub use coords::BoundingBox;
pub use error::OcmError;
pub use normalize::{normalize_pois, Exclusion, NormalizeOptions, Normalizer, RunSummary};
pub use pipeline::{load_raw_pois, parse_raw_pois, read_chargers, run, write_chargers};
pub use power::pick_power_kw;
pub use types::{RawAddressInfo, RawConnection, RawCountry, RawOperatorInfo, RawPoi};
