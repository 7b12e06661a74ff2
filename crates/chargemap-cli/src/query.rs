//! Read-side commands over a normalized charger list.

use std::path::Path;

use anyhow::Context;
use chargemap_core::{AppConfig, ChargerQuery, NormalizedCharger};

use crate::QueryArgs;

fn load(config: &AppConfig, file: Option<&Path>) -> anyhow::Result<Vec<NormalizedCharger>> {
    let path = file.unwrap_or(config.output_path.as_path());
    chargemap_ocm::read_chargers(path)
        .with_context(|| format!("reading normalized chargers from {}", path.display()))
}

pub(crate) fn build_query(config: &AppConfig, args: &QueryArgs) -> ChargerQuery {
    ChargerQuery {
        city: args.city.clone(),
        min_power_kw: args.min_power_kw,
        operator: args.operator.clone(),
        include_unknown_power: args.include_unknown,
        limit: args.limit.unwrap_or(config.query_limit),
    }
}

/// Print chargers matching the query as a JSON array.
///
/// # Errors
///
/// Returns an error if the normalized file cannot be read.
pub(crate) fn run_query(config: &AppConfig, args: &QueryArgs) -> anyhow::Result<()> {
    let chargers = load(config, args.file.as_deref())?;
    let found = build_query(config, args).apply(&chargers);
    tracing::debug!(matched = found.len(), total = chargers.len(), "query complete");
    println!("{}", serde_json::to_string_pretty(&found)?);
    Ok(())
}

/// Print distinct operator names, one per line.
///
/// # Errors
///
/// Returns an error if the normalized file cannot be read.
pub(crate) fn run_operators(config: &AppConfig, file: Option<&Path>) -> anyhow::Result<()> {
    let chargers = load(config, file)?;
    for operator in chargemap_core::distinct_operators(&chargers) {
        println!("{operator}");
    }
    Ok(())
}

/// Print distinct power ratings in kW, one per line.
///
/// # Errors
///
/// Returns an error if the normalized file cannot be read.
pub(crate) fn run_powers(config: &AppConfig, file: Option<&Path>) -> anyhow::Result<()> {
    let chargers = load(config, file)?;
    for kw in chargemap_core::distinct_powers(&chargers) {
        println!("{kw}");
    }
    Ok(())
}
