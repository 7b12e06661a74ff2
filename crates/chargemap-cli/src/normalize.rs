//! `normalize` command: raw export in, flat charger list out.

use std::path::PathBuf;

use anyhow::Context;
use chargemap_core::AppConfig;
use chargemap_ocm::{BoundingBox, NormalizeOptions};

use crate::NormalizeArgs;

/// Paths and options for one normalize run, after applying CLI overrides.
#[derive(Debug, PartialEq)]
pub(crate) struct NormalizePlan {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: NormalizeOptions,
}

/// Merge CLI flags over configuration.
///
/// # Errors
///
/// Returns an error if `--country` is not a two-letter code, or if
/// coordinate sanitization is requested for a country without a known
/// bounding box.
pub(crate) fn resolve_plan(
    config: &AppConfig,
    args: &NormalizeArgs,
) -> anyhow::Result<NormalizePlan> {
    let country_code = match args.country.as_deref() {
        Some(raw) => chargemap_core::parse_country_code(raw)
            .map_err(|reason| anyhow::anyhow!("invalid --country: {reason}"))?,
        None => config.country_code.clone(),
    };

    let bounds = if args.sanitize_coords || config.sanitize_coords {
        let bounds = BoundingBox::for_country(&country_code).ok_or_else(|| {
            anyhow::anyhow!(
                "coordinate sanitization has no bounding box for country '{country_code}'"
            )
        })?;
        Some(bounds)
    } else {
        None
    };

    Ok(NormalizePlan {
        input: args.input.clone().unwrap_or_else(|| config.input_path.clone()),
        output: args.output.clone().unwrap_or_else(|| config.output_path.clone()),
        options: NormalizeOptions {
            country_code,
            bounds,
        },
    })
}

/// Run the normalize pipeline and print the one-line summary.
///
/// # Errors
///
/// Returns an error if the plan cannot be resolved or the pipeline fails.
/// Nothing is written on failure.
pub(crate) fn run_normalize(config: &AppConfig, args: &NormalizeArgs) -> anyhow::Result<()> {
    let plan = resolve_plan(config, args)?;

    let summary = chargemap_ocm::run(&plan.input, &plan.output, &plan.options)
        .with_context(|| format!("normalizing {}", plan.input.display()))?;

    println!(
        "OK: wrote {} locations to {}",
        summary.written,
        plan.output.display()
    );
    Ok(())
}
