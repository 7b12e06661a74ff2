mod normalize;
mod query;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "chargemap")]
#[command(about = "Normalize Open Charge Map exports for the charger map")]
struct Cli {
    /// Defaults to `normalize` with configured paths when omitted.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert a raw POI export into the flat charger list
    Normalize(NormalizeArgs),
    /// Filter a normalized charger list and print matches as JSON
    Query(QueryArgs),
    /// List distinct operator names in a normalized charger list
    Operators {
        /// Normalized file to read [default: CHARGEMAP_OUTPUT_PATH]
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List distinct power ratings (kW) in a normalized charger list
    Powers {
        /// Normalized file to read [default: CHARGEMAP_OUTPUT_PATH]
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Default, Args)]
struct NormalizeArgs {
    /// Raw export to read [default: CHARGEMAP_INPUT_PATH]
    #[arg(long)]
    input: Option<PathBuf>,
    /// Where to write the normalized list [default: CHARGEMAP_OUTPUT_PATH]
    #[arg(long)]
    output: Option<PathBuf>,
    /// Two-letter country code to keep [default: CHARGEMAP_COUNTRY_CODE]
    #[arg(long)]
    country: Option<String>,
    /// Fix swapped coordinates and drop points outside the country
    #[arg(long)]
    sanitize_coords: bool,
}

#[derive(Debug, Default, Args)]
struct QueryArgs {
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    min_power_kw: Option<i64>,
    /// Case-insensitive substring of the operator name
    #[arg(long)]
    operator: Option<String>,
    /// Keep chargers without a power rating when --min-power-kw is set
    #[arg(long)]
    include_unknown: bool,
    /// [default: CHARGEMAP_QUERY_LIMIT]
    #[arg(long)]
    limit: Option<usize>,
    /// Normalized file to read [default: CHARGEMAP_OUTPUT_PATH]
    #[arg(long)]
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = chargemap_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Normalize(args)) => normalize::run_normalize(&config, &args)?,
        None => normalize::run_normalize(&config, &NormalizeArgs::default())?,
        Some(Commands::Query(args)) => query::run_query(&config, &args)?,
        Some(Commands::Operators { file }) => query::run_operators(&config, file.as_deref())?,
        Some(Commands::Powers { file }) => query::run_powers(&config, file.as_deref())?,
    }

    Ok(())
}
