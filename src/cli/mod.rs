//! CLI module for the es-mapping-cli binary

use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;

pub mod error;
pub mod output;

pub use error::CliError;

use crate::catalog::MySqlCatalog;
use crate::mapping::{GeneratorConfig, MappingGenerator, TableFilter};

/// Command-line flags
#[derive(Parser, Debug)]
#[command(
    name = "es-mapping-cli",
    version,
    about = "Generates Elasticsearch index mappings from a MySQL schema catalog"
)]
pub struct Cli {
    /// Path to the YAML configuration file
    #[arg(short = 'c', long = "config", default_value = "config.yml")]
    pub config: PathBuf,

    /// Append the current timestamp to generated index identifiers
    #[arg(short = 't', long = "timestamp-suffix")]
    pub timestamp_suffix: bool,
}

/// Run one generation pass and write the results to `out`.
///
/// Configuration problems (unreadable file, malformed YAML, bad filter
/// pattern) abort before any table is processed; a catalog failure aborts
/// the remaining tables but leaves already-written documents on `out`.
pub async fn run(cli: &Cli, out: &mut dyn Write) -> Result<(), CliError> {
    let config = GeneratorConfig::load(&cli.config)?;
    let filter = TableFilter::compile(&config.tables)?;

    let catalog = MySqlCatalog::connect(&config.database.uri).await?;

    let now = Local::now().format("%Y%m%d%H%M").to_string();
    let suffix = cli.timestamp_suffix.then_some(now.as_str());

    let generator = MappingGenerator::new(config.index, config.rules);
    let tables = generator.eligible_tables(&catalog, &filter).await?;

    out.write_all(output::render_banner(&now).as_bytes())?;
    for table in &tables {
        let item = generator.generate_for(&catalog, table, suffix).await?;
        out.write_all(output::render_mapping(&item)?.as_bytes())?;
    }

    Ok(())
}
