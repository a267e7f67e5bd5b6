//! Entry point for the es-mapping-cli binary

use clap::Parser;
use tracing_subscriber::EnvFilter;

use es_mapping_helper::cli::{Cli, run};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("es_mapping_helper=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = run(&cli, &mut stdout).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
