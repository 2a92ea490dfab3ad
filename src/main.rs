use anyhow::Result;
use clap::Parser;
use imobiliaria_leon::cli::Cli;
use imobiliaria_leon::commands;
use imobiliaria_leon::config::Config;
use imobiliaria_leon::storage::FileStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("🏠 Imobiliária Leon - using {:?}", config.data_file);

    let storage = FileStore::new(&config.data_file);
    let mut stdout = std::io::stdout().lock();
    commands::run(cli.command, storage, &mut stdout)
}
