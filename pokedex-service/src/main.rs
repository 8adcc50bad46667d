use std::{
    net::IpAddr,
    path::PathBuf,
    sync::Arc,
};

use anyhow::Result;
use clap::Parser;
use log::info;
use pokedex::{
    DataStore,
    LocalDataStore,
};
use pokedex_service::{
    Server,
    ServerConfig,
};
use tracing_core::Level;

#[derive(Debug, Parser)]
#[command(name = "pokedex")]
#[command(version, about = "Serves a Pokédex snapshot as plain text over HTTP")]
struct Cli {
    /// Path to the JSON data file
    #[arg(long, env = "POKEDEX_DATA", default_value = LocalDataStore::DATA_FILE)]
    data: PathBuf,

    /// Address to listen on
    #[arg(long, env = "POKEDEX_ADDRESS", default_value = "0.0.0.0")]
    address: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "POKEDEX_PORT", default_value_t = 8080)]
    port: u16,

    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, env = "POKEDEX_LOG_LEVEL", default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .init();

    let data = LocalDataStore::new(&cli.data)?;
    info!(
        "Successfully read {}: {} pokemons, {} types, {} moves",
        data.path().display(),
        data.species().len(),
        data.types().len(),
        data.moves().len(),
    );

    let config = ServerConfig {
        address: cli.address,
        port: cli.port,
        ..Default::default()
    };
    let handle = Server::new(config, Arc::new(data)).start().await?;

    tokio::signal::ctrl_c().await?;
    info!("Received interrupt, shutting down");
    handle.cancel()?;
    handle.join().await
}
