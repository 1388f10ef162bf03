//! labinv Server Binary
//!
//! Starts the TCP inventory server.

use std::sync::Arc;

use clap::Parser;
use labinv::network::Server;
use labinv::{Config, InventoryStore};
use tracing_subscriber::{fmt, EnvFilter};

/// labinv Server
#[derive(Parser, Debug)]
#[command(name = "labinv-server")]
#[command(about = "Servidor de inventario de equipos de laboratorio")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "0.0.0.0:5555")]
    listen: String,

    /// Inventory data file
    #[arg(short, long, default_value = "inventario.json")]
    data_file: String,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,labinv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("labinv Server v{}", labinv::VERSION);
    tracing::info!("Archivo de datos: {}", args.data_file);

    // Build config from args
    let config = Config::builder()
        .listen_addr(&args.listen)
        .data_file(&args.data_file)
        .build();

    // Open the store (loads the inventory file, soft-failing to empty)
    let store = Arc::new(InventoryStore::open(&config));
    tracing::info!("Equipos en inventario: {}", store.len());

    // Bind and run the accept loop
    let server = match Server::bind(&config.listen_addr, store) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("No se pudo enlazar a {}: {}", config.listen_addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Error en el servidor: {}", e);
        std::process::exit(1);
    }
}
