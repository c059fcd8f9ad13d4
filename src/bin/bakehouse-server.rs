// ABOUTME: Server binary: loads configuration, opens storage, and serves the Bakehouse API
// ABOUTME: CLI flags override the port and storage location from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Bakehouse Server Binary
//!
//! ```bash
//! STORAGE_URL=sqlite:./data/bakehouse.db cargo run --bin bakehouse-server
//! cargo run --bin bakehouse-server -- --http-port 8080 --storage-url ./data
//! ```

use anyhow::{Context, Result};
use bakehouse_server::{
    config::{ServerConfig, StorageUrl},
    logging::LoggingConfig,
    resources::ServerResources,
    server::BakehouseServer,
    storage::Storage,
};
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "bakehouse-server")]
#[command(about = "Bakehouse - ingredient inventory, recipes and bake history over HTTP")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override storage location (`sqlite:<path>`, `sqlite::memory:`, `memory`, or a directory)
    #[arg(long)]
    storage_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(raw) = args.storage_url {
        config.storage = StorageUrl::parse_url(&raw)
            .with_context(|| format!("Invalid --storage-url value '{raw}'"))?;
    }
    config.validate()?;

    LoggingConfig::from_env().init()?;
    info!("{}", config.summary());

    let storage = Storage::connect(&config.storage).await?;
    let resources = Arc::new(ServerResources::new(storage, Arc::new(config)).await?);

    BakehouseServer::new(resources).run().await
}
