//! Server binary

use clap::Parser;
use geoschools::common::{init_tracing, Config, StorageBackend};
use geoschools::SchoolServer;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "geoschools-server")]
#[command(about = "School registry with distance-ranked listing")]
#[command(version)]
struct Args {
    /// Bind address for HTTP (overrides config file and PORT)
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Storage backend: memory or rocksdb
    #[arg(long)]
    storage: Option<StorageBackend>,

    /// RocksDB data directory
    #[arg(long)]
    data: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load config from file and environment, then override with CLI arguments
    let mut config = Config::load()?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(storage) = args.storage {
        config.storage.backend = storage;
    }
    if let Some(data) = args.data {
        config.storage.path = data;
    }
    if let Some(timeout) = args.timeout_secs {
        config.request_timeout_secs = timeout;
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    config.validate()?;

    init_tracing(&config.log_level);

    SchoolServer::new(config).serve().await?;

    Ok(())
}
