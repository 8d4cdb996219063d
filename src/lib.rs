//! # geoschools
//!
//! A small school registry that answers one question well: which schools are
//! closest to me?
//! - Create school records with validated name, address and coordinates
//! - List every school ranked by great-circle (haversine) distance
//! - In-memory or RocksDB-backed storage
//! - HTTP API plus a command-line client
//!
//! ## Architecture
//!
//! ```text
//!   HTTP (axum)          CLI (reqwest)
//!        │                    │
//!        └───────┬────────────┘
//!                ▼
//!      ┌───────────────────┐
//!      │  SchoolRegistry   │  validate → store → rank
//!      └────────┬──────────┘
//!        ┌──────┴───────┐
//!        ▼              ▼
//!   ┌─────────┐   ┌───────────┐
//!   │ Storage │   │ geo::rank │
//!   │ mem/rdb │   │ haversine │
//!   └─────────┘   └───────────┘
//! ```
//!
//! ## Usage
//!
//! ### Start a server
//! ```bash
//! geoschools-server --bind 0.0.0.0:3000 --storage rocksdb --data ./geoschools-data
//! ```
//!
//! ### Use the CLI
//! ```bash
//! geoschools add "Riverside High" --address "1 River Rd" --latitude 12.34 --longitude 98.76
//! geoschools list --latitude 12.345678 --longitude 98.765432
//! ```

pub mod client;
pub mod common;
pub mod geo;
pub mod registry;
pub mod school;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use common::{Config, Error, Result};
pub use registry::SchoolRegistry;
pub use server::SchoolServer;

/// Current version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
