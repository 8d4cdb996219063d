//! Common utilities and types shared across geoschools

pub mod config;
pub mod error;
pub mod tracing_middleware;
pub mod utils;

pub use config::{Config, StorageBackend, StorageConfig};
pub use error::{Error, Result};
pub use utils::{format_distance, init_tracing, timestamp_now};
