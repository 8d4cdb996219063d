//! School server

use crate::common::{Config, Result};
use crate::registry::SchoolRegistry;
use crate::server::http::{create_router, AppState};
use crate::store::Storage;
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub struct SchoolServer {
    config: Config,
}

impl SchoolServer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Open the configured storage, bind and serve until Ctrl+C / SIGTERM.
    pub async fn serve(self) -> Result<()> {
        tracing::info!("Starting geoschools server");
        tracing::info!("  HTTP API: {}", self.config.bind_addr);
        tracing::info!("  Storage: {}", self.config.storage.backend);
        tracing::info!("  Data path: {}", self.config.storage.path.display());

        let storage = Storage::open(&self.config.storage)?;
        let registry = SchoolRegistry::new(storage);

        let listener = TcpListener::bind(self.config.bind_addr).await?;
        self.serve_on(listener, registry, shutdown_signal()).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves.
    pub async fn serve_on<F>(
        &self,
        listener: TcpListener,
        registry: SchoolRegistry,
        shutdown: F,
    ) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr()?;
        let router = create_router(AppState { registry }, &self.config);

        log_banner(local_addr);

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown)
        .await?;

        tracing::info!("Server closed");
        Ok(())
    }
}

fn log_banner(addr: SocketAddr) {
    tracing::info!("✓ Server is running on {}", addr);
    tracing::info!("  Add School: http://{}/api/addSchool", addr);
    tracing::info!(
        "  List Schools: http://{}/api/listSchools?latitude=12.345678&longitude=98.765432",
        addr
    );
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
