//! HTTP server startup and graceful shutdown.

use crate::api::create_router;
use crate::config::Settings;
use crate::db;
use crate::state::AppState;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tracing::info;

pub struct Server {
    settings: Settings,
}

impl Server {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Runs the server until SIGINT/SIGTERM.
    pub async fn run(self) -> anyhow::Result<()> {
        info!(
            name = %self.settings.application.name,
            version = %self.settings.application.version,
            "Starting application"
        );
        info!(
            host = %self.settings.server.host,
            port = self.settings.server.port,
            request_timeout = self.settings.server.request_timeout,
            "Server configuration"
        );

        if self.settings.database.auto_migrate {
            db::run_migrations(&self.settings.database.url).await?;
        }

        let pool = db::establish_async_connection_pool(&self.settings.database).await?;
        let state = AppState::new(pool);
        let router = create_router(state).layer(TimeoutLayer::new(Duration::from_secs(
            self.settings.server.request_timeout,
        )));

        let address = self.settings.server.address();
        let listener = TcpListener::bind(&address).await?;
        info!(address = %address, "Listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
