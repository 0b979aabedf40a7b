use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use formpost::config::Config;
use formpost::store::{PgSubmissionStore, SubmissionStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(&config.log_level)
        }))
        .init();

    tracing::info!("Starting formpost");

    // The pool connects on first use so the form keeps working while the database is down.
    let store: Option<Arc<dyn SubmissionStore>> = match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new().max_connections(10).connect_lazy(url)?;

            match sqlx::migrate!("./migrations").run(&pool).await {
                Ok(()) => tracing::info!("Migrations applied"),
                Err(e) => tracing::warn!("Could not apply migrations: {e}"),
            }

            let store: Arc<dyn SubmissionStore> = Arc::new(PgSubmissionStore::new(pool));
            Some(store)
        }
        None => None,
    };

    let addr = SocketAddr::new(config.host, config.port);
    let app = formpost::build_app(config, store);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
