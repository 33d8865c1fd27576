//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use activities::InMemoryActivityRepository;
use anyhow::Context;
use mergington_api::{AppConfig, build_router};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "mergington_api=info,activities=info,admin=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    if config.has_insecure_secret_key() {
        tracing::warn!("TEACHER_SECRET_KEY is still the default value in production");
    }

    // Fail fast on an unparsable hash rather than refusing every login later
    let admin_config = config
        .admin_config()
        .context("ADMIN_PASSWORD_HASH is not a valid Argon2 PHC string")?;

    if !admin_config.credential.is_login_enabled() {
        tracing::warn!("ADMIN_PASSWORD_HASH is not set; admin login is disabled");
    }

    tracing::info!(
        environment = %config.environment,
        debug = config.debug,
        static_dir = %config.static_dir.display(),
        "Configuration loaded"
    );

    let repo = InMemoryActivityRepository::seeded();

    let app = build_router(repo, admin_config, &config.static_dir);

    // Start server
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix (container stop)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
