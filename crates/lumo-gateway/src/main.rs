//! Lumo gateway binary.
//!
//! - `POST /execute`: gate the payload, dispatch the action
//! - `GET /health`, `/readyz`, `/metrics`
//! - Config: `lumo.yaml` in the working directory, or the path given as the
//!   first argument
//! - Graceful shutdown on Ctrl+C / SIGTERM (readiness flips to draining)

use tracing_subscriber::{fmt, EnvFilter};

use lumo_core::error::{LumoError, Result};
use lumo_gateway::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let path = std::env::args().nth(1);
    let cfg = config::load_or_default(path.as_deref())?;
    let listen = cfg.gateway.listen_addr()?;

    let state = AppState::new(cfg);
    let app = router::build_router(state.clone());

    tracing::info!(%listen, "lumo-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| LumoError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| LumoError::Internal(format!("server failed: {e}")))?;

    tracing::info!("lumo-gateway stopped");
    Ok(())
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
    state.begin_drain();
    tracing::info!("signal received, starting graceful shutdown");
}
