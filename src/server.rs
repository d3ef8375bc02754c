//! HTTP entry point
//!
//! Every request, whatever its method or path, is handed to the composed
//! [`HandlerChain`].

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{Config, FallbackConfig};
use crate::handlers::{DefaultHandler, Handler, HandlerChain};
use crate::loader;

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Load every mapping source and compose the chain; fails on the first bad source
pub async fn build_chain(config: &Config) -> Result<HandlerChain, AnyError> {
    let sources = loader::load_sources(config).await?;
    let terminal = default_handler(&config.fallback)?;
    let chain = HandlerChain::compose(sources, Box::new(terminal))?;
    Ok(chain)
}

fn default_handler(fallback: &FallbackConfig) -> Result<DefaultHandler, AnyError> {
    let status = StatusCode::from_u16(fallback.status)?;
    Ok(DefaultHandler::new(status, fallback.body.clone()))
}

/// Router dispatching all traffic to `chain`
pub fn router(chain: Arc<HandlerChain>) -> Router {
    Router::new()
        .fallback(dispatch)
        .with_state(chain)
        .layer(TraceLayer::new_for_http())
}

async fn dispatch(State(chain): State<Arc<HandlerChain>>, req: Request) -> Response {
    chain.handle(req).await
}

pub async fn run(config: Config) -> Result<(), AnyError> {
    let chain = build_chain(&config).await?;
    info!(layers = chain.depth(), "Redirect chain ready");

    let app = router(Arc::new(chain));

    let address = config.server.bind_addr;
    let listener = TcpListener::bind(address).await?;
    info!(%address, "urlshort listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm = signal(SignalKind::terminate())
            .expect("failed to install signal handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
