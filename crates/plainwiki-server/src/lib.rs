//! HTTP front end for plainwiki.
//!
//! ## Endpoints
//!
//! - `GET /` - front page (`frontpage`), or 302 to `/edit/frontpage`
//! - `GET /view/{title}` - rendered page, or 302 to `/edit/{title}`
//! - `GET /edit/{title}` - edit form, empty for a new page
//! - `POST /save/{title}` - store form field `body`, then 302 to `/view/{title}`
//!
//! Titles are one or more ASCII letters or digits. Every other path is a 404.
//! `HEAD` is accepted wherever `GET` is; other methods on a valid path get 405.
//! Save forms up to [`MAX_BODY_BYTES`] are accepted; larger ones get 413.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use plainwiki_engine::{PageStore, Templates};
use tokio::net::TcpListener;

pub use error::AppError;
pub use handlers::SaveForm;

/// Shared application state for HTTP handlers.
///
/// The store is a path handle and the templates never change after startup,
/// so requests share both without locking.
#[derive(Clone)]
pub struct AppState {
    pub store: PageStore,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(store: PageStore, templates: Templates) -> Self {
        Self {
            store,
            templates: Arc::new(templates),
        }
    }
}

/// Largest accepted request body; bounds the size of a saved page form.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Build the router. All paths go through one dispatcher that applies the
/// wiki's own path grammar.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(handlers::dispatch)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

/// Serve until ctrl-c.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
