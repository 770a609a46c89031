//! Request failures and their HTTP responses.

use axum::{
    extract::rejection::FormRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use plainwiki_engine::{PageError, RenderError, RouteMismatch};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Path outside the route grammar.
    #[error("404 page not found")]
    NotFound(#[from] RouteMismatch),

    /// Known route, wrong method. `allow` lists the accepted ones.
    #[error("405 method not allowed")]
    MethodNotAllowed { allow: &'static str },

    /// Unreadable save form; answered with the extractor's own rejection.
    #[error(transparent)]
    Form(#[from] FormRejection),

    /// Storage failure while saving.
    #[error("{0}")]
    Page(#[from] PageError),

    /// Template execution failure.
    #[error("{0}")]
    Render(#[from] RenderError),

    /// A blocking storage task panicked or was cancelled.
    #[error("internal error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
            AppError::MethodNotAllowed { allow } => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, allow)],
                self.to_string(),
            )
                .into_response(),
            AppError::Form(rejection) => rejection.into_response(),
            // Raw error text goes back to the client, as for every 500 here
            AppError::Page(_) | AppError::Render(_) | AppError::Join(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
            }
        }
    }
}
