//! Request dispatch and the four page handlers.

use axum::{
    Form,
    extract::{FromRequest, Request, State},
    http::{Method, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use plainwiki_engine::{Page, PageError, Route, Title, link_targets, render, rewrite, route};
use serde::Deserialize;

use crate::{AppState, error::AppError};

const READ_METHODS: &str = "GET, HEAD";
const WRITE_METHODS: &str = "POST";

/// Fields of the edit form
#[derive(Debug, Deserialize)]
pub struct SaveForm {
    /// An absent field saves an empty page.
    #[serde(default)]
    pub body: String,
}

/// Single entry point for every request: validate the path, then pick the
/// handler by route kind.
pub(crate) async fn dispatch(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, AppError> {
    let method = request.method().clone();
    let route = route(request.uri().path()).inspect_err(|e| log::debug!("{method} {e}"))?;
    log::debug!("{method} {route:?}");

    match route {
        Route::FrontPage | Route::View(_) => {
            allow_read(&method)?;
            view(&state, route.title()).await
        }
        Route::Edit(title) => {
            allow_read(&method)?;
            edit(&state, title).await
        }
        Route::Save(title) => {
            if method != Method::POST {
                return Err(AppError::MethodNotAllowed {
                    allow: WRITE_METHODS,
                });
            }
            let Form(form) = Form::<SaveForm>::from_request(request, &state).await?;
            save(&state, title, form.body).await
        }
    }
}

fn allow_read(method: &Method) -> Result<(), AppError> {
    if method == Method::GET || method == Method::HEAD {
        Ok(())
    } else {
        Err(AppError::MethodNotAllowed {
            allow: READ_METHODS,
        })
    }
}

/// Show a page, or send the user to create it.
async fn view(state: &AppState, title: Title) -> Result<Response, AppError> {
    match load(state, title.clone()).await? {
        Ok(page) => render_page(state, render::VIEW, &page),
        Err(e) => {
            log_load_failure(&e);
            Ok(found(&Route::edit_path(&title)))
        }
    }
}

/// Show the edit form, empty when the page does not exist yet.
async fn edit(state: &AppState, title: Title) -> Result<Response, AppError> {
    let page = match load(state, title.clone()).await? {
        Ok(page) => page,
        Err(e) => {
            log_load_failure(&e);
            Page::empty(title)
        }
    };
    render_page(state, render::EDIT, &page)
}

/// Persist the submitted body and redirect to the page view.
async fn save(state: &AppState, title: Title, body: String) -> Result<Response, AppError> {
    // Link-rewritten text is computed here but the unrewritten body is what gets stored
    let rewritten = rewrite(body.as_bytes());
    log::debug!(
        "Rewrote {} links for {title} ({} bytes, not stored)",
        link_targets(body.as_bytes()).len(),
        rewritten.len()
    );

    let page = Page::new(title.clone(), body);
    let store = state.store.clone();
    tokio::task::spawn_blocking(move || store.save(&page))
        .await?
        .inspect_err(|e| log::warn!("Failed to save {title}: {e}"))?;

    log::info!("Saved {title}");
    Ok(found(&Route::view_path(&title)))
}

async fn load(state: &AppState, title: Title) -> Result<Result<Page, PageError>, AppError> {
    let store = state.store.clone();
    Ok(tokio::task::spawn_blocking(move || store.load(&title)).await?)
}

fn log_load_failure(e: &PageError) {
    match e {
        PageError::NotFound(_) => log::debug!("{e}"),
        _ => log::warn!("{e}"),
    }
}

fn render_page(state: &AppState, template: &str, page: &Page) -> Result<Response, AppError> {
    let html = state
        .templates
        .render(template, page)
        .inspect_err(|e| log::error!("Failed to render {}: {e}", page.title()))?;
    Ok(Html(html).into_response())
}

/// 302 Found redirect to `location`
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
