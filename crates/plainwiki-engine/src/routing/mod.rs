//! Request path grammar.
//!
//! ```text
//! /                               -> FrontPage
//! /(edit|save|view)/[A-Za-z0-9]+  -> Edit | Save | View (title)
//! anything else                   -> RouteMismatch
//! ```
//!
//! Paths are matched as received: no percent-decoding, no trailing-slash
//! tolerance, no extra segments.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::Title;

/// A validated request target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    FrontPage,
    View(Title),
    Edit(Title),
    Save(Title),
}

impl Route {
    /// The page this route acts on
    pub fn title(&self) -> Title {
        match self {
            Route::FrontPage => Title::front_page(),
            Route::View(t) | Route::Edit(t) | Route::Save(t) => t.clone(),
        }
    }

    /// Canonical path for viewing `title`
    pub fn view_path(title: &Title) -> String {
        format!("/view/{title}")
    }

    /// Canonical path for editing `title`
    pub fn edit_path(title: &Title) -> String {
        format!("/edit/{title}")
    }

    /// Canonical path for saving `title`
    pub fn save_path(title: &Title) -> String {
        format!("/save/{title}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No route for path {path:?}")]
pub struct RouteMismatch {
    pub path: String,
}

fn valid_path() -> &'static Regex {
    static VALID_PATH: OnceLock<Regex> = OnceLock::new();
    VALID_PATH.get_or_init(|| {
        Regex::new(r"^/(edit|save|view)/([a-zA-Z0-9]+)$").expect("Invalid route regex")
    })
}

/// Match a request path against the route grammar.
pub fn route(path: &str) -> Result<Route, RouteMismatch> {
    if path == "/" {
        return Ok(Route::FrontPage);
    }

    let mismatch = || RouteMismatch {
        path: path.to_string(),
    };

    let caps = valid_path().captures(path).ok_or_else(mismatch)?;
    let title = Title::parse(&caps[2]).map_err(|_| mismatch())?;

    match &caps[1] {
        "view" => Ok(Route::View(title)),
        "edit" => Ok(Route::Edit(title)),
        "save" => Ok(Route::Save(title)),
        _ => Err(mismatch()),
    }
}
