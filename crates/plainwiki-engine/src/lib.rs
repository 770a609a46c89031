//! # plainwiki-engine
//!
//! Everything the wiki does that is not HTTP plumbing:
//!
//! - **`models`**: [`Title`] and [`Page`]
//! - **`io`**: [`PageStore`], one `<title>.txt` file per page
//! - **`links`**: the `[Letters]` bracket link scanner and [`rewrite`]
//! - **`routing`**: request path grammar, producing a [`Route`]
//! - **`render`**: parse-once [`Templates`] for the `view` and `edit` pages

pub mod io;
pub mod links;
pub mod models;
pub mod render;
pub mod routing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use links::{LinkNode, link_targets, parse_links, rewrite};
pub use models::{Page, Title, TitleError};
pub use render::{RenderError, Template, TemplateError, Templates};
pub use routing::{Route, RouteMismatch, route};
