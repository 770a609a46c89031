//! # Bracket Links
//!
//! A page body may reference other pages with `[Title]`, where the title is
//! one or more ASCII letters. Digits, nesting and escapes are not part of
//! the syntax: `[foo123]` stays literal text, as do the outer brackets of
//! `[[x]]`.
//!
//! ## Modules
//!
//! - **`types`**: `Span` and `LinkNode` (Text, Link)
//! - **`kinds`**: `BracketLink`, which owns the delimiters and target charset
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `parse_links()`, a lossless cover of the body
//! - **`rewrite`**: `rewrite()` and `link_targets()` built on the parser
//!
//! Matches are found leftmost-first and never overlap. A `[` that does not
//! open a valid link is plain text and scanning resumes one byte later.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod rewrite;
pub mod types;

pub use parser::parse_links;
pub use rewrite::{link_targets, rewrite};
pub use types::{LinkNode, Span};
