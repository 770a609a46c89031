use std::borrow::Cow;

use super::Title;

/// A titled unit of wiki content. Built per request and dropped afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    title: Title,
    body: Vec<u8>,
}

impl Page {
    pub fn new(title: Title, body: impl Into<Vec<u8>>) -> Self {
        Self {
            title,
            body: body.into(),
        }
    }

    /// A page with no content yet, offered when editing a missing title
    pub fn empty(title: Title) -> Self {
        Self::new(title, Vec::new())
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    /// Raw body bytes exactly as stored
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body as text; invalid UTF-8 sequences are replaced
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
