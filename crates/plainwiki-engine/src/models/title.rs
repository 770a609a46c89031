use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TitleError {
    #[error("Page title is empty")]
    Empty,
    #[error("Page title {title:?} contains invalid character {ch:?}")]
    InvalidChar { title: String, ch: char },
}

/// A page title: one or more ASCII letters or digits.
///
/// The charset keeps titles safe to use directly as a filename component,
/// so a `Title` can never carry a path separator or `..`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Title(String);

impl Title {
    /// Title of the page served at `/`.
    pub const FRONT_PAGE: &'static str = "frontpage";

    /// Validate `s` as a page title
    pub fn parse(s: &str) -> Result<Self, TitleError> {
        if s.is_empty() {
            return Err(TitleError::Empty);
        }
        if let Some(ch) = s.chars().find(|c| !Self::is_title_char(*c)) {
            return Err(TitleError::InvalidChar {
                title: s.to_string(),
                ch,
            });
        }
        Ok(Self(s.to_string()))
    }

    pub fn front_page() -> Self {
        Self(Self::FRONT_PAGE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_title_char(c: char) -> bool {
        c.is_ascii_alphanumeric()
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Title {
    type Err = TitleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
