use crate::models::{Page, Title};
use relative_path::RelativePathBuf;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Page not found: {0}")]
    NotFound(Title),
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

impl PageError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Extension of every page file
pub const PAGE_EXTENSION: &str = "txt";

/// Flat-file page storage: `<content_root>/<title>.txt` holding the raw body.
///
/// No locking and no cache. Concurrent saves to one title are last-writer-wins.
#[derive(Debug, Clone)]
pub struct PageStore {
    content_root: PathBuf,
}

impl PageStore {
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
        }
    }

    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    /// Absolute location of the file backing `title`
    pub fn page_path(&self, title: &Title) -> PathBuf {
        RelativePathBuf::from(format!("{title}.{PAGE_EXTENSION}")).to_path(&self.content_root)
    }

    /// Read a page back from disk.
    ///
    /// A missing file is reported as [`PageError::NotFound`], never as `Io`.
    pub fn load(&self, title: &Title) -> Result<Page, PageError> {
        let path = self.page_path(title);
        match fs::read(&path) {
            Ok(body) => Ok(Page::new(title.clone(), body)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(PageError::NotFound(title.clone()))
            }
            Err(e) => Err(PageError::io(&path, e)),
        }
    }

    /// Write the page body, replacing whatever was stored for that title.
    ///
    /// Not atomic: a crash mid-write can leave a truncated file.
    pub fn save(&self, page: &Page) -> Result<(), PageError> {
        let path = self.page_path(page.title());

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| PageError::io(parent, e))?;
        }

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&path).map_err(|e| PageError::io(&path, e))?;
        file.write_all(page.body()).map_err(|e| PageError::io(&path, e))
    }
}

/// Make sure the content directory is usable, creating it when absent
pub fn validate_content_dir(path: &Path) -> Result<(), PageError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PageError::InvalidContentDir(format!(
                "{} is not a directory",
                path.display()
            )));
        }
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| PageError::io(path, e))
}
