use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::Title;

/// Create a temporary content directory for page files
pub fn create_test_content_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Write a page file directly, bypassing the store
pub fn create_test_page(content_dir: &TempDir, title: &str, body: &str) -> PathBuf {
    let file_path = content_dir.path().join(format!("{title}.txt"));
    fs::write(&file_path, body).unwrap();
    file_path
}

pub fn title(s: &str) -> Title {
    Title::parse(s).unwrap()
}
