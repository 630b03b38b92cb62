use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions recognised as article bodies.
pub const ARTICLE_EXTENSIONS: &[&str] = &["md", "txt"];

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid articles directory: {0}")]
    InvalidArticlesDir(String),
}

/// Read an article body
pub fn read_article(relative_path: &RelativePath, articles_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(articles_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    log::debug!("reading article {}", absolute_path.display());
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Scan for article files in the articles directory, sorted by path
pub fn scan_articles(articles_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !articles_root.exists() {
        return Err(IoError::InvalidArticlesDir(
            "articles directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(articles_root, &mut files)?;
    files.sort();
    log::debug!(
        "found {} articles under {}",
        files.len(),
        articles_root.display()
    );
    Ok(files)
}

/// Symlinked directories are not followed, so links pointing back up the tree
/// cannot make the walk loop.
fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if entry.file_type().map_err(IoError::Io)?.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if is_article_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

fn is_article_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ARTICLE_EXTENSIONS.contains(&ext))
}

pub fn validate_articles_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidArticlesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
