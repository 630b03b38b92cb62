use relative_path::{RelativePath, RelativePathBuf};
use std::path::Path;

use crate::{
    io::{self, IoError},
    parsing::{blocks::Block, parse_document, plain_text::summarize},
};

/// An article body together with the relative path it was loaded from.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    path: RelativePathBuf,
    body: String,
}

impl Article {
    pub fn new(path: RelativePathBuf, body: impl Into<String>) -> Self {
        Self {
            path,
            body: body.into(),
        }
    }

    /// Load an article from `articles_root`
    pub fn load(relative_path: &RelativePath, articles_root: &Path) -> Result<Self, IoError> {
        let body = io::read_article(relative_path, articles_root)?;
        Ok(Self::new(relative_path.to_relative_path_buf(), body))
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// The relative path without its extension, e.g. `ghiduri/cabluri`
    pub fn slug(&self) -> String {
        let path_str = self.path.as_str();
        match self.path.extension() {
            Some(ext) => path_str
                .strip_suffix(ext)
                .and_then(|s| s.strip_suffix('.'))
                .unwrap_or(path_str)
                .to_string(),
            None => path_str.to_string(),
        }
    }

    /// Render the body into blocks
    pub fn blocks(&self) -> Vec<Block> {
        parse_document(&self.body).blocks
    }

    /// Plain-text summary, truncated to `max_len` characters when given
    pub fn summary(&self, max_len: Option<usize>) -> String {
        summarize(&self.body, max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn slug_strips_extension() {
        let article = Article::new(RelativePathBuf::from("ghiduri/cabluri.md"), "");
        assert_eq!(article.slug(), "ghiduri/cabluri");
    }

    #[test]
    fn slug_without_extension() {
        let article = Article::new(RelativePathBuf::from("despre"), "");
        assert_eq!(article.slug(), "despre");
    }

    #[test]
    fn blocks_and_summary_come_from_body() {
        let article = Article::new(
            RelativePathBuf::from("a.md"),
            "## Titlu\n\nText cu **bold**.",
        );
        assert_eq!(article.blocks().len(), 2);
        assert_eq!(article.summary(None), "Titlu Text cu bold.");
        assert_eq!(article.summary(Some(5)), "Titlu...");
    }

    #[test]
    fn load_reads_from_root() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.md"), "Paragraf").unwrap();

        let article = Article::load(RelativePath::new("a.md"), dir.path()).unwrap();
        assert_eq!(article.body(), "Paragraf");
        assert_eq!(article.path(), RelativePath::new("a.md"));
    }

    #[test]
    fn load_missing_article() {
        let dir = TempDir::new().unwrap();
        let result = Article::load(RelativePath::new("lipsa.md"), dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }
}
