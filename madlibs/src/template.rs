//! Story templates loaded from disk

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{MadLibError, Result};
use crate::scanner;

/// A story template: the lines of one file, read once per round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    path: PathBuf,
    lines: Vec<String>,
}

impl Template {
    /// Read a template file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| MadLibError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;

        // Templates are plain bytes; invalid UTF-8 becomes U+FFFD instead of failing the round
        let template = Self::parse(path, &String::from_utf8_lossy(&bytes));
        debug!(path = %path.display(), lines = template.lines.len(), "Loaded template");
        Ok(template)
    }

    /// Build a template from in-memory text
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Self {
        Self {
            path: path.into(),
            lines: content.lines().map(str::to_string).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Placeholder names in discovery order
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().flat_map(|line| scanner::placeholder_names(line))
    }

    pub fn placeholder_count(&self) -> usize {
        self.lines.iter().map(|line| scanner::spans(line).count()).sum()
    }
}
