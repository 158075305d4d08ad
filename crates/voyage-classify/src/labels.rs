use crate::error::{ClassifyError, Result};
use std::path::Path;

/// Class names in model output order, one per line of a labels file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labels {
    names: Vec<String>,
}

impl Labels {
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            return Err(ClassifyError::Labels("no labels".to_string()));
        }
        Ok(Self { names })
    }

    /// Parse a labels file body.
    ///
    /// Lines are trimmed; blank lines and lines starting with `#` are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let names = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Self::new(names)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ClassifyError::Labels(format!("failed to read {}: {}", path.display(), e))
        })?;
        let labels = Self::parse(&text)?;
        log::debug!("loaded {} labels from {}", labels.len(), path.display());
        Ok(labels)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
