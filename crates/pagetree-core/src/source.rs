use std::path::Path;

use log::debug;

use crate::error::{PageTreeError, Result};
use crate::model::Page;
use crate::vfs::FileSystem;

/// Parse a page file, picking YAML or JSON from the extension
pub fn load_pages(path: &Path, fs: &dyn FileSystem) -> Result<Vec<Page>> {
    let format = PageFormat::from_path(path)
        .ok_or_else(|| PageTreeError::UnsupportedFormat(path.to_path_buf()))?;

    let content = fs.read_to_string(path).map_err(|source| PageTreeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let pages = format.parse(&content)?;
    debug!("loaded {} pages from {}", pages.len(), path.display());
    Ok(pages)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFormat {
    Yaml,
    Json,
}

impl PageFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(PageFormat::Yaml),
            "json" => Some(PageFormat::Json),
            _ => None,
        }
    }

    pub fn parse(&self, content: &str) -> Result<Vec<Page>> {
        let pages = match self {
            PageFormat::Yaml => serde_yaml::from_str(content)?,
            PageFormat::Json => serde_json::from_str(content)?,
        };
        Ok(pages)
    }
}
