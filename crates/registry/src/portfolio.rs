//! Loading the portfolio document: section registry plus static content.
//!
//! Content ships embedded in the binary and can be replaced by a JSON or
//! YAML file. A file may list its own `sections`; when it does not, the
//! default eight-section registry is used.

use std::{fs, path::Path};

use folio_types::{PortfolioContent, SectionDescriptor};
use serde::Deserialize;
use tracing::debug;

use crate::{RegistryError, SectionRegistry};

const EMBEDDED_PORTFOLIO: &str = include_str!("../data/portfolio.yaml");

/// Serialized shape of a content file.
#[derive(Debug, Deserialize)]
struct PortfolioDocument {
    #[serde(default)]
    sections: Option<Vec<SectionDescriptor>>,
    #[serde(flatten)]
    content: PortfolioContent,
}

/// Registry and content rendered together as one page.
#[derive(Debug, Clone)]
pub struct Portfolio {
    pub registry: SectionRegistry,
    pub content: PortfolioContent,
}

/// Accepted on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Json,
    Yaml,
}

impl ContentFormat {
    /// Picks a format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, RegistryError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(RegistryError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl Portfolio {
    /// Parses the sample portfolio bundled with the crate.
    pub fn embedded() -> Result<Self, RegistryError> {
        Self::parse(EMBEDDED_PORTFOLIO, ContentFormat::Yaml)
    }

    /// Loads a content file, choosing the parser from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let format = ContentFormat::from_path(path)?;
        let data = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?format, "loading portfolio content");
        Self::parse(&data, format)
    }

    /// Loads `path` when given, otherwise the embedded sample.
    pub fn load(path: Option<&Path>) -> Result<Self, RegistryError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

    pub fn parse(data: &str, format: ContentFormat) -> Result<Self, RegistryError> {
        let document: PortfolioDocument = match format {
            ContentFormat::Json => serde_json::from_str(data)?,
            ContentFormat::Yaml => serde_yaml::from_str(data)?,
        };
        let registry = match document.sections {
            Some(sections) => SectionRegistry::new(sections)?,
            None => SectionRegistry::default_sections(),
        };
        Ok(Self {
            registry,
            content: document.content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_portfolio_uses_default_sections() {
        let portfolio = Portfolio::embedded().expect("embedded portfolio parses");
        assert_eq!(portfolio.registry, SectionRegistry::default_sections());
        assert!(!portfolio.content.profile.name.is_empty());
        assert!(portfolio.content.contact.email.contains('@'));
        assert!(!portfolio.content.awards.is_empty());
    }

    #[test]
    fn custom_sections_are_validated() {
        let json = r#"{
            "sections": [
                { "id": "home", "label": "Home" },
                { "id": "home", "label": "Home again" }
            ],
            "meta": { "title": "t" },
            "profile": { "name": "n", "headline": "h" },
            "contact": { "email": "a@b.c" }
        }"#;
        let result = Portfolio::parse(json, ContentFormat::Json);
        assert!(matches!(result, Err(RegistryError::DuplicateSection(_))));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let result = ContentFormat::from_path(Path::new("portfolio.toml"));
        assert!(matches!(result, Err(RegistryError::UnsupportedFormat(_))));
        assert_eq!(ContentFormat::from_path(Path::new("a.YML")).ok(), Some(ContentFormat::Yaml));
    }
}
