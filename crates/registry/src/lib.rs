//! Registry crate for the portfolio's sections and content.
//!
//! This crate provides the ordered section registry the tracker scans, the
//! loader for the static content rendered inside those sections, and the
//! user-level configuration file.

pub mod config;
pub mod models;
pub mod portfolio;

use std::path::PathBuf;

pub use config::{FolioConfig, default_config_path};
pub use folio_types::{SectionDescriptor, SectionId};
pub use models::SectionRegistry;
pub use portfolio::{ContentFormat, Portfolio};
use thiserror::Error;

/// Errors raised while building a registry or loading content.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON content: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML content: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported content format for {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),
    #[error("duplicate section id '{0}'")]
    DuplicateSection(SectionId),
    #[error("section at position {index} has an empty id")]
    EmptySectionId { index: usize },
}
