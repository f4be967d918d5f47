//! Section identity and geometry.
//!
//! A section is one vertically stacked region of the portfolio document,
//! addressable by its anchor id. Geometry is expressed in document units
//! (terminal rows for the TUI) measured from the top of the document.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Stable anchor identifier of a section (for example `"about"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SectionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for SectionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Opaque reference to the glyph shown next to a section label.
///
/// The core never interprets it; renderers map well-known names
/// (`home`, `user`, `graduation-cap`, ...) to something they can draw.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// One entry of the section registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    /// Anchor id, unique within a registry.
    pub id: SectionId,
    /// Human readable label rendered in the navigation bar.
    pub label: String,
    /// Glyph reference; irrelevant to tracking.
    #[serde(default)]
    pub icon: IconRef,
}

impl SectionDescriptor {
    pub fn new(id: impl Into<SectionId>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: IconRef::new(icon),
        }
    }
}

/// Vertical span of a mounted section: `[top, top + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SectionBounds {
    pub top: u32,
    pub height: u32,
}

impl SectionBounds {
    pub const fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    /// Exclusive lower edge of the span.
    pub const fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }

    /// Half-open containment test; a zero-height section contains nothing.
    pub const fn contains(&self, y: u32) -> bool {
        y >= self.top && y < self.bottom()
    }
}
