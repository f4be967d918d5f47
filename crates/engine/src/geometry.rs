//! Access to the on-page position of each section.
//!
//! The tracker and navigator never look at a rendered document directly.
//! They ask a [`GeometryProvider`] for a section's span, which lets the TUI
//! layout, the headless CLI and test fixtures all drive the same logic.

use std::{collections::HashMap, hash::BuildHasher};

use folio_types::{SectionBounds, SectionId};
use indexmap::IndexMap;

/// Reports where a section currently sits in the document.
pub trait GeometryProvider {
    /// Span of the section, or `None` when it is not mounted.
    fn bounds_of(&self, id: &SectionId) -> Option<SectionBounds>;
}

impl<T: GeometryProvider + ?Sized> GeometryProvider for &T {
    fn bounds_of(&self, id: &SectionId) -> Option<SectionBounds> {
        (**self).bounds_of(id)
    }
}

impl<S: BuildHasher> GeometryProvider for HashMap<SectionId, SectionBounds, S> {
    fn bounds_of(&self, id: &SectionId) -> Option<SectionBounds> {
        self.get(id).copied()
    }
}

impl<S: BuildHasher> GeometryProvider for IndexMap<SectionId, SectionBounds, S> {
    fn bounds_of(&self, id: &SectionId) -> Option<SectionBounds> {
        self.get(id).copied()
    }
}

/// A document with nothing mounted yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unmounted;

impl GeometryProvider for Unmounted {
    fn bounds_of(&self, _id: &SectionId) -> Option<SectionBounds> {
        None
    }
}
