use std::collections::HashSet;

use folio_types::{SectionDescriptor, SectionId};
use serde::Serialize;

use crate::RegistryError;

/// Ordered, immutable list of the page's sections.
///
/// Order defines both the navigation menu order and the priority used when
/// section spans overlap: the tracker scans entries front to back and the
/// first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SectionRegistry {
    sections: Vec<SectionDescriptor>,
}

impl SectionRegistry {
    /// Builds a registry, rejecting blank or duplicate ids.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::EmptySectionId`] when an id is blank
    /// - [`RegistryError::DuplicateSection`] when an id appears twice
    pub fn new(sections: Vec<SectionDescriptor>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(sections.len());
        for (index, section) in sections.iter().enumerate() {
            if section.id.as_str().trim().is_empty() {
                return Err(RegistryError::EmptySectionId { index });
            }
            if !seen.insert(section.id.as_str()) {
                return Err(RegistryError::DuplicateSection(section.id.clone()));
            }
        }
        Ok(Self { sections })
    }

    /// The eight sections of the portfolio page, top to bottom.
    pub fn default_sections() -> Self {
        Self {
            sections: vec![
                SectionDescriptor::new("home", "Home", "home"),
                SectionDescriptor::new("about", "About", "user"),
                SectionDescriptor::new("education", "Education", "graduation-cap"),
                SectionDescriptor::new("experience", "Experience", "briefcase"),
                SectionDescriptor::new("publications", "Publications", "file-text"),
                SectionDescriptor::new("skills", "Skills", "book-open"),
                SectionDescriptor::new("awards", "Awards", "trophy"),
                SectionDescriptor::new("contact", "Contact", "message-circle"),
            ],
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SectionDescriptor> {
        self.sections.iter()
    }

    /// Section ids in registry order.
    pub fn ids(&self) -> impl Iterator<Item = &SectionId> {
        self.sections.iter().map(|section| &section.id)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The top-of-page section, used as the initial active section.
    pub fn first(&self) -> Option<&SectionDescriptor> {
        self.sections.first()
    }

    pub fn get(&self, id: &str) -> Option<&SectionDescriptor> {
        self.sections.iter().find(|section| section.id.as_str() == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id.as_str() == id)
    }

    pub fn as_slice(&self) -> &[SectionDescriptor] {
        &self.sections
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::default_sections()
    }
}

impl<'a> IntoIterator for &'a SectionRegistry {
    type Item = &'a SectionDescriptor;
    type IntoIter = std::slice::Iter<'a, SectionDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sections_keep_page_order() {
        let registry = SectionRegistry::default_sections();
        let ids: Vec<&str> = registry.ids().map(SectionId::as_str).collect();
        assert_eq!(
            ids,
            ["home", "about", "education", "experience", "publications", "skills", "awards", "contact"]
        );
        assert_eq!(registry.first().map(|s| s.id.as_str()), Some("home"));
        assert_eq!(registry.position("skills"), Some(5));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = SectionRegistry::new(vec![
            SectionDescriptor::new("home", "Home", "home"),
            SectionDescriptor::new("home", "Again", "home"),
        ]);
        match result {
            Err(RegistryError::DuplicateSection(id)) => assert_eq!(id.as_str(), "home"),
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_ids() {
        let result = SectionRegistry::new(vec![SectionDescriptor::new("  ", "Blank", "")]);
        assert!(matches!(result, Err(RegistryError::EmptySectionId { index: 0 })));
    }

    #[test]
    fn empty_registry_is_allowed() {
        let registry = SectionRegistry::new(Vec::new()).expect("empty registry");
        assert!(registry.is_empty());
        assert!(registry.first().is_none());
    }
}
