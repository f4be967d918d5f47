//! Static portfolio content.
//!
//! These types carry the copy rendered inside each section. They have no
//! behavior of their own; the renderer turns them into lines and the tracker
//! only ever sees the resulting geometry.

use serde::{Deserialize, Serialize};

/// Page level metadata (window title, description, keywords).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub author: Option<String>,
}

/// Hero and about-me content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Short monogram shown in the hero badge. Derived from `name` when empty.
    #[serde(default)]
    pub initials: String,
    pub headline: String,
    #[serde(default)]
    pub taglines: Vec<String>,
    #[serde(default)]
    pub summary: String,
    /// Heading of the about card (for example "My Journey").
    #[serde(default)]
    pub about_title: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl Profile {
    /// Returns the configured monogram or the first letter of each name part.
    pub fn monogram(&self) -> String {
        if !self.initials.trim().is_empty() {
            return self.initials.trim().to_string();
        }
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .filter(|c| c.is_alphabetic())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub period: String,
    #[serde(default)]
    pub details: Option<String>,
}

/// A titled group of bullet points inside an experience entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletGroup {
    pub heading: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub organization: String,
    pub period: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<BulletGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub venue: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Self-assessed proficiency, clamped to `0..=100` when rendered.
    pub level: u8,
    #[serde(default)]
    pub glyph: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub title: String,
    pub organization: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Paragraph rendered above the contact details.
    #[serde(default)]
    pub call_to_action: String,
}

impl Contact {
    /// `mailto:` URL handed to the platform opener by the contact action.
    pub fn mailto_url(&self) -> String {
        format!("mailto:{}", self.email.trim())
    }
}

/// Everything rendered on the page besides navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub meta: PageMeta,
    pub profile: Profile,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub awards: Vec<Award>,
    pub contact: Contact,
}
