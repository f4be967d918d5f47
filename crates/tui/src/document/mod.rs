//! Headless layout of the portfolio page.
//!
//! [`DocumentLayout::build`] renders every registered section into plain,
//! role-tagged lines for a given width and records where each section
//! starts and how tall it is. The layout is theme-agnostic: the document
//! view maps [`TextRole`]s to styles at draw time, and the CLI can lay the
//! page out without a terminal.
//!
//! Sections are stacked in registry order with no gaps, so every row of the
//! page belongs to exactly one section except the trailing padding that
//! lets the last section scroll up to the top of the viewport.

mod sections;

use folio_engine::GeometryProvider;
use folio_registry::Portfolio;
use folio_types::{IconRef, SectionBounds, SectionId};
use indexmap::IndexMap;
use tracing::debug;

pub use sections::has_renderer;

/// Semantic role of a run of text; the view maps it to a theme style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    Body,
    Secondary,
    Muted,
    /// Section heading label
    Heading,
    /// Hero name
    Title,
    Accent,
    Emphasis,
    Badge,
    /// Inline call to action
    Action,
    Rule,
}

/// A run of text sharing one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub role: TextRole,
}

impl TextRun {
    pub fn new(text: impl Into<String>, role: TextRole) -> Self {
        Self { text: text.into(), role }
    }
}

/// One row of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocLine {
    pub runs: Vec<TextRun>,
    pub centered: bool,
}

impl DocLine {
    pub fn blank() -> Self {
        Self::default()
    }

    /// Concatenated text of every run.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.runs.iter().all(|run| run.text.trim().is_empty())
    }
}

/// Short terminal glyph for a section icon.
pub fn icon_glyph(icon: &IconRef) -> &'static str {
    match icon.name() {
        "home" => "⌂",
        "user" => "◉",
        "graduation-cap" => "▲",
        "briefcase" => "▣",
        "file-text" => "≡",
        "book-open" => "✎",
        "trophy" => "★",
        "message-circle" | "mail" => "✉",
        _ => "•",
    }
}

/// The whole page laid out for one terminal size.
#[derive(Debug, Clone, Default)]
pub struct DocumentLayout {
    lines: Vec<DocLine>,
    bounds: IndexMap<SectionId, SectionBounds>,
    unmounted: Vec<SectionId>,
    width: u16,
    viewport_height: u16,
}

impl DocumentLayout {
    /// Lays out `portfolio` for a document area of `width` x `viewport_height` cells.
    pub fn build(portfolio: &Portfolio, width: u16, viewport_height: u16) -> Self {
        let mut lines: Vec<DocLine> = Vec::new();
        let mut bounds = IndexMap::new();
        let mut unmounted = Vec::new();

        for descriptor in portfolio.registry.iter() {
            let Some(mut section_lines) = sections::render(descriptor, &portfolio.content, usize::from(width)) else {
                unmounted.push(descriptor.id.clone());
                continue;
            };
            if descriptor.id.as_str() == sections::HERO_SECTION {
                fill_viewport(&mut section_lines, usize::from(viewport_height));
            }
            let top = to_row(lines.len());
            let height = to_row(section_lines.len());
            bounds.insert(descriptor.id.clone(), SectionBounds::new(top, height));
            lines.extend(section_lines);
        }

        // Let the last section's top reach the viewport top.
        if let Some(last) = bounds.values().last() {
            let needed = last.top.saturating_add(u32::from(viewport_height));
            while to_row(lines.len()) < needed {
                lines.push(DocLine::blank());
            }
        }

        debug!(
            width,
            viewport_height,
            rows = lines.len(),
            mounted = bounds.len(),
            unmounted = unmounted.len(),
            "document laid out"
        );
        Self {
            lines,
            bounds,
            unmounted,
            width,
            viewport_height,
        }
    }

    pub fn lines(&self) -> &[DocLine] {
        &self.lines
    }

    /// Rows visible from `offset` in a window of `height` rows.
    pub fn visible_lines(&self, offset: u32, height: u16) -> &[DocLine] {
        let start = usize::try_from(offset).unwrap_or(usize::MAX).min(self.lines.len());
        let end = start.saturating_add(usize::from(height)).min(self.lines.len());
        &self.lines[start..end]
    }

    pub fn content_height(&self) -> u32 {
        to_row(self.lines.len())
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Largest scroll offset that still fills the viewport.
    pub fn max_offset(&self) -> u32 {
        self.content_height().saturating_sub(u32::from(self.viewport_height))
    }

    /// Mounted sections with their spans, in registry order.
    pub fn bounds(&self) -> &IndexMap<SectionId, SectionBounds> {
        &self.bounds
    }

    /// Registered sections that have nothing to render.
    pub fn unmounted(&self) -> &[SectionId] {
        &self.unmounted
    }
}

impl GeometryProvider for DocumentLayout {
    fn bounds_of(&self, id: &SectionId) -> Option<SectionBounds> {
        self.bounds.get(id).copied()
    }
}

fn to_row(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Centers the hero vertically inside at least one full viewport.
fn fill_viewport(lines: &mut Vec<DocLine>, viewport_height: usize) {
    if lines.len() >= viewport_height {
        return;
    }
    let missing = viewport_height - lines.len();
    let above = missing / 2;
    let mut padded = Vec::with_capacity(viewport_height);
    padded.extend(std::iter::repeat_with(DocLine::blank).take(above));
    padded.append(lines);
    padded.extend(std::iter::repeat_with(DocLine::blank).take(missing - above));
    *lines = padded;
}
