use folio_registry::SectionRegistry;
use folio_types::SectionId;
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use crate::document::icon_glyph;

/// A single entry in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Section the entry scrolls to.
    pub id: SectionId,
    /// Terminal glyph for the section icon.
    pub icon: &'static str,
    /// Label shown when there is room for it.
    pub label: String,
}

impl NavItem {
    pub fn new(id: impl Into<SectionId>, icon: &'static str, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            icon,
            label: label.into(),
        }
    }

    /// Rendered text for the entry, with or without its label.
    pub fn display_text(&self, compact: bool) -> String {
        if compact {
            format!(" {} ", self.icon)
        } else {
            format!(" {} {} ", self.icon, self.label)
        }
    }
}

/// Keyboard focus and hit-test areas for the navigation bar.
#[derive(Debug, Clone, Default)]
pub struct SectionNavBarState {
    pub items: Vec<NavItem>,
    /// Entry that receives Enter while the bar has focus.
    pub focused_index: usize,
    /// Last rendered area of the whole bar.
    pub last_area: Rect,
    /// Last rendered area of each entry, aligned with `items`.
    pub per_item_areas: Vec<Rect>,
}

impl SectionNavBarState {
    pub fn from_registry(registry: &SectionRegistry) -> Self {
        let items = registry
            .iter()
            .map(|descriptor| NavItem::new(descriptor.id.clone(), icon_glyph(&descriptor.icon), descriptor.label.clone()))
            .collect();
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn focused_item(&self) -> Option<&NavItem> {
        self.items.get(self.focused_index)
    }

    /// Moves focus one entry forward or backward, wrapping at the ends.
    pub fn cycle_focus(&mut self, forward: bool) -> Option<&NavItem> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        self.focused_index = if forward {
            (self.focused_index + 1) % len
        } else {
            (self.focused_index + len - 1) % len
        };
        self.focused_item()
    }

    pub fn focus_first(&mut self) {
        self.focused_index = 0;
    }

    pub fn focus_last(&mut self) {
        self.focused_index = self.items.len().saturating_sub(1);
    }

    /// Puts keyboard focus on the entry for `id`, if present.
    pub fn focus_section(&mut self, id: &SectionId) {
        if let Some(index) = self.items.iter().position(|item| &item.id == id) {
            self.focused_index = index;
        }
    }
}

/// Lays entries out left to right inside `inner`, one column apart.
///
/// Returns the entry rects and whether the compact, icon-only form was used.
/// Entries that do not fit even in compact form get an empty rect.
pub fn layout_items(inner: Rect, items: &[NavItem]) -> (Vec<Rect>, bool) {
    let total_width = |compact: bool| -> usize {
        let widths: usize = items.iter().map(|item| item.display_text(compact).width()).sum();
        widths + items.len().saturating_sub(1)
    };
    let compact = total_width(false) > usize::from(inner.width);

    let mut rects = Vec::with_capacity(items.len());
    let mut x = inner.x;
    let right = inner.x.saturating_add(inner.width);
    for item in items {
        let width = u16::try_from(item.display_text(compact).width()).unwrap_or(u16::MAX);
        if x.saturating_add(width) > right {
            rects.push(Rect::new(x.min(right), inner.y, 0, 0));
            continue;
        }
        rects.push(Rect::new(x, inner.y, width, inner.height.min(1)));
        x = x.saturating_add(width + 1);
    }
    (rects, compact)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> SectionNavBarState {
        SectionNavBarState::from_registry(&SectionRegistry::default_sections())
    }

    #[test]
    fn items_follow_registry_order() {
        let state = state();
        let ids: Vec<&str> = state.items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids.first(), Some(&"home"));
        assert_eq!(ids.last(), Some(&"contact"));
        assert_eq!(state.items[6].icon, "★");
    }

    #[test]
    fn focus_wraps_in_both_directions() {
        let mut state = state();
        assert_eq!(state.cycle_focus(false).map(|item| item.id.as_str()), Some("contact"));
        assert_eq!(state.cycle_focus(true).map(|item| item.id.as_str()), Some("home"));
        state.focus_section(&SectionId::from("skills"));
        assert_eq!(state.focused_item().map(|item| item.id.as_str()), Some("skills"));
        state.focus_last();
        assert_eq!(state.focused_index, 7);
    }

    #[test]
    fn wide_bar_shows_labels() {
        let state = state();
        let (rects, compact) = layout_items(Rect::new(1, 1, 200, 1), &state.items);
        assert!(!compact);
        assert_eq!(rects[0], Rect::new(1, 1, 8, 1));
        assert_eq!(rects[1].x, 10);
        assert!(rects.iter().all(|rect| rect.width > 0));
    }

    #[test]
    fn narrow_bar_collapses_to_icons() {
        let state = state();
        let (rects, compact) = layout_items(Rect::new(0, 0, 40, 1), &state.items);
        assert!(compact);
        assert!(rects.iter().all(|rect| rect.width == 3));
        assert_eq!(rects[1].x, 4);
    }

    #[test]
    fn entries_past_the_edge_are_hidden() {
        let state = state();
        let (rects, _) = layout_items(Rect::new(0, 0, 10, 1), &state.items);
        assert_eq!(rects.iter().filter(|rect| rect.width > 0).count(), 2);
        assert_eq!(rects.len(), state.items.len());
    }
}
