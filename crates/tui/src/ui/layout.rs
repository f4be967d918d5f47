//! Screen layout for the Folio TUI.
//!
//! Four stacked rows: header with the scroll-progress gauge, the section
//! navigation bar, the document, and a single-line hint bar. The document
//! row reserves side margins and a scrollbar column; [`document_text_area`]
//! is shared with `App` so the laid-out text width always matches the
//! drawn width.
use ratatui::prelude::*;

const HEADER_HEIGHT: u16 = 3;
const NAV_HEIGHT: u16 = 3;
const HINTS_HEIGHT: u16 = 1;
const TEXT_MARGIN: u16 = 2;
const SCROLLBAR_WIDTH: u16 = 1;

/// Areas of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MainAreas {
    pub header: Rect,
    pub nav: Rect,
    pub document: Rect,
    pub hints: Rect,
}

pub struct MainLayout;

impl MainLayout {
    pub fn areas(size: Rect) -> MainAreas {
        let rows = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(HINTS_HEIGHT),
        ])
        .split(size);
        MainAreas {
            header: rows[0],
            nav: rows[1],
            document: rows[2],
            hints: rows[3],
        }
    }
}

/// Text column inside the document area: margins on both sides, scrollbar on the right.
pub fn document_text_area(document: Rect) -> Rect {
    let reserved = TEXT_MARGIN * 2 + SCROLLBAR_WIDTH;
    Rect {
        x: document.x.saturating_add(TEXT_MARGIN.min(document.width)),
        y: document.y,
        width: document.width.saturating_sub(reserved),
        height: document.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_stack_to_full_height() {
        let areas = MainLayout::areas(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.header, Rect::new(0, 0, 80, 3));
        assert_eq!(areas.nav, Rect::new(0, 3, 80, 3));
        assert_eq!(areas.document, Rect::new(0, 6, 80, 17));
        assert_eq!(areas.hints, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn text_area_leaves_margins_and_scrollbar() {
        let text = document_text_area(Rect::new(0, 6, 80, 17));
        assert_eq!(text, Rect::new(2, 6, 75, 17));
        assert_eq!(document_text_area(Rect::new(0, 0, 3, 5)).width, 0);
    }
}
