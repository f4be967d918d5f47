//! Scrollable view of the laid-out portfolio page.
//!
//! Draws the rows of `App::layout` visible at the current scroll offset and
//! a themed scrollbar. Scroll keys and the mouse wheel go through `App`,
//! which interrupts any running navigation animation before moving.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use folio_types::{Effect, Msg};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::{
    app::App,
    document::{DocLine, TextRole},
    ui::{
        components::{Component, common::render_vertical_scrollbar},
        layout::document_text_area,
        theme::{Theme, theme_helpers as th},
    },
};

/// Rows moved per mouse wheel notch.
const WHEEL_STEP: i16 = 3;

#[derive(Debug, Default)]
pub struct DocumentViewComponent;

impl DocumentViewComponent {
    pub fn new() -> Self {
        Self
    }
}

/// Style for a run of document text.
pub fn role_style(theme: &dyn Theme, role: TextRole) -> Style {
    match role {
        TextRole::Body => theme.text_primary_style(),
        TextRole::Secondary => theme.text_secondary_style(),
        TextRole::Muted => theme.text_muted_style(),
        TextRole::Heading => theme.heading_style(),
        TextRole::Title => theme.text_primary_style().add_modifier(Modifier::BOLD),
        TextRole::Accent => theme.accent_primary_style(),
        TextRole::Emphasis => theme.accent_secondary_style().add_modifier(Modifier::BOLD),
        TextRole::Badge => th::badge_style(theme),
        TextRole::Action => th::button_primary_style(theme),
        TextRole::Rule => Style::default().fg(theme.roles().divider),
    }
}

fn to_line(theme: &dyn Theme, line: &DocLine) -> Line<'static> {
    let spans: Vec<Span<'static>> = line
        .runs
        .iter()
        .map(|run| Span::styled(run.text.clone(), role_style(theme, run.role)))
        .collect();
    let rendered = Line::from(spans);
    if line.centered { rendered.centered() } else { rendered }
}

impl Component for DocumentViewComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let msg = match key.code {
            KeyCode::Up | KeyCode::Char('k') => Msg::ScrollLines(-1),
            KeyCode::Down | KeyCode::Char('j') => Msg::ScrollLines(1),
            KeyCode::PageUp => Msg::ScrollPages(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => Msg::ScrollPages(1),
            KeyCode::Home | KeyCode::Char('g') => Msg::ScrollToTop,
            KeyCode::End | KeyCode::Char('G') => Msg::ScrollToBottom,
            KeyCode::Enter => {
                return app.hero_target().cloned().map(Effect::NavigateTo).into_iter().collect();
            }
            _ => return Vec::new(),
        };
        app.update(&msg)
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match mouse.kind {
            MouseEventKind::ScrollUp => app.update(&Msg::ScrollLines(-WHEEL_STEP)),
            MouseEventKind::ScrollDown => app.update(&Msg::ScrollLines(WHEEL_STEP)),
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme;
        frame.render_widget(Block::default().style(th::page_style(theme)), area);

        let text_area = document_text_area(area);
        let offset = app.metrics.offset();
        let lines: Vec<Line<'static>> = app
            .layout
            .visible_lines(offset, text_area.height)
            .iter()
            .map(|line| to_line(theme, line))
            .collect();
        frame.render_widget(Paragraph::new(lines).style(th::page_style(theme)), text_area);

        render_vertical_scrollbar(
            frame,
            area,
            theme,
            app.metrics.content_height(),
            offset,
            app.metrics.viewport_height(),
        );
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        let mut hints = vec![("↑/↓", "Scroll"), ("PgUp/PgDn", "Page"), ("Tab", "Sections")];
        if app.hero_target().is_some() {
            hints.insert(0, ("Enter", "Explore"));
        }
        th::build_hint_spans(&*app.theme, &hints)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crossterm::event::KeyModifiers;
    use folio_registry::FolioConfig;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::app::test_app;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| (area.left()..area.right()).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_rows_at_current_offset() {
        let mut app = test_app(FolioConfig::default());
        let now = Instant::now();
        app.update_at(&Msg::Resize(80, 30), now);
        let _subscription = app.attach_scroll_listener();
        let awards = app.layout.bounds().get("awards").map(|bounds| bounds.top).expect("awards");
        app.apply_offset(awards, now);

        let mut view = DocumentViewComponent::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 23)).expect("terminal");
        terminal.draw(|frame| view.render(frame, frame.area(), &mut app)).expect("draw");

        let text = buffer_text(&terminal);
        assert!(text.lines().next().is_some_and(|row| row.contains("Awards")), "{text}");
    }

    #[test]
    fn enter_on_hero_requests_next_section() {
        let mut app = test_app(FolioConfig::default());
        app.update_at(&Msg::Resize(80, 30), Instant::now());
        let _subscription = app.attach_scroll_listener();

        let mut view = DocumentViewComponent::new();
        let effects = view.handle_key_events(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(effects, vec![Effect::NavigateTo("about".into())]);

        view.handle_key_events(&mut app, KeyEvent::new(KeyCode::End, KeyModifiers::NONE));
        let effects = view.handle_key_events(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(effects.is_empty());
    }

    #[test]
    fn wheel_scrolls_three_rows() {
        let mut app = test_app(FolioConfig::default());
        app.update_at(&Msg::Resize(80, 30), Instant::now());
        let mut view = DocumentViewComponent::new();
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        };
        view.handle_mouse_events(&mut app, wheel);
        assert_eq!(app.metrics.offset(), 3);
    }
}
