//! Top-level view: owns the components, routes input, and draws the screen.
//!
//! Global bindings are handled here before anything reaches a component:
//! `q`/`Esc` quit, `Tab` moves focus between the navigation bar and the
//! document, `m` opens the mail composer for the contact address, `y`
//! copies it, and `t` cycles the theme. The mouse wheel always scrolls the
//! document; clicks go to whichever component was drawn under the cursor.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use folio_types::{Effect, Msg};
use ratatui::{Frame, layout::Rect, layout::Position};

use super::components::{Component, DocumentViewComponent, HeaderComponent, HintBarComponent, SectionNavBarComponent};
use super::layout::{MainAreas, MainLayout};
use crate::app::{App, FocusArea};

#[derive(Debug, Default)]
pub struct MainView {
    pub header: HeaderComponent,
    pub nav_bar: SectionNavBarComponent,
    pub document: DocumentViewComponent,
    pub hints: HintBarComponent,
    last_areas: MainAreas,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes an application message to the state and every component.
    pub fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        let mut effects = app.update(&msg);
        effects.extend(self.header.update(app, &msg));
        effects.extend(self.nav_bar.update(app, &msg));
        effects.extend(self.document.update(app, &msg));
        effects
    }

    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.kind == KeyEventKind::Release {
            return Vec::new();
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => vec![Effect::Quit],
                _ => Vec::new(),
            };
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => vec![Effect::Quit],
            KeyCode::Tab | KeyCode::BackTab => {
                app.focus = app.focus.toggled();
                Vec::new()
            }
            KeyCode::Char('m') => vec![Effect::ComposeMail(app.contact_email().to_string())],
            KeyCode::Char('y') => vec![Effect::CopyToClipboard(app.contact_email().to_string())],
            KeyCode::Char('t') => self.handle_message(app, Msg::CycleTheme),
            _ => match app.focus {
                FocusArea::NavBar => self.nav_bar.handle_key_events(app, key),
                FocusArea::Document => self.document.handle_key_events(app, key),
            },
        }
    }

    pub fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if matches!(mouse.kind, MouseEventKind::ScrollUp | MouseEventKind::ScrollDown) {
            return self.document.handle_mouse_events(app, mouse);
        }
        let position = Position::new(mouse.column, mouse.row);
        if self.last_areas.nav.contains(position) {
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                app.focus = FocusArea::NavBar;
            }
            return self.nav_bar.handle_mouse_events(app, mouse);
        }
        if self.last_areas.document.contains(position) {
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                app.focus = FocusArea::Document;
            }
            return self.document.handle_mouse_events(app, mouse);
        }
        Vec::new()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let areas = MainLayout::areas(area);
        self.header.render(frame, areas.header, app);
        self.nav_bar.render(frame, areas.nav, app);
        self.document.render(frame, areas.document, app);

        self.hints.focused_hints = match app.focus {
            FocusArea::NavBar => self.nav_bar.get_hint_spans(app),
            FocusArea::Document => self.document.get_hint_spans(app),
        };
        self.hints.render(frame, areas.hints, app);
        self.last_areas = areas;
    }
}
