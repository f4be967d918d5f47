use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use folio_types::Effect;
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

use super::state::layout_items;
use crate::{
    app::{App, FocusArea},
    ui::{
        components::{Component, find_target_index_by_mouse_position},
        theme::theme_helpers as th,
    },
};

/// Renders the section entries and turns activation into `Effect::NavigateTo`.
///
/// Highlighting reads the tracker's active section on every draw; the bar
/// never changes the active section itself.
#[derive(Debug, Default)]
pub struct SectionNavBarComponent;

impl SectionNavBarComponent {
    pub fn new() -> Self {
        Self
    }

    fn navigate_effect(app: &App, index: usize) -> Option<Effect> {
        app.nav_bar.items.get(index).map(|item| Effect::NavigateTo(item.id.clone()))
    }
}

impl Component for SectionNavBarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                app.nav_bar.cycle_focus(false);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                app.nav_bar.cycle_focus(true);
            }
            KeyCode::Home => app.nav_bar.focus_first(),
            KeyCode::End => app.nav_bar.focus_last(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                effects.extend(Self::navigate_effect(app, app.nav_bar.focused_index));
            }
            _ => {}
        }
        effects
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let state = &app.nav_bar;
        let Some(index) = find_target_index_by_mouse_position(&state.last_area, &state.per_item_areas, mouse.column, mouse.row) else {
            return Vec::new();
        };
        app.nav_bar.focused_index = index;
        Self::navigate_effect(app, index).into_iter().collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme;
        let focused = app.focus == FocusArea::NavBar;
        let block: Block = th::block(theme, None, focused).borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (rects, compact) = layout_items(inner, &app.nav_bar.items);
        for (index, (item, rect)) in app.nav_bar.items.iter().zip(rects.iter()).enumerate() {
            if rect.width == 0 {
                continue;
            }
            let is_active = app.tracker.is_active(item.id.as_str());
            let mut style = if is_active { theme.nav_active_style() } else { theme.text_secondary_style() };
            if focused && index == app.nav_bar.focused_index {
                style = style.fg(theme.roles().focus).add_modifier(Modifier::UNDERLINED);
            }
            frame.render_widget(Paragraph::new(Span::styled(item.display_text(compact), style)), *rect);
        }

        app.nav_bar.last_area = area;
        app.nav_bar.per_item_areas = rects;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(&*app.theme, &[("←/→", "Select"), ("Enter", "Go to section"), ("Tab", "Document")])
    }
}
