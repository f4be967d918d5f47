//! Hint bar component for keyboard shortcuts and status messages.
//!
//! Shows the focused component's hints followed by the global bindings, or
//! the current status message while one is live.

use ratatui::{Frame, layout::Rect, text::Line, text::Span, widgets::Paragraph};

use crate::{
    app::{App, StatusLevel},
    ui::{components::Component, theme::theme_helpers as th},
};

#[derive(Debug, Default)]
pub struct HintBarComponent {
    /// Hints contributed by the focused component for the next draw.
    pub focused_hints: Vec<Span<'static>>,
}

impl HintBarComponent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for HintBarComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme;
        let line = match app.status.as_ref() {
            Some(status) => {
                let style = match status.level {
                    StatusLevel::Info => theme.status_info(),
                    StatusLevel::Error => theme.status_error(),
                };
                Line::from(Span::styled(format!(" {}", status.text), style))
            }
            None => {
                let mut spans = vec![Span::raw(" ")];
                spans.append(&mut self.focused_hints);
                if spans.len() > 1 {
                    spans.push(Span::styled("  │  ", theme.text_muted_style()));
                }
                spans.extend(th::build_hint_spans(
                    theme,
                    &[("m", "Email"), ("y", "Copy email"), ("t", "Theme"), ("q", "Quit")],
                ));
                Line::from(spans)
            }
        };
        self.focused_hints.clear();
        frame.render_widget(Paragraph::new(line).style(th::page_style(theme)), area);
    }
}
