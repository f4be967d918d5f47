//! Page header: monogram, name and headline on the left, the active theme
//! and a scroll-progress gauge on the right.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{LineGauge, Paragraph},
};

use crate::{
    app::App,
    ui::{components::Component, theme::theme_helpers as th},
};

const GAUGE_WIDTH: u16 = 28;

#[derive(Debug, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }
}

impl Component for HeaderComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme;
        let block = th::block(theme, None, false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let gauge_width = if inner.width > GAUGE_WIDTH * 2 { GAUGE_WIDTH } else { 0 };
        let [title_area, gauge_area] = Layout::horizontal([Constraint::Min(0), Constraint::Length(gauge_width)]).areas(inner);

        let profile = &app.portfolio.content.profile;
        let title = Line::from(vec![
            Span::styled(format!(" {} ", profile.monogram()), th::badge_style(theme)),
            Span::raw(" "),
            Span::styled(profile.name.clone(), theme.text_primary_style().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", profile.headline), theme.text_muted_style()),
        ]);
        frame.render_widget(Paragraph::new(title), title_area);

        if gauge_area.width > 0 {
            let (filled, unfilled) = th::progress_styles(theme);
            let progress = app.progress();
            let gauge = LineGauge::default()
                .ratio(progress)
                .label(Span::styled(
                    format!("{} {:>3}%", app.theme_definition.label, (progress * 100.0).round() as u8),
                    theme.text_secondary_style(),
                ))
                .filled_style(filled)
                .unfilled_style(unfilled);
            frame.render_widget(gauge, gauge_area);
        }
    }
}
