//! Themed scrollbar rendering for the document view.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::ui::theme::roles::Theme;

/// Renders a themed vertical scrollbar on the right side of the given area.
pub fn render_vertical_scrollbar(frame: &mut Frame, area: Rect, theme: &dyn Theme, content_length: u32, position: u32, viewport_length: u32) {
    if viewport_length == 0 || content_length <= viewport_length {
        return;
    }
    let as_usize = |value: u32| usize::try_from(value).unwrap_or(usize::MAX);
    // ratatui positions the thumb over `content_length - viewport` scroll steps.
    let mut scrollbar_state = ScrollbarState::new(as_usize(content_length.saturating_sub(viewport_length)))
        .position(as_usize(position))
        .viewport_content_length(as_usize(viewport_length));
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(theme.roles().scrollbar_thumb))
        .track_style(Style::default().fg(theme.roles().scrollbar_track));
    frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
}
