use ratatui::{
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Page background behind the document.
pub fn page_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { background, text, .. } = *theme.roles();
    Style::default().bg(background).fg(text)
}

/// Badge/tag style (filled accent, readable text).
pub fn badge_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles {
        accent_secondary,
        background,
        ..
    } = *theme.roles();
    Style::default().bg(accent_secondary).fg(background).add_modifier(Modifier::BOLD)
}

/// Call-to-action text rendered inline in the document.
pub fn button_primary_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles {
        accent_primary, background, ..
    } = *theme.roles();
    Style::default().bg(accent_primary).fg(background).add_modifier(Modifier::BOLD)
}

/// Filled and empty cells of the scroll progress gauge.
pub fn progress_styles<T: Theme + ?Sized>(theme: &T) -> (Style, Style) {
    let ThemeRoles {
        accent_primary,
        scrollbar_track,
        ..
    } = *theme.roles();
    (Style::default().fg(accent_primary), Style::default().fg(scrollbar_track))
}

/// Key hints rendered as `key label` pairs separated by two spaces.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (index, (key, label)) in hints.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled("  ", theme.text_muted_style()));
        }
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(format!(" {label}"), theme.text_muted_style()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::CyberpunkTheme;

    #[test]
    fn hint_spans_interleave_separators() {
        let theme = CyberpunkTheme::new();
        let spans = build_hint_spans(&theme, &[("q", "quit"), ("t", "theme")]);
        let text: String = spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, "q quit  t theme");
    }
}
