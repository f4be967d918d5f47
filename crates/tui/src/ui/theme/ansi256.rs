//! ANSI 256-color fallback theme for terminals without truecolor support.
//!
//! Approximates the neon default with indexed colors so the page stays
//! legible inside macOS Terminal and other 8-bit color terminals.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Indexed(233),
                surface: Color::Indexed(234),
                border: Color::Indexed(24),
                divider: Color::Indexed(24),

                text: Color::Indexed(195),
                text_secondary: Color::Indexed(87),
                text_muted: Color::Indexed(245),

                accent_primary: Color::Indexed(45),
                accent_secondary: Color::Indexed(135),

                info: Color::Indexed(45),
                error: Color::Indexed(205),

                selection_bg: Color::Indexed(23),
                focus: Color::Indexed(135),

                scrollbar_track: Color::Indexed(237),
                scrollbar_thumb: Color::Indexed(45),
            },
        }
    }
}

impl Default for Ansi256Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
