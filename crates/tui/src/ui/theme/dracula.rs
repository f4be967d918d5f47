use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Dracula palette (https://draculatheme.com/contribute)
const BG: Color = Color::Rgb(0x28, 0x2A, 0x36); // #282a36
const CURRENT_LINE: Color = Color::Rgb(0x44, 0x47, 0x5A); // #44475a
const FOREGROUND: Color = Color::Rgb(0xF8, 0xF8, 0xF2); // #f8f8f2
const COMMENT: Color = Color::Rgb(0x62, 0x72, 0xA4); // #6272a4

const CYAN: Color = Color::Rgb(0x8B, 0xE9, 0xFD); // #8be9fd
const PINK: Color = Color::Rgb(0xFF, 0x79, 0xC6); // #ff79c6
const PURPLE: Color = Color::Rgb(0xBD, 0x93, 0xF9); // #bd93f9
const RED: Color = Color::Rgb(0xFF, 0x55, 0x55); // #ff5555

/// Dracula theme tuned for dark terminals.
#[derive(Debug, Clone)]
pub struct DraculaTheme {
    roles: ThemeRoles,
}

impl DraculaTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: BG,
                surface: BG,
                border: CURRENT_LINE,
                divider: CURRENT_LINE,

                text: FOREGROUND,
                text_secondary: PURPLE,
                text_muted: COMMENT,

                accent_primary: PINK,
                accent_secondary: CYAN,

                info: CYAN,
                error: RED,

                selection_bg: CURRENT_LINE,
                focus: CYAN,

                scrollbar_track: CURRENT_LINE,
                scrollbar_thumb: COMMENT,
            },
        }
    }
}

impl Default for DraculaTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DraculaTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
