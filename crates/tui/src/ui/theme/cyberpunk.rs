//! Neon palette echoing the portfolio's cyan-on-midnight look.
//!
//! Colors are mapped into the semantic [`ThemeRoles`] structure so
//! components can render consistently without hard-coding styling details.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

/// Primary surfaces.
const BACKGROUND_BASE: Color = Color::Rgb(0x02, 0x06, 0x17); // #020617
const BACKGROUND_PANEL: Color = Color::Rgb(0x0B, 0x12, 0x30); // #0b1230
const SURFACE_MUTED: Color = Color::Rgb(0x1E, 0x29, 0x4B); // #1e294b
const BORDER_DEFAULT: Color = Color::Rgb(0x16, 0x4E, 0x63); // #164e63

/// Typography colors.
const TEXT_PRIMARY: Color = Color::Rgb(0xCF, 0xFA, 0xFE); // #cffafe
const TEXT_SECONDARY: Color = Color::Rgb(0x67, 0xE8, 0xF9); // #67e8f9
const TEXT_MUTED: Color = Color::Rgb(0x64, 0x74, 0x8B); // #64748b

/// Accent palette.
const ACCENT_PRIMARY: Color = Color::Rgb(0x22, 0xD3, 0xEE); // #22d3ee
const ACCENT_SECONDARY: Color = Color::Rgb(0xA8, 0x55, 0xF7); // #a855f7

const STATUS_INFO: Color = ACCENT_PRIMARY;
const STATUS_ERROR: Color = Color::Rgb(0xEC, 0x48, 0x99); // #ec4899

const SELECTION_BACKGROUND: Color = Color::Rgb(0x0E, 0x3A, 0x4F); // #0e3a4f
const SCROLLBAR_TRACK: Color = SURFACE_MUTED;

#[derive(Debug, Clone)]
pub struct CyberpunkTheme {
    roles: ThemeRoles,
}

impl CyberpunkTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: BACKGROUND_BASE,
                surface: BACKGROUND_PANEL,
                border: BORDER_DEFAULT,
                divider: BORDER_DEFAULT,
                text: TEXT_PRIMARY,
                text_secondary: TEXT_SECONDARY,
                text_muted: TEXT_MUTED,
                accent_primary: ACCENT_PRIMARY,
                accent_secondary: ACCENT_SECONDARY,
                info: STATUS_INFO,
                error: STATUS_ERROR,
                selection_bg: SELECTION_BACKGROUND,
                focus: ACCENT_SECONDARY,
                scrollbar_track: SCROLLBAR_TRACK,
                scrollbar_thumb: ACCENT_PRIMARY,
            },
        }
    }
}

impl Default for CyberpunkTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for CyberpunkTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
