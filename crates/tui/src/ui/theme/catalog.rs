use ratatui::style::Color;

use super::{Ansi256Theme, CyberpunkTheme, DraculaTheme, NordTheme, Theme};

/// Describes a selectable theme inside the TUI.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier used for persistence.
    pub id: &'static str,
    /// Human-friendly display name.
    pub label: &'static str,
    /// Hex-style color chips shown next to the label in the header.
    pub swatch: ThemeSwatch,
    /// Theme aliases (e.g., env overrides) that map back to this definition.
    pub aliases: &'static [&'static str],
    /// Whether the palette targets ANSI/8-bit terminals.
    pub is_ansi_fallback: bool,
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

/// Minimal set of colors that summarize each palette.
#[derive(Clone, Copy, Debug)]
pub struct ThemeSwatch {
    pub background: Color,
    pub accent: Color,
    pub selection: Color,
}

/// Ordered list of selectable themes; `t` cycles through the truecolor entries in this order.
pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "cyberpunk",
        label: "Cyberpunk",
        swatch: ThemeSwatch {
            background: Color::Rgb(0x02, 0x06, 0x17),
            accent: Color::Rgb(0x22, 0xD3, 0xEE),
            selection: Color::Rgb(0x0E, 0x3A, 0x4F),
        },
        aliases: &["cyberpunk", "neon"],
        is_ansi_fallback: false,
        factory: || Box::new(CyberpunkTheme::new()),
    },
    ThemeDefinition {
        id: "dracula",
        label: "Dracula",
        swatch: ThemeSwatch {
            background: Color::Rgb(0x28, 0x2A, 0x36),
            accent: Color::Rgb(0xFF, 0x79, 0xC6),
            selection: Color::Rgb(0x44, 0x47, 0x5A),
        },
        aliases: &["dracula"],
        is_ansi_fallback: false,
        factory: || Box::new(DraculaTheme::new()),
    },
    ThemeDefinition {
        id: "nord",
        label: "Nord",
        swatch: ThemeSwatch {
            background: Color::Rgb(0x2E, 0x34, 0x40),
            accent: Color::Rgb(0x88, 0xC0, 0xD0),
            selection: Color::Rgb(0x4C, 0x56, 0x6A),
        },
        aliases: &["nord"],
        is_ansi_fallback: false,
        factory: || Box::new(NordTheme::new()),
    },
    ThemeDefinition {
        id: "ansi256",
        label: "ANSI 256",
        swatch: ThemeSwatch {
            background: Color::Indexed(233),
            accent: Color::Indexed(45),
            selection: Color::Indexed(23),
        },
        aliases: &["ansi256", "256"],
        is_ansi_fallback: true,
        factory: || Box::new(Ansi256Theme::new()),
    },
];

/// Iterate over all available definitions.
pub fn all() -> &'static [ThemeDefinition] {
    THEME_DEFINITIONS
}

/// Locate a definition by canonical id or alias (case-insensitive).
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    let normalized = name.trim();
    THEME_DEFINITIONS.iter().find(|definition| {
        definition.id.eq_ignore_ascii_case(normalized) || definition.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(normalized))
    })
}

/// Preferred default for truecolor terminals.
pub fn default_truecolor() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

/// Preferred default for ANSI-only terminals.
pub fn default_ansi() -> &'static ThemeDefinition {
    THEME_DEFINITIONS
        .iter()
        .find(|definition| definition.is_ansi_fallback)
        .unwrap_or(&THEME_DEFINITIONS[0])
}

/// Definition following `current` among the truecolor palettes, wrapping at the end.
pub fn next_after(current: &str) -> &'static ThemeDefinition {
    let cycle: Vec<&'static ThemeDefinition> = THEME_DEFINITIONS.iter().filter(|definition| !definition.is_ansi_fallback).collect();
    let position = cycle.iter().position(|definition| definition.id == current);
    match position {
        Some(index) => cycle[(index + 1) % cycle.len()],
        None => default_truecolor(),
    }
}
