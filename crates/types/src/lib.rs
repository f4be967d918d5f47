//! Shared types for the Folio workspace: section identity and geometry,
//! portfolio content, and the messages/effects exchanged by the TUI.

pub mod content;
pub mod section;

pub use content::*;
pub use section::*;

/// Messages delivered to the application state by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic UI tick; drives navigation animations
    Tick,
    /// Terminal resized
    Resize(u16, u16),
    /// Scroll the document by a number of rows (`+` down, `-` up)
    ScrollLines(i16),
    /// Scroll the document by whole viewports
    ScrollPages(i16),
    /// Jump to the top of the document
    ScrollToTop,
    /// Jump to the bottom of the document
    ScrollToBottom,
    /// Switch to the next color theme
    CycleTheme,
}

/// Side effects requested by components and executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Smooth-scroll the document to the given section
    NavigateTo(SectionId),
    /// Open the platform mail composer for the address
    ComposeMail(String),
    /// Copy text to the system clipboard
    CopyToClipboard(String),
    /// Persist the selected theme id to user preferences
    PersistTheme(String),
    /// Leave the application
    Quit,
}
