//! # Folio TUI Library
//!
//! Terminal rendering of the single-page portfolio: a header with a
//! scroll-progress gauge, a section navigation bar that highlights the
//! section under the reading position, and the scrollable document.
//!
//! ## Architecture
//!
//! - [`document`] lays the page out headlessly and exposes each section's
//!   span through `folio_engine::GeometryProvider`.
//! - `app` owns the scroll position, the active-section tracker, and the
//!   navigator; every offset change is reported to the tracker.
//! - `ui` holds the components, theming, and the runtime event loop.
//! - `cmd` executes side effects (clipboard, mail composer, preferences).

mod app;
mod cmd;
pub mod document;
mod ui;

use anyhow::Result;
use folio_registry::{FolioConfig, Portfolio};
use ratatui::layout::Rect;

pub use document::{DocLine, DocumentLayout, TextRole, TextRun, has_renderer, icon_glyph};
use ui::layout::{MainLayout, document_text_area};

/// Lays the page out exactly as the TUI does on a `width` x `height` terminal.
pub fn layout_for_terminal(portfolio: &Portfolio, width: u16, height: u16) -> DocumentLayout {
    let text = document_text_area(MainLayout::areas(Rect::new(0, 0, width, height)).document);
    DocumentLayout::build(portfolio, text.width, text.height)
}

/// Runs the TUI until the user quits.
///
/// # Errors
///
/// Returns an error when the terminal cannot be put into raw mode or drawn to.
pub async fn run(portfolio: Portfolio, config: FolioConfig) -> Result<()> {
    ui::runtime::run_app(portfolio, config).await
}
