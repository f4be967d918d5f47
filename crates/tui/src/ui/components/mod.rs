//! UI components: header, section nav bar, document view, hint bar.

pub mod common;
pub mod component;
pub mod document_view;
pub mod header;
pub mod hint_bar;
pub mod nav_bar;

pub use component::*;
pub use document_view::DocumentViewComponent;
pub use header::HeaderComponent;
pub use hint_bar::HintBarComponent;
pub use nav_bar::SectionNavBarComponent;
