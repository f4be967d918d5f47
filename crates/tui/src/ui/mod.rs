//! UI rendering module for the TUI application: screen layout, components,
//! theming, and the runtime event loop.

pub mod components;
pub mod layout;
pub mod main_component;
pub mod runtime;
pub mod theme;
