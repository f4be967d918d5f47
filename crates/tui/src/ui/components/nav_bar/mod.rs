//! Horizontal section navigation bar.
//!
//! One entry per registered section, in registry order. The entry for the
//! tracker's active section is highlighted; clicking an entry or pressing
//! Enter on the focused entry requests a smooth scroll to that section via
//! `Effect::NavigateTo`. Left/Right move keyboard focus between entries.
//!
//! When the labels do not fit, the bar collapses to icon-only entries.

mod nav_bar_component;
mod state;

pub use nav_bar_component::SectionNavBarComponent;
pub use state::{NavItem, SectionNavBarState};
