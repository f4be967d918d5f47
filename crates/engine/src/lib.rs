//! Scroll tracking and section navigation for the portfolio page.
//!
//! - [`ActiveSectionTracker`] recomputes the active section on every scroll
//!   event from geometry supplied by a [`GeometryProvider`].
//! - [`Navigator`] turns "go to section" requests into eased scroll frames.
//! - [`scroll_progress`] reports how far through the document the viewport is.
//!
//! The two stateful pieces are independent: the navigator
//! moves the viewport and the tracker notices, exactly as it would for a
//! manual scroll.

pub mod geometry;
pub mod navigator;
pub mod progress;
pub mod tracker;

pub use geometry::{GeometryProvider, Unmounted};
pub use navigator::{Navigator, ScrollFrame, SmoothScroll, ease_in_out_cubic};
pub use progress::scroll_progress;
pub use tracker::{ActiveSectionTracker, ScrollOutcome, ScrollSubscription};
