pub mod scroll_metrics;
pub mod scrollbar;

pub use scroll_metrics::ScrollMetrics;
pub use scrollbar::render_vertical_scrollbar;
