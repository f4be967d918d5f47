//! Scroll progress through the whole document, `0.0` at the top and `1.0`
//! at the bottom. Drives the header gauge.

/// Fraction of the scrollable distance already covered.
pub fn scroll_progress(offset: u32, max_offset: u32) -> f64 {
    if max_offset == 0 {
        return 0.0;
    }
    (f64::from(offset) / f64::from(max_offset)).clamp(0.0, 1.0)
}
