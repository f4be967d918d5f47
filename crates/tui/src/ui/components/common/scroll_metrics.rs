//! Bounded vertical scrolling for the document view.
//!
//! Tracks content height, viewport height, and the current scroll offset,
//! and provides clamped line/page navigation. Rows are `u32` so offsets can
//! be fed straight to the section tracker.

/// Shared metrics for vertical scrolling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
    offset: u32,
    content_height: u32,
    viewport_height: u32,
}

impl ScrollMetrics {
    /// Returns current vertical scroll offset.
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Returns measured content height.
    pub const fn content_height(&self) -> u32 {
        self.content_height
    }

    /// Returns measured viewport height.
    pub const fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    /// Returns the maximum valid scroll offset.
    pub fn max_offset(&self) -> u32 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Returns whether content exceeds the current viewport.
    pub fn is_scrollable(&self) -> bool {
        self.content_height > self.viewport_height && self.viewport_height > 0
    }

    /// Updates both dimensions and clamps current offset.
    pub fn resize(&mut self, content_height: u32, viewport_height: u32) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.clamp_offset();
    }

    /// Moves to an absolute offset, clamped to the valid range.
    pub fn set_offset(&mut self, offset: u32) {
        self.offset = offset.min(self.max_offset());
    }

    /// Scrolls by relative line count (`+` down, `-` up).
    pub fn scroll_lines(&mut self, delta: i32) {
        if delta == 0 || !self.is_scrollable() {
            return;
        }
        let next = i64::from(self.offset) + i64::from(delta);
        let clamped = next.clamp(0, i64::from(self.max_offset()));
        self.offset = u32::try_from(clamped).unwrap_or(self.max_offset());
    }

    /// Scrolls by viewport page increments.
    pub fn scroll_pages(&mut self, delta_pages: i16) {
        if delta_pages == 0 || self.viewport_height == 0 {
            return;
        }
        let page = i32::try_from(self.viewport_height).unwrap_or(i32::MAX);
        self.scroll_lines(page.saturating_mul(i32::from(delta_pages)));
    }

    /// Moves scroll position to the first row.
    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    /// Moves scroll position to the last visible window.
    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollMetrics;

    #[test]
    fn scrolling_clamps_to_bounds() {
        let mut metrics = ScrollMetrics::default();
        metrics.resize(20, 5);

        metrics.scroll_lines(3);
        assert_eq!(metrics.offset(), 3);

        metrics.scroll_lines(-10);
        assert_eq!(metrics.offset(), 0);

        metrics.scroll_to_bottom();
        assert_eq!(metrics.offset(), 15);
    }

    #[test]
    fn page_scrolling_uses_viewport_height() {
        let mut metrics = ScrollMetrics::default();
        metrics.resize(40, 4);

        metrics.scroll_pages(1);
        assert_eq!(metrics.offset(), 4);

        metrics.scroll_pages(2);
        assert_eq!(metrics.offset(), 12);

        metrics.scroll_pages(-1);
        assert_eq!(metrics.offset(), 8);
    }

    #[test]
    fn shrinking_content_clamps_offset() {
        let mut metrics = ScrollMetrics::default();
        metrics.resize(100, 10);
        metrics.set_offset(80);
        assert_eq!(metrics.offset(), 80);

        metrics.resize(50, 10);
        assert_eq!(metrics.offset(), 40);

        metrics.set_offset(1_000);
        assert_eq!(metrics.offset(), 40);
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut metrics = ScrollMetrics::default();
        metrics.resize(5, 10);
        metrics.scroll_lines(3);
        assert_eq!(metrics.offset(), 0);
        assert!(!metrics.is_scrollable());
    }
}
