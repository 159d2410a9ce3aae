//! Visible-window math for fixed-height virtual lists.
//!
//! Given an item count, a uniform row height, the viewport height and the
//! scroll offset, [`Virtualizer::window`] computes the contiguous index range
//! worth materializing, padded by a buffer on both sides. Rows are placed at
//! `index * item_height` inside a content area sized to the full virtual
//! height, so the native scrollbar behaves as if every row existed.
//!
//! The start estimate is proportional (`scroll_top / total_height * len`),
//! which only holds because every row has the same height. Variable-height
//! rows would need a prefix-sum lookup instead.

use std::ops::Range;

/// Rows rendered beyond each edge of the viewport.
pub const DEFAULT_BUFFER: usize = 10;

/// Measured viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Placement of one materialized row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowPosition {
    pub index: usize,
    /// Offset from the top of the virtual content area.
    pub top: f64,
    pub height: f64,
}

/// The index range to render for the current scroll state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleWindow {
    /// First rendered index (inclusive).
    pub start: usize,
    /// One past the last rendered index.
    pub end: usize,
    pub item_height: f64,
    /// Height of the full virtual content area.
    pub total_height: f64,
}

impl VisibleWindow {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }

    /// Absolute placement for each rendered index.
    pub fn positions(&self) -> impl Iterator<Item = RowPosition> + '_ {
        self.range().map(|index| RowPosition {
            index,
            top: index as f64 * self.item_height,
            height: self.item_height,
        })
    }
}

/// Scroll and viewport state for one virtual list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Virtualizer {
    item_height: f64,
    buffer: usize,
    viewport: Option<Viewport>,
    scroll_top: f64,
}

impl Virtualizer {
    pub fn new(item_height: f64) -> Self {
        Self {
            item_height,
            buffer: DEFAULT_BUFFER,
            viewport: None,
            scroll_top: 0.0,
        }
    }

    pub fn with_buffer(mut self, buffer: usize) -> Self {
        self.buffer = buffer;
        self
    }

    pub fn item_height(&self) -> f64 {
        self.item_height
    }

    pub fn buffer(&self) -> usize {
        self.buffer
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Whether a viewport size has been reported at least once.
    pub fn is_measured(&self) -> bool {
        self.viewport.is_some()
    }

    pub fn set_item_height(&mut self, item_height: f64) {
        self.item_height = item_height;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    /// Record the scroll offset. Negative offsets (overscroll bounce) count as 0.
    pub fn set_scroll_top(&mut self, scroll_top: f64) {
        self.scroll_top = scroll_top.max(0.0);
    }

    pub fn total_height(&self, len: usize) -> f64 {
        len as f64 * self.item_height
    }

    /// Compute the rows to render for a sequence of `len` items.
    ///
    /// Returns `None` when nothing should render at all: the viewport hasn't
    /// been measured yet, or the content has no height. If the sequence
    /// shrank since the last scroll event the window is clamped to the new
    /// length rather than indexing past it.
    pub fn window(&self, len: usize) -> Option<VisibleWindow> {
        let viewport = self.viewport?;
        let total_height = self.total_height(len);
        if total_height <= 0.0 || !total_height.is_finite() {
            return None;
        }

        let visible = (viewport.height.max(0.0) / self.item_height).ceil() as usize;
        // Float-to-int casts saturate, so NaN and negatives land on 0.
        let estimated = (self.scroll_top / total_height * len as f64).floor() as usize;

        let end = estimated
            .saturating_add(visible)
            .saturating_add(self.buffer)
            .min(len);
        let start = estimated.saturating_sub(self.buffer).min(end);

        Some(VisibleWindow {
            start,
            end,
            item_height: self.item_height,
            total_height,
        })
    }
}

// =============================================================================
// Grid helpers
// =============================================================================

/// Number of fixed-width columns that fit in `width`, never less than one.
pub fn available_columns(width: f64, item_width: f64) -> usize {
    if item_width <= 0.0 || item_width.is_nan() {
        return 1;
    }
    ((width / item_width).floor() as usize).max(1)
}

/// Split `items` into rows of `columns` items; the last row may be shorter.
pub fn chunk_rows<T: Clone>(items: &[T], columns: usize) -> Vec<Vec<T>> {
    items
        .chunks(columns.max(1))
        .map(|row| row.to_vec())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(item_height: f64, viewport_height: f64) -> Virtualizer {
        let mut v = Virtualizer::new(item_height);
        v.set_viewport(Viewport::new(300.0, viewport_height));
        v
    }

    #[test]
    fn test_window_covers_viewport() {
        let mut v = measured(20.0, 200.0);
        v.set_scroll_top(4000.0);
        let window = v.window(1000).expect("should render");

        assert!(window.start <= 190);
        assert!(window.end >= 210);
        assert!(window.end <= 1000);
        assert_eq!(window.range(), 190..220);
        assert_eq!(window.total_height, 20_000.0);
    }

    #[test]
    fn test_window_at_top() {
        let v = measured(24.0, 100.0);
        let window = v.window(500).unwrap();
        assert_eq!(window.start, 0);
        // ceil(100 / 24) = 5 visible + 10 buffer
        assert_eq!(window.end, 15);
    }

    #[test]
    fn test_window_at_bottom_is_clamped() {
        let mut v = measured(20.0, 200.0);
        v.set_scroll_top(19_800.0);
        let window = v.window(1000).unwrap();
        assert_eq!(window.end, 1000);
        assert_eq!(window.start, 980);
    }

    #[test]
    fn test_unmeasured_renders_nothing() {
        let v = Virtualizer::new(20.0);
        assert!(!v.is_measured());
        assert!(v.window(100).is_none());
    }

    #[test]
    fn test_empty_renders_nothing() {
        let v = measured(20.0, 200.0);
        assert!(v.window(0).is_none());
    }

    #[test]
    fn test_shrunk_sequence_clamps() {
        let mut v = measured(20.0, 200.0);
        v.set_scroll_top(4000.0);
        // Scroll offset still points at row 200 but only 50 rows remain.
        let window = v.window(50).unwrap();
        assert!(window.end <= 50);
        assert!(window.start <= window.end);
        assert!(window.positions().all(|p| p.index < 50));
    }

    #[test]
    fn test_positions() {
        let v = measured(30.0, 60.0).with_buffer(0);
        let window = v.window(10).unwrap();
        let positions: Vec<_> = window.positions().collect();
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[1].top, 30.0);
        assert_eq!(positions[1].height, 30.0);
    }

    #[test]
    fn test_negative_scroll_is_zero() {
        let mut v = measured(20.0, 100.0);
        v.set_scroll_top(-50.0);
        assert_eq!(v.scroll_top(), 0.0);
        assert_eq!(v.window(100).unwrap().start, 0);
    }

    #[test]
    fn test_available_columns() {
        assert_eq!(available_columns(720.0, 72.0), 10);
        assert_eq!(available_columns(100.0, 72.0), 1);
        assert_eq!(available_columns(0.0, 72.0), 1);
        assert_eq!(available_columns(500.0, 0.0), 1);
    }

    #[test]
    fn test_chunk_rows() {
        let rows = chunk_rows(&[1, 2, 3, 4, 5], 2);
        assert_eq!(rows, vec![vec![1, 2], vec![3, 4], vec![5]]);
        assert!(chunk_rows::<u8>(&[], 3).is_empty());
    }
}
