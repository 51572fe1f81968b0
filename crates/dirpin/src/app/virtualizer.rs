//! Scroll math for the fixed-row-height virtualized list.
//!
//! All functions are pure; the widget owns the scroll offset and viewport
//! height and threads them through per cycle.

use std::ops::Range;

/// Height of one list row in viewport units (one terminal row).
pub const ROW_HEIGHT: f32 = 1.0;

/// Returns the half-open row range intersecting the viewport.
pub fn visible_range(
    scroll_offset: f32,
    viewport_height: f32,
    row_height: f32,
    count: usize,
) -> Range<usize> {
    if row_height <= 0.0 || count == 0 {
        return 0..0;
    }

    let start = (scroll_offset / row_height).floor().max(0.0) as usize;
    let end = (((scroll_offset + viewport_height) / row_height).ceil().max(0.0) as usize).min(count);
    let start = start.min(end);

    start..end
}

/// Returns the scroll offset that brings `index` fully into view.
///
/// The offset is unchanged when the row is already visible; otherwise the
/// row's nearest edge is aligned with the matching viewport edge. Applying
/// the function twice with the same inputs yields the same offset.
pub fn scroll_to_index(
    index: usize,
    scroll_offset: f32,
    viewport_height: f32,
    row_height: f32,
) -> f32 {
    let top = index as f32 * row_height;
    let bottom = top + row_height;

    // min/max instead of branches keeps the result stable when the row is
    // taller than the viewport: the top edge wins.
    scroll_offset.max(bottom - viewport_height).min(top).max(0.0)
}

/// Returns how many full rows fit in the viewport, at least 1.
pub fn viewport_rows(viewport_height: f32, row_height: f32) -> usize {
    if row_height <= 0.0 {
        return 1;
    }

    ((viewport_height / row_height).floor() as usize).max(1)
}

/// Returns the row index under a viewport-relative `y` coordinate.
pub fn row_at(scroll_offset: f32, y: f32, row_height: f32) -> usize {
    if row_height <= 0.0 {
        return 0;
    }

    (((scroll_offset + y) / row_height).floor().max(0.0)) as usize
}

/// Clamps a scroll offset to the scrollable content range.
pub fn clamp_scroll(offset: f32, count: usize, viewport_height: f32, row_height: f32) -> f32 {
    let content_height = count as f32 * row_height;
    let max_offset = (content_height - viewport_height).max(0.0);

    offset.clamp(0.0, max_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_range_at_top() {
        // Arrange & Act
        let range = visible_range(0.0, 5.0, 1.0, 100);

        // Assert
        assert_eq!(range, 0..5);
    }

    #[test]
    fn test_visible_range_includes_partial_rows() {
        // Arrange & Act — offset 2.5 cuts into row 2, viewport ends inside row 7
        let range = visible_range(2.5, 5.0, 1.0, 100);

        // Assert
        assert_eq!(range, 2..8);
    }

    #[test]
    fn test_visible_range_clamps_to_count() {
        // Arrange & Act
        let range = visible_range(8.0, 5.0, 1.0, 10);

        // Assert
        assert_eq!(range, 8..10);
    }

    #[test]
    fn test_visible_range_bounds_hold_over_samples() {
        // Arrange
        let offsets = [0.0, 0.5, 3.0, 99.0, 1000.0];
        let viewports = [0.0, 1.0, 7.5, 64.0];
        let counts = [0, 1, 5, 333];

        // Act & Assert
        for &scroll_offset in &offsets {
            for &viewport_height in &viewports {
                for &count in &counts {
                    let range = visible_range(scroll_offset, viewport_height, 1.0, count);
                    assert!(range.start <= range.end);
                    assert!(range.end <= count);
                }
            }
        }
    }

    #[test]
    fn test_scroll_to_index_keeps_visible_row_in_place() {
        // Arrange & Act — row 3 already inside [2, 8)
        let offset = scroll_to_index(3, 2.0, 6.0, 1.0);

        // Assert
        assert!((offset - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_scroll_to_index_aligns_bottom_when_below() {
        // Arrange & Act — row 9's bottom edge is 10.0, viewport holds 6 rows
        let offset = scroll_to_index(9, 0.0, 6.0, 1.0);

        // Assert
        assert!((offset - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_scroll_to_index_aligns_top_when_above() {
        // Arrange & Act
        let offset = scroll_to_index(1, 5.0, 6.0, 1.0);

        // Assert
        assert!((offset - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_scroll_to_index_is_idempotent() {
        // Arrange
        let samples = [
            (0, 5.0, 6.0, 1.0),
            (9, 0.0, 6.0, 1.0),
            (3, 2.0, 6.0, 1.0),
            (4, 10.0, 0.5, 1.0), // row taller than the viewport
        ];

        // Act & Assert
        for (index, scroll_offset, viewport_height, row_height) in samples {
            let once = scroll_to_index(index, scroll_offset, viewport_height, row_height);
            let twice = scroll_to_index(index, once, viewport_height, row_height);
            assert!((once - twice).abs() < f32::EPSILON, "sample {index} drifted");
        }
    }

    #[test]
    fn test_scroll_to_index_never_negative() {
        // Arrange & Act
        let offset = scroll_to_index(0, 0.0, 100.0, 1.0);

        // Assert
        assert!(offset >= 0.0);
    }

    #[test]
    fn test_viewport_rows_floors_and_bottoms_out_at_one() {
        // Arrange & Act & Assert
        assert_eq!(viewport_rows(7.9, 1.0), 7);
        assert_eq!(viewport_rows(0.4, 1.0), 1);
        assert_eq!(viewport_rows(0.0, 1.0), 1);
    }

    #[test]
    fn test_row_at_accounts_for_scroll() {
        // Arrange & Act & Assert
        assert_eq!(row_at(0.0, 0.0, 1.0), 0);
        assert_eq!(row_at(3.0, 2.0, 1.0), 5);
    }

    #[test]
    fn test_clamp_scroll_limits_to_content() {
        // Arrange & Act & Assert
        assert!((clamp_scroll(100.0, 10, 4.0, 1.0) - 6.0).abs() < f32::EPSILON);
        assert!((clamp_scroll(-3.0, 10, 4.0, 1.0)).abs() < f32::EPSILON);
        assert!((clamp_scroll(5.0, 3, 10.0, 1.0)).abs() < f32::EPSILON);
    }
}
