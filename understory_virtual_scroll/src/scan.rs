// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible-range scanning over a strip of concrete item sizes.

use core::cmp::Ordering;
use core::ops::Range;

use crate::Scalar;

/// Result of a visibility scan over a 1D strip.
///
/// Indices form the half-open range `[start, end)`. A range over a non-empty
/// strip always holds at least one index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleRange<S> {
    /// First rendered index (inclusive), overscan applied.
    pub start: usize,
    /// One past the last rendered index (exclusive), overscan applied.
    pub end: usize,
    /// Total size of all items before `start`.
    pub offset: S,
}

impl<S: Scalar> VisibleRange<S> {
    /// The range over a strip with no items.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            start: 0,
            end: 0,
            offset: S::zero(),
        }
    }

    /// Returns `true` if there are no rendered items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Number of rendered items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// First rendered index.
    #[must_use]
    pub const fn rendered_start_index(&self) -> usize {
        self.start
    }

    /// Last rendered index (inclusive), or `None` when nothing is rendered.
    #[must_use]
    pub const fn rendered_end_index(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.end - 1)
        }
    }

    /// Rendered indices, `start..end`.
    #[must_use]
    pub const fn indices(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Where the scan stands while walking items in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanPhase {
    /// Looking for the item containing the viewport start.
    Start,
    /// Start found; looking for the item containing the viewport end.
    End { start: usize },
    /// Both ends found.
    Done { start: usize, end: usize },
}

/// Find the items covering a viewport over a strip of `len` items.
///
/// - `item_size`: size of the item at each index, queried in index order.
/// - `scroll_position`: start of the viewport in strip coordinates. Negative
///   values are treated as `0`.
/// - `container_size`: size of the viewport.
/// - `overscan`: number of extra items to include on each side.
///
/// Item `i` spans the closed interval `[offset_i, offset_i + size_i]`, so a
/// point exactly on a boundary belongs to both neighbors and the earlier one is
/// picked. The scan stops at the first item containing the viewport end.
///
/// When the viewport runs past the last item, the end index becomes the last
/// item, so every item from the start index on is included. This differs from
/// scanners that keep the end index at the start item in that case, which
/// leaves on-screen trailing items unrendered. When the viewport starts past
/// the last item, the scan falls back to index `0`.
///
/// Returns `None` when `container_size` is not positive: nothing should be
/// rendered. A strip with no items yields [`VisibleRange::empty`].
///
/// This is a linear scan, `O(len)` per call, and the returned offset is summed
/// again from index `0`.
///
/// ```rust
/// use understory_virtual_scroll::scan_visible_range;
///
/// let sizes = [100.0_f64, 100.0, 100.0];
/// let range = scan_visible_range(sizes.len(), |i| sizes[i], 120.0, 150.0, 0).unwrap();
/// assert_eq!(range.indices(), 1..3);
/// assert_eq!(range.offset, 100.0);
///
/// assert!(scan_visible_range(sizes.len(), |i| sizes[i], 0.0, 0.0, 0).is_none());
/// ```
pub fn scan_visible_range<S, F>(
    len: usize,
    mut item_size: F,
    scroll_position: S,
    container_size: S,
    overscan: usize,
) -> Option<VisibleRange<S>>
where
    S: Scalar,
    F: FnMut(usize) -> S,
{
    if container_size.partial_cmp(&S::zero()) != Some(Ordering::Greater) {
        log::debug!("container size {container_size:?} is not positive; nothing to render");
        return None;
    }
    if len == 0 {
        return Some(VisibleRange::empty());
    }

    let viewport_start = scroll_position.max(S::zero());
    let viewport_end = (viewport_start + container_size).max(S::zero());

    let mut phase = ScanPhase::Start;
    let mut item_start = S::zero();
    for index in 0..len {
        let size = item_size(index);
        debug_assert!(
            size.is_finite(),
            "item sizes must be finite; got {size:?} at index {index}"
        );
        let item_end = item_start + size;
        let contains = |point: S| item_start <= point && point <= item_end;

        phase = match phase {
            // The whole viewport may fit inside this one item.
            ScanPhase::Start if contains(viewport_start) && contains(viewport_end) => {
                ScanPhase::Done {
                    start: index,
                    end: index,
                }
            }
            ScanPhase::Start if contains(viewport_start) => ScanPhase::End { start: index },
            ScanPhase::End { start } if contains(viewport_end) => {
                ScanPhase::Done { start, end: index }
            }
            unchanged => unchanged,
        };
        if matches!(phase, ScanPhase::Done { .. }) {
            break;
        }
        item_start = item_end;
    }

    let last = len - 1;
    let (start, end) = match phase {
        ScanPhase::Done { start, end } => (start, end),
        ScanPhase::End { start } => (start, last),
        ScanPhase::Start => {
            log::debug!(
                "viewport start {viewport_start:?} lies past all {len} items; falling back to index 0"
            );
            (0, 0)
        }
    };

    let start = start.saturating_sub(overscan);
    let end = end.saturating_add(overscan).min(last);
    let offset = (0..start).fold(S::zero(), |acc, index| acc + item_size(index));

    log::trace!("scan_visible_range: len={len} rendered={start}..={end} offset={offset:?}");
    Some(VisibleRange {
        start,
        end: end + 1,
        offset,
    })
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{VisibleRange, scan_visible_range};

    fn scan(
        sizes: &[f64],
        scroll: f64,
        container: f64,
        overscan: usize,
    ) -> Option<VisibleRange<f64>> {
        scan_visible_range(sizes.len(), |i| sizes[i], scroll, container, overscan)
    }

    /// Deterministic pseudo-random sizes in `1..=max`.
    fn sizes(count: usize, max: u64, seed: u64) -> Vec<f64> {
        let mut state = seed;
        (0..count)
            .map(|_| {
                state = state
                    .wrapping_mul(6_364_136_223_846_793_005)
                    .wrapping_add(1_442_695_040_888_963_407);
                ((state >> 33) % max + 1) as f64
            })
            .collect()
    }

    #[test]
    fn viewport_spanning_two_items() {
        let range = scan(&[100.0, 100.0, 100.0], 120.0, 150.0, 0).unwrap();
        assert_eq!(range.start, 1);
        assert_eq!(range.rendered_end_index(), Some(2));
        assert_eq!(range.offset, 100.0);
    }

    #[test]
    fn non_positive_container_renders_nothing() {
        assert_eq!(scan(&[100.0, 100.0], 0.0, 0.0, 2), None);
        assert_eq!(scan(&[100.0, 100.0], 0.0, -10.0, 2), None);
        assert_eq!(scan(&[100.0, 100.0], 0.0, f64::NAN, 2), None);
    }

    #[test]
    fn zero_items_yield_empty_range() {
        let range = scan(&[], 0.0, 100.0, 5).unwrap();
        assert!(range.is_empty());
        assert_eq!(range.rendered_start_index(), 0);
        assert_eq!(range.rendered_end_index(), None);
        assert_eq!(range.indices().count(), 0);
    }

    #[test]
    fn viewport_inside_single_item() {
        let range = scan(&[10.0, 500.0, 10.0], 50.0, 100.0, 0).unwrap();
        assert_eq!(range.indices(), 1..2);
        assert_eq!(range.offset, 10.0);
    }

    #[test]
    fn boundaries_belong_to_the_earlier_item() {
        // Scroll lands exactly on the end of item 0.
        let range = scan(&[100.0, 100.0, 100.0], 100.0, 100.0, 0).unwrap();
        assert_eq!(range.indices(), 0..2);
        assert_eq!(range.offset, 0.0);
    }

    #[test]
    fn negative_scroll_is_treated_as_zero() {
        let range = scan(&[50.0, 50.0, 50.0], -40.0, 60.0, 0).unwrap();
        assert_eq!(range.indices(), 0..2);
    }

    #[test]
    fn viewport_past_content_end_keeps_trailing_items() {
        let range = scan(&[100.0, 100.0, 100.0], 50.0, 1000.0, 0).unwrap();
        assert_eq!(range.indices(), 0..3);
    }

    #[test]
    fn scrolled_past_all_content_falls_back_to_first_item() {
        let range = scan(&[100.0, 100.0, 100.0], 900.0, 100.0, 0).unwrap();
        assert_eq!(range.indices(), 0..1);
        assert_eq!(range.offset, 0.0);

        let range = scan(&[100.0, 100.0, 100.0], 900.0, 100.0, 1).unwrap();
        assert_eq!(range.indices(), 0..2);
    }

    #[test]
    fn overscan_is_clamped_to_strip() {
        let range = scan(&[10.0; 10], 45.0, 10.0, 3).unwrap();
        // Visible 4..=5, padded to 1..=8.
        assert_eq!(range.indices(), 1..9);
        assert_eq!(range.offset, 10.0);

        let range = scan(&[10.0; 10], 0.0, 10.0, 50).unwrap();
        assert_eq!(range.indices(), 0..10);
        assert_eq!(range.offset, 0.0);
    }

    #[test]
    fn zero_sized_items_are_skipped_over() {
        // Items 0 and 1 span [0, 0] and item 2 ends at 100, so only item 3 holds 120.
        let range = scan(&[0.0, 0.0, 100.0, 100.0], 120.0, 50.0, 0).unwrap();
        assert_eq!(range.start, 3);
        assert_eq!(range.indices(), 3..4);
        assert_eq!(range.offset, 100.0);
    }

    #[test]
    fn offset_is_sum_of_sizes_before_start() {
        let sizes = sizes(200, 40, 7);
        for scroll in [0.0, 13.0, 250.0, 1999.5, 3000.0] {
            for overscan in [0, 1, 4] {
                let range = scan(&sizes, scroll, 120.0, overscan).unwrap();
                let expected: f64 = sizes[..range.start].iter().sum();
                assert_eq!(range.offset, expected, "scroll={scroll} overscan={overscan}");
            }
        }
    }

    #[test]
    fn range_covers_viewport_within_content() {
        let sizes = sizes(120, 60, 42);
        let total: f64 = sizes.iter().sum();
        let mut scroll = 0.0;
        while scroll < total {
            for container in [1.0, 35.0, 180.0, 5000.0] {
                let range = scan(&sizes, scroll, container, 0).unwrap();
                let covered_end =
                    range.offset + sizes[range.start..range.end].iter().sum::<f64>();
                assert!(range.offset <= scroll, "scroll={scroll} container={container}");
                assert!(
                    covered_end >= (scroll + container).min(total),
                    "scroll={scroll} container={container}"
                );
            }
            scroll += 17.0;
        }
    }

    #[test]
    fn larger_overscan_never_shrinks_range() {
        let sizes = sizes(80, 30, 3);
        for scroll in [0.0, 95.0, 700.0, 1400.0] {
            let mut previous = scan(&sizes, scroll, 90.0, 0).unwrap();
            for overscan in 1..12 {
                let range = scan(&sizes, scroll, 90.0, overscan).unwrap();
                assert!(range.start <= previous.start, "overscan={overscan}");
                assert!(range.end >= previous.end, "overscan={overscan}");
                assert!(range.end <= sizes.len(), "overscan={overscan}");
                previous = range;
            }
        }
    }
}
