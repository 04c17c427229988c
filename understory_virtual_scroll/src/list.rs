// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition of size resolution and range scanning for one scroll axis.

use alloc::vec::Vec;
use core::ops::Range;

use crate::{Scalar, SizeSpec, VisibleRange, resolve_sizes, scan_visible_range};

/// Overscan, in items, that hosts use when they have no preference.
pub const DEFAULT_OVERSCAN: usize = 5;

/// Snapshot of one virtualized axis: resolved item sizes plus the range to render.
///
/// A layout is computed from scratch from explicit inputs and never updated in
/// place. Hosts recompute it whenever the container size, scroll position,
/// overscan, or item descriptors change.
///
/// ```rust
/// use understory_virtual_scroll::{ItemSize, ListLayout, SizeSpec};
///
/// // 1000 rows, each 10% of a 400px container.
/// let row = SizeSpec::new(ItemSize::Percent(10.0));
/// let layout = ListLayout::compute(400.0_f64, 1000, |_| row, 1200.0, 2);
///
/// assert_eq!(layout.total_size(), 40_000.0);
/// // Row 29 ends exactly at the scroll position, so it is the first visible row.
/// assert_eq!(layout.rendered_indexes(), 27..42);
/// assert_eq!(layout.offset(), 1080.0);
/// assert_eq!(layout.item_position(30), 1200.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ListLayout<S> {
    sizes: Vec<S>,
    total_size: S,
    range: Option<VisibleRange<S>>,
}

impl<S: Scalar> ListLayout<S> {
    /// Resolves `len` descriptors against `container_size`, then scans for the
    /// items visible at `scroll_position`.
    ///
    /// See [`resolve_sizes`] and [`scan_visible_range`].
    #[must_use]
    pub fn compute<F>(
        container_size: S,
        len: usize,
        spec_of: F,
        scroll_position: S,
        overscan: usize,
    ) -> Self
    where
        F: FnMut(usize) -> SizeSpec<S>,
    {
        let sizes = resolve_sizes(container_size, len, spec_of);
        Self::from_sizes(sizes, container_size, scroll_position, overscan)
    }

    /// Builds a layout over already concrete item sizes.
    #[must_use]
    pub fn from_sizes(
        sizes: Vec<S>,
        container_size: S,
        scroll_position: S,
        overscan: usize,
    ) -> Self {
        let total_size = sizes.iter().fold(S::zero(), |acc, &size| acc + size);
        debug_assert!(
            total_size.is_finite(),
            "ListLayout sizes must be finite; total is {total_size:?}"
        );
        let range = scan_visible_range(
            sizes.len(),
            |index| sizes[index],
            scroll_position,
            container_size,
            overscan,
        );
        Self {
            sizes,
            total_size,
            range,
        }
    }

    /// Resolved size of every item, in index order.
    #[must_use]
    pub fn sizes(&self) -> &[S] {
        &self.sizes
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Resolved size of `index`, if it exists.
    #[must_use]
    pub fn size_of(&self, index: usize) -> Option<S> {
        self.sizes.get(index).copied()
    }

    /// Sum of all resolved sizes.
    #[must_use]
    pub const fn total_size(&self) -> S {
        self.total_size
    }

    /// The scanned range, or `None` when the container has no size.
    #[must_use]
    pub const fn visible_range(&self) -> Option<VisibleRange<S>> {
        self.range
    }

    /// First rendered index, `0` when nothing is rendered.
    #[must_use]
    pub fn rendered_start_index(&self) -> usize {
        self.range.map_or(0, |range| range.start)
    }

    /// Last rendered index (inclusive), or `None` when nothing is rendered.
    #[must_use]
    pub fn rendered_end_index(&self) -> Option<usize> {
        self.range.and_then(|range| range.rendered_end_index())
    }

    /// Indices to render. Empty when the container has no size or there are no items.
    #[must_use]
    pub fn rendered_indexes(&self) -> Range<usize> {
        self.range.map_or(0..0, |range| range.indices())
    }

    /// Space before the first rendered item, `0` when nothing is rendered.
    #[must_use]
    pub fn offset(&self) -> S {
        self.range.map_or_else(S::zero, |range| range.offset)
    }

    /// Position of the start of `index`: the sum of sizes of all earlier items.
    ///
    /// Indices past the end yield [`total_size`](Self::total_size).
    #[must_use]
    pub fn item_position(&self, index: usize) -> S {
        let end = index.min(self.sizes.len());
        self.sizes[..end]
            .iter()
            .fold(S::zero(), |acc, &size| acc + size)
    }

    /// Span `[start, end)` of `index` along the axis, if it exists.
    #[must_use]
    pub fn item_span(&self, index: usize) -> Option<Range<S>> {
        let size = self.size_of(index)?;
        let start = self.item_position(index);
        Some(start..start + size)
    }
}
