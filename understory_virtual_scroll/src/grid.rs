// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-axis virtualization built from independent column and row layouts.
//!
//! A [`GridLayout`] is nothing more than two [`ListLayout`]s: one over columns
//! driven by the viewport width and horizontal scroll, and one over rows driven
//! by the viewport height and vertical scroll. The rendered block is the cross
//! product of the rendered columns and rendered rows.
//!
//! Geometry is expressed with `kurbo` types in content coordinates, where
//! `(0, 0)` is the top-left corner of the first cell.

use core::ops::Range;

use kurbo::{Point, Rect, Size, Vec2};

use crate::{DEFAULT_OVERSCAN, ListLayout, SizeSpec};

/// Viewport over a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridViewport {
    /// Size of the scroll container.
    pub size: Size,
    /// Scroll offset of the container.
    pub scroll: Vec2,
    /// Extent of sticky leading headers (left column block width, top row block height).
    ///
    /// Cells start after the inset, so it is subtracted from the scroll offset.
    pub inset: Size,
}

impl GridViewport {
    /// Creates a viewport without headers.
    #[must_use]
    pub const fn new(size: Size, scroll: Vec2) -> Self {
        Self {
            size,
            scroll,
            inset: Size::ZERO,
        }
    }

    /// Returns this viewport with leading headers of the given extent.
    #[must_use]
    pub const fn with_inset(self, inset: Size) -> Self {
        Self { inset, ..self }
    }

    /// Scroll offset relative to the cell area. May be negative while headers scroll in.
    #[must_use]
    pub fn content_scroll(&self) -> Vec2 {
        self.scroll - Vec2::new(self.inset.width, self.inset.height)
    }
}

/// Overscan per axis, in items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOverscan {
    /// Extra columns on each side of the visible columns.
    pub columns: usize,
    /// Extra rows on each side of the visible rows.
    pub rows: usize,
}

impl GridOverscan {
    /// Same overscan on both axes.
    #[must_use]
    pub const fn uniform(overscan: usize) -> Self {
        Self {
            columns: overscan,
            rows: overscan,
        }
    }
}

impl Default for GridOverscan {
    fn default() -> Self {
        Self::uniform(DEFAULT_OVERSCAN)
    }
}

/// Column and row layouts of a virtualized grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    columns: ListLayout<f64>,
    rows: ListLayout<f64>,
}

impl GridLayout {
    /// Computes column widths and row heights against the viewport, then the
    /// rendered block for its scroll offset.
    ///
    /// ```rust
    /// use kurbo::{Point, Size, Vec2};
    /// use understory_virtual_scroll::{
    ///     GridLayout, GridOverscan, GridViewport, ItemSize, SizeSpec,
    /// };
    ///
    /// let viewport = GridViewport::new(Size::new(300.0, 200.0), Vec2::new(0.0, 400.0));
    /// let column = SizeSpec::new(ItemSize::Fraction(1.0));
    /// let row = SizeSpec::new(ItemSize::Pixels(40.0));
    /// let grid = GridLayout::compute(viewport, 3, |_| column, 100, |_| row, GridOverscan::uniform(0));
    ///
    /// assert_eq!(grid.content_size(), Size::new(300.0, 4000.0));
    /// assert_eq!(grid.rendered_rows(), 9..15);
    /// assert_eq!(grid.content_origin(), Point::new(0.0, 360.0));
    /// ```
    #[must_use]
    pub fn compute<C, R>(
        viewport: GridViewport,
        column_count: usize,
        column_spec: C,
        row_count: usize,
        row_spec: R,
        overscan: GridOverscan,
    ) -> Self
    where
        C: FnMut(usize) -> SizeSpec<f64>,
        R: FnMut(usize) -> SizeSpec<f64>,
    {
        let scroll = viewport.content_scroll();
        let columns = ListLayout::compute(
            viewport.size.width,
            column_count,
            column_spec,
            scroll.x,
            overscan.columns,
        );
        let rows = ListLayout::compute(
            viewport.size.height,
            row_count,
            row_spec,
            scroll.y,
            overscan.rows,
        );
        Self::from_axes(columns, rows)
    }

    /// Pairs layouts that were computed separately.
    #[must_use]
    pub const fn from_axes(columns: ListLayout<f64>, rows: ListLayout<f64>) -> Self {
        Self { columns, rows }
    }

    /// Horizontal axis.
    #[must_use]
    pub const fn columns(&self) -> &ListLayout<f64> {
        &self.columns
    }

    /// Vertical axis.
    #[must_use]
    pub const fn rows(&self) -> &ListLayout<f64> {
        &self.rows
    }

    /// Size of all cells together.
    #[must_use]
    pub const fn content_size(&self) -> Size {
        Size::new(self.columns.total_size(), self.rows.total_size())
    }

    /// Top-left corner of the rendered block: the space taken by the columns
    /// and rows before it.
    #[must_use]
    pub fn content_origin(&self) -> Point {
        Point::new(self.columns.offset(), self.rows.offset())
    }

    /// Rendered column indices.
    #[must_use]
    pub fn rendered_columns(&self) -> Range<usize> {
        self.columns.rendered_indexes()
    }

    /// Rendered row indices.
    #[must_use]
    pub fn rendered_rows(&self) -> Range<usize> {
        self.rows.rendered_indexes()
    }

    /// Rendered cells as `(row, column)` pairs in row-major order.
    pub fn rendered_cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let columns = self.rendered_columns();
        self.rendered_rows()
            .flat_map(move |row| columns.clone().map(move |column| (row, column)))
    }

    /// Size of the rendered block.
    #[must_use]
    pub fn rendered_block_size(&self) -> Size {
        let sum = |layout: &ListLayout<f64>| -> f64 {
            layout.sizes()[layout.rendered_indexes()].iter().sum()
        };
        Size::new(sum(&self.columns), sum(&self.rows))
    }

    /// Bounds of a cell in content coordinates, if both indices exist.
    #[must_use]
    pub fn cell_rect(&self, row: usize, column: usize) -> Option<Rect> {
        let x = self.columns.item_span(column)?;
        let y = self.rows.item_span(row)?;
        Some(Rect::new(x.start, y.start, x.end, y.end))
    }

    /// One-based `(row, column)` position of a cell inside the rendered block,
    /// or `None` if the cell is not rendered.
    ///
    /// Hosts placing rendered cells on their own track grid (for example CSS
    /// grid lines) can use this directly.
    #[must_use]
    pub fn block_slot(&self, row: usize, column: usize) -> Option<(usize, usize)> {
        let rows = self.rendered_rows();
        let columns = self.rendered_columns();
        if rows.contains(&row) && columns.contains(&column) {
            Some((row - rows.start + 1, column - columns.start + 1))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Point, Rect, Size, Vec2};

    use super::{GridLayout, GridOverscan, GridViewport};
    use crate::{DEFAULT_OVERSCAN, ItemSize, SizeSpec};

    fn build_grid(viewport: GridViewport, overscan: GridOverscan) -> GridLayout {
        let columns = [
            SizeSpec::new(ItemSize::Pixels(100.0)),
            SizeSpec::new(ItemSize::Fraction(1.0)),
            SizeSpec::new(ItemSize::Fraction(1.0)),
        ];
        let row = SizeSpec::new(ItemSize::Pixels(40.0));
        GridLayout::compute(viewport, columns.len(), |i| columns[i], 100, |_| row, overscan)
    }

    #[test]
    fn axes_are_computed_independently() {
        let viewport = GridViewport::new(Size::new(500.0, 200.0), Vec2::new(0.0, 400.0));
        let grid = build_grid(viewport, GridOverscan::uniform(0));

        assert_eq!(grid.columns().sizes(), [100.0, 200.0, 200.0]);
        assert_eq!(grid.rendered_columns(), 0..3);
        // Row 9 ends at 400 and row 14 ends at 600.
        assert_eq!(grid.rendered_rows(), 9..15);
        assert_eq!(grid.content_size(), Size::new(500.0, 4000.0));
        assert_eq!(grid.content_origin(), Point::new(0.0, 360.0));
        assert_eq!(grid.rendered_block_size(), Size::new(500.0, 240.0));
    }

    #[test]
    fn cells_map_to_rects_and_slots() {
        let viewport = GridViewport::new(Size::new(500.0, 200.0), Vec2::new(0.0, 400.0));
        let grid = build_grid(viewport, GridOverscan::uniform(0));

        assert_eq!(
            grid.cell_rect(10, 1),
            Some(Rect::new(100.0, 400.0, 300.0, 440.0))
        );
        assert_eq!(grid.cell_rect(100, 0), None);
        assert_eq!(grid.block_slot(9, 0), Some((1, 1)));
        assert_eq!(grid.block_slot(14, 2), Some((6, 3)));
        assert_eq!(grid.block_slot(15, 0), None);

        let cells: Vec<_> = grid.rendered_cells().collect();
        assert_eq!(cells.len(), 18);
        assert_eq!(cells[0], (9, 0));
        assert_eq!(cells[1], (9, 1));
        assert_eq!(cells[17], (14, 2));
    }

    #[test]
    fn inset_shifts_the_cell_scroll() {
        let viewport = GridViewport::new(Size::new(500.0, 200.0), Vec2::new(0.0, 50.0))
            .with_inset(Size::new(0.0, 50.0));
        assert_eq!(viewport.content_scroll(), Vec2::ZERO);
        let grid = build_grid(viewport, GridOverscan::uniform(0));
        assert_eq!(grid.rendered_rows(), 0..5);

        // Headers still scrolling in: negative cell scroll is treated as zero.
        let viewport = viewport.with_inset(Size::new(0.0, 120.0));
        let grid = build_grid(viewport, GridOverscan::uniform(0));
        assert_eq!(grid.rendered_rows(), 0..5);
        assert_eq!(grid.content_origin(), Point::ZERO);
    }

    #[test]
    fn empty_viewport_renders_no_cells() {
        let viewport = GridViewport::new(Size::new(0.0, 200.0), Vec2::ZERO);
        let grid = build_grid(viewport, GridOverscan::default());
        assert!(grid.rendered_columns().is_empty());
        assert_eq!(grid.rendered_rows(), 0..(5 + DEFAULT_OVERSCAN));
        assert_eq!(grid.rendered_cells().count(), 0);
    }

    #[test]
    fn overscan_applies_per_axis() {
        let viewport = GridViewport::new(Size::new(500.0, 200.0), Vec2::new(0.0, 400.0));
        let grid = build_grid(
            viewport,
            GridOverscan {
                columns: 0,
                rows: 2,
            },
        );
        assert_eq!(grid.rendered_rows(), 7..17);
        assert_eq!(grid.rendered_columns(), 0..3);
    }
}
