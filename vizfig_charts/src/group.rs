// Copyright 2025 the VizFig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grids of figures rendered into one document.

use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;
use peniko::color::palette::css;

use crate::figure::{Figure, FigureBase};
use crate::ChartError;

/// Most rows or columns a [`FigureGrid`] holds.
pub const MAX_GRID_DIMENSION: usize = 256;

/// A `rows` x `cols` grid of borrowed figures.
///
/// Building the grid resizes each child to its cell, builds it, and splices its
/// scene into the grid's document.
pub struct FigureGrid<'a> {
    base: FigureBase,
    rows: usize,
    cols: usize,
    cells: Vec<Option<&'a mut dyn Figure>>,
}

impl<'a> FigureGrid<'a> {
    /// An empty grid. Rows and columns are clamped to `1..=MAX_GRID_DIMENSION`.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        let clamp = |n: usize| n.clamp(1, MAX_GRID_DIMENSION);
        let (rows, cols) = (clamp(rows), clamp(cols));
        let mut cells = Vec::new();
        cells.resize_with(rows * cols, || None);
        Self {
            base: FigureBase::new(),
            rows,
            cols,
            cells,
        }
    }

    /// Places `figure` at `(row, col)`, replacing any figure already there.
    pub fn subplot(
        &mut self,
        figure: &'a mut dyn Figure,
        row: usize,
        col: usize,
    ) -> Result<(), ChartError> {
        if row >= self.rows || col >= self.cols {
            return Err(ChartError::CellOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            }
            .logged());
        }
        self.cells[row * self.cols + col] = Some(figure);
        Ok(())
    }

    /// Grid dimensions as `(rows, cols)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Pixel size of each cell, rounded down.
    #[must_use]
    pub fn cell_size(&self) -> (u32, u32) {
        let cols = u32::try_from(self.cols).unwrap_or(u32::MAX);
        let rows = u32::try_from(self.rows).unwrap_or(u32::MAX);
        (self.base.width() / cols, self.base.height() / rows)
    }

    /// Returns `true` if no cell holds a figure.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

impl fmt::Debug for FigureGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled: Vec<bool> = self.cells.iter().map(Option::is_some).collect();
        f.debug_struct("FigureGrid")
            .field("base", &self.base)
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("filled", &filled)
            .finish()
    }
}

impl Figure for FigureGrid<'_> {
    fn base(&self) -> &FigureBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FigureBase {
        &mut self.base
    }

    fn build(&mut self) {
        let (cell_w, cell_h) = self.cell_size();
        let cols = self.cols;
        self.base.begin_scene().draw_background(css::WHITE);
        let doc = self.base.scene_mut();
        for (index, cell) in self.cells.iter_mut().enumerate() {
            let Some(figure) = cell else {
                continue;
            };
            let (row, col) = (index / cols, index % cols);
            figure.set_size(cell_w, cell_h);
            figure.build();
            let origin = Point::new(
                col as f64 * f64::from(cell_w),
                row as f64 * f64::from(cell_h),
            );
            doc.append_scene(figure.scene(), origin);
        }
        log::debug!(
            "built {}x{} grid with {} cells of {cell_w}x{cell_h}, {} nodes",
            self.rows,
            self.cols,
            self.cells.iter().filter(|c| c.is_some()).count(),
            doc.len()
        );
    }

    fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
        self.base.clear();
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use kurbo::Rect;
    use vizfig_scene::Primitive;

    use super::*;
    use crate::{BarChart, LineChart, SeriesStyle};

    #[test]
    fn zero_dimensions_are_raised() {
        let grid = FigureGrid::new(0, 0);
        assert_eq!(grid.dimensions(), (1, 1));
        assert!(grid.is_empty());
    }

    #[test]
    fn huge_dimensions_are_capped() {
        let grid = FigureGrid::new(usize::MAX, 3);
        assert_eq!(grid.dimensions(), (MAX_GRID_DIMENSION, 3));
        let grid = FigureGrid::new(usize::MAX, usize::MAX);
        assert_eq!(grid.dimensions(), (MAX_GRID_DIMENSION, MAX_GRID_DIMENSION));
        assert_eq!(grid.cell_size(), (2, 1));
    }

    #[test]
    fn out_of_bounds_cells_are_rejected() {
        let mut chart = LineChart::new();
        let mut grid = FigureGrid::new(2, 3);
        let err = grid.subplot(&mut chart, 0, 3);
        assert!(
            matches!(
                err,
                Err(ChartError::CellOutOfBounds {
                    row: 0,
                    col: 3,
                    rows: 2,
                    cols: 3
                })
            ),
            "{err:?}"
        );
        assert!(grid.is_empty());
    }

    #[test]
    fn children_are_spliced_into_their_cells() {
        let mut line = LineChart::new();
        line.plot_y(&[1, 3, 2], SeriesStyle::default()).unwrap();
        let mut bars = BarChart::new();
        bars.plot_y(&[1, 2], None).unwrap();

        {
            let mut grid = FigureGrid::new(1, 2);
            grid.set_size(601, 300);
            grid.subplot(&mut line, 0, 0).unwrap();
            grid.subplot(&mut bars, 0, 1).unwrap();
            assert_eq!(grid.cell_size(), (300, 300));
            grid.build();

            let viewports: Vec<Rect> = grid
                .scene()
                .walk()
                .filter_map(|(_, _, n)| match n.primitive {
                    Primitive::Viewport(v) => Some(v.rect),
                    _ => None,
                })
                .collect();
            assert_eq!(
                viewports,
                [
                    Rect::new(0.0, 0.0, 300.0, 300.0),
                    Rect::new(300.0, 0.0, 600.0, 300.0)
                ]
            );
            let svg = grid.svg_text();
            assert!(svg.contains("<svg x=\"300\""), "{svg}");
        }

        assert_eq!((line.width(), line.height()), (300, 300));
    }

    #[test]
    fn later_subplot_replaces_earlier() {
        let mut a = LineChart::new();
        let mut b = LineChart::new();
        let mut grid = FigureGrid::new(1, 1);
        grid.subplot(&mut a, 0, 0).unwrap();
        grid.subplot(&mut b, 0, 0).unwrap();
        grid.build();
        let viewports = grid
            .scene()
            .walk()
            .filter(|(_, _, n)| matches!(n.primitive, Primitive::Viewport(_)))
            .count();
        assert_eq!(viewports, 1);
        grid.clear();
        assert!(grid.is_empty());
    }
}
