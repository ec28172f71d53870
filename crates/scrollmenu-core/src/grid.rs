//! The [`Grid`] type: a screen-sized buffer of [`Cell`]s, plus the
//! [`Frame`] diff that backends flush.
//!
//! Backends keep two grids, the one being drawn and the one last shown,
//! and only emit the cells that changed between them.

use crate::cell::Cell;
use crate::geom::{Point, Range};
use crate::style::Style;

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A 2D buffer of [`Cell`]s, indexed by screen [`Point`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Grid {
    /// Create a grid of the given dimensions filled with default cells.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            cells: vec![Cell::default(); (w as usize) * (h as usize)],
            bounds: Range::new(0, 0, w, h),
        }
    }

    /// Size of the grid as a `Point` (columns, rows).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.bounds.contains(p) {
            Some((p.y as usize) * (self.width() as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// Read the cell at `p`; `Cell::default()` outside the bounds.
    pub fn at(&self, p: Point) -> Cell {
        self.index(p).map(|i| self.cells[i]).unwrap_or_default()
    }

    /// Set the cell at `p`. No-op outside the bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cell;
        }
    }

    /// Write `text` left to right starting at `pos`, one char per cell,
    /// clipped to the grid. Returns the number of cells written.
    pub fn write_str(&mut self, pos: Point, text: &str, style: Style) -> i32 {
        let mut written = 0;
        for (i, ch) in text.chars().enumerate() {
            let p = pos.shift(i as i32, 0);
            if p.x >= self.bounds.max.x {
                break;
            }
            if self.contains(p) {
                self.set(p, Cell::new(ch, style));
                written += 1;
            }
        }
        written
    }

    /// Resize to `size`, discarding the previous contents.
    pub fn resize(&mut self, size: Point) {
        *self = Self::new(size.x, size.y);
    }

    /// The characters of row `y`, without styling. Empty outside the grid.
    pub fn row_text(&self, y: i32) -> String {
        if y < 0 || y >= self.height() {
            return String::new();
        }
        (0..self.width()).map(|x| self.at(Point::new(x, y)).ch).collect()
    }

    /// Every cell as a frame, for a full repaint.
    pub fn full_frame(&self) -> Frame {
        Frame {
            cells: self
                .bounds
                .iter()
                .map(|pos| FrameCell {
                    cell: self.at(pos),
                    pos,
                })
                .collect(),
            width: self.width(),
            height: self.height(),
        }
    }
}

// ---------------------------------------------------------------------------
// Frame / FrameCell / compute_frame
// ---------------------------------------------------------------------------

/// A single cell that changed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub cell: Cell,
    pub pos: Point,
}

/// A set of cell changes.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    pub width: i32,
    pub height: i32,
}

/// Compute the difference between two same-sized grids.
///
/// Returns a [`Frame`] containing only the cells of `curr` that differ
/// from `prev`. If the sizes differ, every cell of `curr` is included.
pub fn compute_frame(prev: &Grid, curr: &Grid) -> Frame {
    if prev.size() != curr.size() {
        return curr.full_frame();
    }
    let cells = curr
        .bounds
        .iter()
        .filter_map(|pos| {
            let cell = curr.at(pos);
            (prev.at(pos) != cell).then_some(FrameCell { cell, pos })
        })
        .collect();
    Frame {
        cells,
        width: curr.width(),
        height: curr.height(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn grid_set_and_at() {
        let mut g = Grid::new(4, 3);
        g.set(Point::new(2, 1), Cell::new('X', Style::default()));
        assert_eq!(g.at(Point::new(2, 1)).ch, 'X');
        assert_eq!(g.at(Point::new(10, 10)), Cell::default());
    }

    #[test]
    fn write_str_clips_at_right_edge() {
        let mut g = Grid::new(5, 2);
        let style = Style::pair(Color::White, Color::Blue);
        assert_eq!(g.write_str(Point::new(2, 1), "abcdef", style), 3);
        assert_eq!(g.row_text(1), "  abc");
        assert_eq!(g.at(Point::new(4, 1)).style, style);
        assert_eq!(g.row_text(0), "     ");
    }

    #[test]
    fn write_str_skips_cells_left_of_grid() {
        let mut g = Grid::new(4, 1);
        assert_eq!(g.write_str(Point::new(-2, 0), "xyab", Style::default()), 2);
        assert_eq!(g.row_text(0), "ab  ");
    }

    #[test]
    fn compute_frame_diff() {
        let a = Grid::new(3, 2);
        let mut b = Grid::new(3, 2);
        b.set(Point::new(1, 0), Cell::new('A', Style::default()));
        let frame = compute_frame(&a, &b);
        assert_eq!(frame.cells.len(), 1);
        assert_eq!(frame.cells[0].pos, Point::new(1, 0));
        assert_eq!(frame.cells[0].cell.ch, 'A');
    }

    #[test]
    fn compute_frame_after_resize_is_full() {
        let a = Grid::new(3, 2);
        let b = Grid::new(4, 2);
        assert_eq!(compute_frame(&a, &b).cells.len(), 8);
    }
}
