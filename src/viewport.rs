//! Mapping between the fixed 800×600 canvas and the terminal's cell grid.
//!
//! Drawing goes canvas → cells. Mouse clicks are hit-tested against the
//! cells a button was drawn on, so a button is clickable on every grid it
//! is visible on.

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::entities::Rect;

/// Smallest grid the game will draw into.
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

/// A block of terminal cells. `width`/`height` are at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub col: u16,
    pub row: u16,
    pub width: u16,
    pub height: u16,
}

impl CellRect {
    pub fn contains(&self, col: u16, row: u16) -> bool {
        (self.col..self.col + self.width).contains(&col)
            && (self.row..self.row + self.height).contains(&row)
    }
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Viewport { cols, rows }
    }

    pub fn fits(&self) -> bool {
        self.cols >= MIN_COLS && self.rows >= MIN_ROWS
    }

    /// Cell containing canvas point (x, y). Off-canvas points snap to the edge.
    pub fn to_cell(&self, x: i32, y: i32) -> (u16, u16) {
        (
            scale_down(x, SCREEN_WIDTH, self.cols),
            scale_down(y, SCREEN_HEIGHT, self.rows),
        )
    }

    /// Cells covered by a canvas box, clipped to the grid. Tiny boxes still
    /// get one cell so every sprite stays visible.
    pub fn span(&self, rect: &Rect) -> CellRect {
        let (col, row) = self.to_cell(rect.x, rect.y);
        let end_col = scale_edge(rect.right(), SCREEN_WIDTH, self.cols);
        let end_row = scale_edge(rect.bottom(), SCREEN_HEIGHT, self.rows);
        CellRect {
            col,
            row,
            width: end_col.saturating_sub(col).max(1),
            height: end_row.saturating_sub(row).max(1),
        }
    }
}

fn scale_down(v: i32, extent: i32, cells: u16) -> u16 {
    let cells = i64::from(cells.max(1));
    let v = i64::from(v.clamp(0, extent - 1));
    (v * cells / i64::from(extent)) as u16
}

/// Exclusive end cell for a canvas edge, rounding up.
fn scale_edge(v: i32, extent: i32, cells: u16) -> u16 {
    let cells = i64::from(cells.max(1));
    let v = i64::from(v.clamp(0, extent));
    let extent = i64::from(extent);
    ((v * cells + extent - 1) / extent) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_corners_map_to_grid_corners() {
        let vp = Viewport::new(80, 24);
        assert_eq!(vp.to_cell(0, 0), (0, 0));
        assert_eq!(vp.to_cell(799, 599), (79, 23));
        assert_eq!(vp.to_cell(800, 600), (79, 23));
        assert_eq!(vp.to_cell(-40, -40), (0, 0));
    }

    #[test]
    fn cell_rect_contains_is_half_open() {
        let r = CellRect { col: 2, row: 3, width: 4, height: 2 };
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 4));
        assert!(!r.contains(6, 4));
        assert!(!r.contains(5, 5));
        assert!(!r.contains(1, 3));
    }

    #[test]
    fn span_never_empty() {
        let vp = Viewport::new(40, 15);
        let s = vp.span(&Rect::new(0, 0, 1, 1));
        assert_eq!((s.width, s.height), (1, 1));
    }

    #[test]
    fn span_of_full_canvas_is_full_grid() {
        let vp = Viewport::new(80, 24);
        let s = vp.span(&Rect::new(0, 0, 800, 600));
        assert_eq!(s, CellRect { col: 0, row: 0, width: 80, height: 24 });
    }
}
