use ratatui::layout::Rect;

use crate::game::{COLS, ROWS};

/// Where the board sits on screen. Rendering and pointer mapping both go
/// through this so a click always lands in the column drawn under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    /// Row showing the current player's piece above the hovered column
    pub hover: Rect,
    /// Bordered grid
    pub grid: Rect,
    pub cell_width: u16,
}

impl BoardGeometry {
    /// Horizontally center the board at the top of `area`
    pub fn new(area: Rect, cell_width: u16) -> Self {
        let width = (COLS as u16 * cell_width + 2).min(area.width);
        let x = area.x + (area.width - width) / 2;

        let hover = Rect::new(x + 1, area.y, width.saturating_sub(2), 1.min(area.height));
        let grid_y = area.y + hover.height;
        let grid_height = (ROWS as u16 + 2).min(area.bottom().saturating_sub(grid_y));
        let grid = Rect::new(x, grid_y, width, grid_height);

        BoardGeometry {
            hover,
            grid,
            cell_width,
        }
    }

    /// Left edge of the first cell, inside the border
    pub fn inner_x(&self) -> u16 {
        self.grid.x + 1
    }

    /// Map a terminal x position to a board column
    pub fn column_at(&self, x: u16) -> Option<usize> {
        let offset = x.checked_sub(self.inner_x())?;
        let col = (offset / self.cell_width) as usize;
        (col < COLS).then_some(col)
    }

    /// Leftmost terminal x of a column
    pub fn column_x(&self, col: usize) -> u16 {
        self.inner_x() + col as u16 * self.cell_width
    }

    /// Terminal y of a board row, row 0 being the bottom
    pub fn row_y(&self, row: usize) -> u16 {
        self.grid.y + ROWS as u16 - row as u16
    }
}
