use crate::puzzle::Cell;

// Window - fixed window size, with the word list panel along the right edge
//
pub const SCREEN_WIDTH: f32 = 1000.0;
pub const SCREEN_HEIGHT: f32 = 750.0;
pub const UI_WIDTH: f32 = 250.0;

// Grid - top left corner of the letter grid, measured from the window corner
//
pub const GRID_X_OFFSET: f32 = 50.0;
pub const GRID_Y_OFFSET: f32 = 50.0;
/// Side of the square the grid is drawn in. A 15x15 grid gets 40px cells.
pub const GRID_PIXELS: f32 = 600.0;

/// Pixel geometry of the letter grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
    pub size: usize,
}

impl BoardLayout {
    pub fn new(size: usize) -> Self {
        Self {
            origin_x: GRID_X_OFFSET,
            origin_y: GRID_Y_OFFSET,
            cell_size: GRID_PIXELS / size as f32,
            size,
        }
    }

    pub fn width(&self) -> f32 {
        self.cell_size * self.size as f32
    }

    /// Converts a mouse position to the grid cell under it.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<Cell> {
        let dx = x - self.origin_x;
        let dy = y - self.origin_y;
        if dx < 0.0 || dy < 0.0 || dx >= self.width() || dy >= self.width() {
            return None;
        }
        let row = ((dy / self.cell_size) as usize).min(self.size - 1);
        let col = ((dx / self.cell_size) as usize).min(self.size - 1);
        Some(Cell::new(row, col))
    }

    /// (x, y, w, h) of a cell.
    pub fn cell_rect(&self, cell: Cell) -> (f32, f32, f32, f32) {
        let x = self.origin_x + cell.col as f32 * self.cell_size;
        let y = self.origin_y + cell.row as f32 * self.cell_size;
        (x, y, self.cell_size, self.cell_size)
    }

    pub fn cell_center(&self, cell: Cell) -> (f32, f32) {
        let (x, y, w, h) = self.cell_rect(cell);
        (x + w / 2.0, y + h / 2.0)
    }
}
