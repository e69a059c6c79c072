use crate::puzzle::Cell;
use crate::Direction;

/// Gets all cells on the straight or diagonal line from `start` to `end`, both included.
///
/// Returns an empty list when the two cells do not share a row, a column or a
/// 45 degree diagonal. The same cell twice gives a one-cell line.
pub fn cells_in_line(start: Cell, end: Cell) -> Vec<Cell> {
    let drow = end.row as isize - start.row as isize;
    let dcol = end.col as isize - start.col as isize;

    if drow == 0 && dcol == 0 {
        return vec![start];
    }
    let (row_step, col_step) = match Direction::from_delta(drow, dcol) {
        Some(dir) => dir.incrementors(),
        None => return Vec::new(),
    };

    let steps = drow.abs().max(dcol.abs());
    (0..=steps)
        .map(|i| {
            Cell::new(
                (start.row as isize + i * row_step) as usize,
                (start.col as isize + i * col_step) as usize,
            )
        })
        .collect()
}
