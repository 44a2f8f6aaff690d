//! Enumeration of every four-in-a-row window on a `rows × cols` grid.
//!
//! Loop bounds are sized exactly (`rows - 3`, `cols - 3`, diagonals going
//! down start at row 3) so no generated coordinate ever falls outside the
//! grid. Boards narrower or shorter than four cells simply have no windows
//! in that direction.

/// Number of cells in a winning line.
pub const WINDOW_LEN: usize = 4;

/// Four `(row, col)` coordinates forming one window. Row 0 is the bottom.
pub type Window = [(usize, usize); WINDOW_LEN];

/// All windows on the grid: horizontal, vertical, diagonal up, diagonal down.
pub fn windows(rows: usize, cols: usize) -> impl Iterator<Item = Window> {
    let row_starts = rows.saturating_sub(WINDOW_LEN - 1);
    let col_starts = cols.saturating_sub(WINDOW_LEN - 1);

    let horizontal = (0..rows)
        .flat_map(move |r| (0..col_starts).map(move |c| line(r, c, |r, c, i| (r, c + i))));
    let vertical = (0..row_starts)
        .flat_map(move |r| (0..cols).map(move |c| line(r, c, |r, c, i| (r + i, c))));
    let diagonal_up = (0..row_starts)
        .flat_map(move |r| (0..col_starts).map(move |c| line(r, c, |r, c, i| (r + i, c + i))));
    let diagonal_down = (WINDOW_LEN - 1..rows)
        .flat_map(move |r| (0..col_starts).map(move |c| line(r, c, |r, c, i| (r - i, c + i))));

    horizontal
        .chain(vertical)
        .chain(diagonal_up)
        .chain(diagonal_down)
}

fn line(row: usize, col: usize, step: fn(usize, usize, usize) -> (usize, usize)) -> Window {
    [
        step(row, col, 0),
        step(row, col, 1),
        step(row, col, 2),
        step(row, col, 3),
    ]
}
