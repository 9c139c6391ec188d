use super::player::PlayerId;

/// Classic Connect Four dimensions, used when no configuration is given.
pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;

/// The board: `height` rows by `width` columns of cells, each either empty
/// or occupied by one player. Row 0 is the top, row `height - 1` the bottom.
///
/// An occupied cell is never cleared; the only way back to empty is
/// allocating a fresh grid on restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<PlayerId>>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Occupant of the cell at (row, col), if any
    pub fn get(&self, row: usize, col: usize) -> Option<PlayerId> {
        debug_assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col]
    }

    /// Lowest empty row in a column, scanning from the bottom row upward.
    /// Returns `None` when the column is full or out of range.
    pub fn lowest_open_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height).rev().find(|&row| self.get(row, col).is_none())
    }

    /// Occupy the cell at (row, col). The cell must be empty and in bounds.
    pub fn place(&mut self, row: usize, col: usize, player: PlayerId) {
        debug_assert!(self.get(row, col).is_none(), "cell already occupied");
        self.cells[row * self.width + col] = Some(player);
    }

    /// Check if a column has no open rows left
    pub fn is_column_full(&self, col: usize) -> bool {
        self.lowest_open_row(col).is_none()
    }

    /// Check if the grid is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::default();
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                assert_eq!(grid.get(row, col), None);
            }
        }
    }

    #[test]
    fn test_lowest_open_row_starts_at_bottom() {
        let mut grid = Grid::default();

        let row = grid.lowest_open_row(3).unwrap();
        assert_eq!(row, 5);
        grid.place(row, 3, PlayerId::One);
        assert_eq!(grid.get(5, 3), Some(PlayerId::One));

        // Next piece in the same column lands one row higher
        let row = grid.lowest_open_row(3).unwrap();
        assert_eq!(row, 4);
        grid.place(row, 3, PlayerId::Two);
        assert_eq!(grid.get(4, 3), Some(PlayerId::Two));
    }

    #[test]
    fn test_place_changes_exactly_one_cell() {
        let mut grid = Grid::default();
        grid.place(5, 2, PlayerId::One);

        for row in 0..grid.height() {
            for col in 0..grid.width() {
                if (row, col) == (5, 2) {
                    assert_eq!(grid.get(row, col), Some(PlayerId::One));
                } else {
                    assert_eq!(grid.get(row, col), None);
                }
            }
        }
    }

    #[test]
    fn test_column_full() {
        let mut grid = Grid::default();

        for _ in 0..grid.height() {
            let row = grid.lowest_open_row(0).unwrap();
            grid.place(row, 0, PlayerId::One);
        }

        assert!(grid.is_column_full(0));
        assert_eq!(grid.lowest_open_row(0), None);
    }

    #[test]
    fn test_out_of_range_column_has_no_open_row() {
        let grid = Grid::default();
        assert_eq!(grid.lowest_open_row(7), None);
        assert!(grid.is_column_full(7));
    }

    #[test]
    fn test_full_grid() {
        let mut grid = Grid::default();
        for col in 0..grid.width() {
            for _ in 0..grid.height() {
                let row = grid.lowest_open_row(col).unwrap();
                grid.place(row, col, PlayerId::One);
            }
        }
        assert!(grid.is_full());
    }

    #[test]
    fn test_not_full_with_one_open_cell() {
        let mut grid = Grid::new(2, 2);
        grid.place(1, 0, PlayerId::One);
        grid.place(1, 1, PlayerId::Two);
        grid.place(0, 0, PlayerId::One);
        assert!(!grid.is_full());
    }
}
