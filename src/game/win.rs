use super::grid::Grid;
use super::player::PlayerId;

/// Number of consecutive same-player cells required to win.
pub const WIN_LENGTH: usize = 4;

// Directions a winning run can extend from its start cell:
// rightward, downward, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Whether `player` has four in a row anywhere on the grid.
///
/// Every cell is treated as a candidate run start and probed in each of the
/// four directions. Probes that leave the grid are non-matching by the
/// bounds check; they never panic.
pub fn has_won(grid: &Grid, player: PlayerId) -> bool {
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            for &(row_step, col_step) in &DIRECTIONS {
                if run_matches(grid, player, row, col, row_step, col_step) {
                    return true;
                }
            }
        }
    }
    false
}

/// True iff all `WIN_LENGTH` cells of the run starting at (row, col) are
/// in bounds and occupied by `player`.
fn run_matches(
    grid: &Grid,
    player: PlayerId,
    row: usize,
    col: usize,
    row_step: isize,
    col_step: isize,
) -> bool {
    (0..WIN_LENGTH).all(|step| {
        let r = row as isize + row_step * step as isize;
        let c = col as isize + col_step * step as isize;
        r >= 0
            && c >= 0
            && (r as usize) < grid.height()
            && (c as usize) < grid.width()
            && grid.get(r as usize, c as usize) == Some(player)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(cells: &[(usize, usize, PlayerId)]) -> Grid {
        let mut grid = Grid::default();
        for &(row, col, player) in cells {
            grid.place(row, col, player);
        }
        grid
    }

    #[test]
    fn test_empty_grid_has_no_win() {
        let grid = Grid::default();
        assert!(!has_won(&grid, PlayerId::One));
        assert!(!has_won(&grid, PlayerId::Two));
    }

    #[test]
    fn test_horizontal_win() {
        let grid = grid_with(&[
            (5, 0, PlayerId::One),
            (5, 1, PlayerId::One),
            (5, 2, PlayerId::One),
            (5, 3, PlayerId::One),
        ]);
        assert!(has_won(&grid, PlayerId::One));
        assert!(!has_won(&grid, PlayerId::Two));
    }

    #[test]
    fn test_vertical_win() {
        let grid = grid_with(&[
            (5, 3, PlayerId::Two),
            (4, 3, PlayerId::Two),
            (3, 3, PlayerId::Two),
            (2, 3, PlayerId::Two),
        ]);
        assert!(has_won(&grid, PlayerId::Two));
    }

    #[test]
    fn test_down_right_diagonal_win() {
        let grid = grid_with(&[
            (2, 0, PlayerId::One),
            (3, 1, PlayerId::One),
            (4, 2, PlayerId::One),
            (5, 3, PlayerId::One),
        ]);
        assert!(has_won(&grid, PlayerId::One));
    }

    #[test]
    fn test_down_left_diagonal_win() {
        let grid = grid_with(&[
            (2, 6, PlayerId::One),
            (3, 5, PlayerId::One),
            (4, 4, PlayerId::One),
            (5, 3, PlayerId::One),
        ]);
        assert!(has_won(&grid, PlayerId::One));
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let grid = grid_with(&[
            (5, 0, PlayerId::One),
            (5, 1, PlayerId::One),
            (5, 2, PlayerId::One),
        ]);
        assert!(!has_won(&grid, PlayerId::One));
    }

    #[test]
    fn test_mixed_run_is_not_a_win() {
        let grid = grid_with(&[
            (5, 0, PlayerId::One),
            (5, 1, PlayerId::One),
            (5, 2, PlayerId::Two),
            (5, 3, PlayerId::One),
        ]);
        assert!(!has_won(&grid, PlayerId::One));
        assert!(!has_won(&grid, PlayerId::Two));
    }

    #[test]
    fn test_win_touching_corners() {
        // Run ends in the bottom-right corner; probes past every edge stay safe.
        let grid = grid_with(&[
            (5, 3, PlayerId::Two),
            (5, 4, PlayerId::Two),
            (5, 5, PlayerId::Two),
            (5, 6, PlayerId::Two),
        ]);
        assert!(has_won(&grid, PlayerId::Two));
    }

    #[test]
    fn test_wraparound_does_not_count() {
        // Three at the right edge plus one at the left edge of the same row.
        let grid = grid_with(&[
            (5, 4, PlayerId::One),
            (5, 5, PlayerId::One),
            (5, 6, PlayerId::One),
            (5, 0, PlayerId::One),
        ]);
        assert!(!has_won(&grid, PlayerId::One));
    }
}
