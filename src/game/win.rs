//! Four-in-a-row detection by exhaustive window scan.

use super::board::{Board, COLS, ROWS};
use super::Player;

/// Pieces in a row needed to win
pub const CONNECT: usize = 4;

/// Board coordinates `(row, col)` of a winning window, in scan order
pub type WinningLine = [(usize, usize); CONNECT];

/// Row and column steps: horizontal, vertical, rising (↗) and falling (↘)
/// diagonal, with row 0 at the bottom
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

impl Board {
    /// Check if `player` has four in a row anywhere on the board
    pub fn has_win(&self, player: Player) -> bool {
        self.winning_line(player).is_some()
    }

    /// Find the first window of four cells all owned by `player`
    pub fn winning_line(&self, player: Player) -> Option<WinningLine> {
        let target = player.to_cell();

        DIRECTIONS.iter().find_map(|&(d_row, d_col)| {
            (0..ROWS)
                .flat_map(|row| (0..COLS).map(move |col| (row, col)))
                .filter_map(|(row, col)| window(row, col, d_row, d_col))
                .find(|line| line.iter().all(|&(r, c)| self.get(r, c) == target))
        })
    }
}

/// The window starting at `(row, col)` along a direction, if it fits the grid
fn window(row: usize, col: usize, d_row: isize, d_col: isize) -> Option<WinningLine> {
    let mut line = [(row, col); CONNECT];
    for (step, cell) in line.iter_mut().enumerate().skip(1) {
        let step = step as isize;
        let r = row.checked_add_signed(d_row * step).filter(|&r| r < ROWS)?;
        let c = col.checked_add_signed(d_col * step).filter(|&c| c < COLS)?;
        *cell = (r, c);
    }
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Independent check: longest run through every cell along each axis.
    fn brute_force_win(board: &Board, player: Player) -> bool {
        let target = player.to_cell();
        let at = |r: isize, c: isize| {
            r >= 0
                && c >= 0
                && (r as usize) < ROWS
                && (c as usize) < COLS
                && board.get(r as usize, c as usize) == target
        };
        for row in 0..ROWS as isize {
            for col in 0..COLS as isize {
                for (dr, dc) in DIRECTIONS {
                    let run = (0..CONNECT as isize)
                        .take_while(|&k| at(row + dr * k, col + dc * k))
                        .count();
                    if run == CONNECT {
                        return true;
                    }
                }
            }
        }
        false
    }

    #[test]
    fn test_empty_board_has_no_win() {
        let board = Board::new();
        assert!(!board.has_win(Player::One));
        assert!(!board.has_win(Player::Two));
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 0..4 {
            assert_eq!(board.drop_piece(col, Player::One).unwrap(), 0);
        }
        assert!(board.has_win(Player::One));
        assert!(!board.has_win(Player::Two));
        assert_eq!(
            board.winning_line(Player::One),
            Some([(0, 0), (0, 1), (0, 2), (0, 3)])
        );
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(3, Player::Two).unwrap();
        }
        assert!(board.has_win(Player::Two));
        assert_eq!(
            board.winning_line(Player::Two),
            Some([(0, 3), (1, 3), (2, 3), (3, 3)])
        );
    }

    #[test]
    fn test_rising_diagonal_win() {
        let mut board = Board::new();
        board.drop_piece(0, Player::One).unwrap();

        board.drop_piece(1, Player::Two).unwrap();
        board.drop_piece(1, Player::One).unwrap();

        board.drop_piece(2, Player::Two).unwrap();
        board.drop_piece(2, Player::Two).unwrap();
        board.drop_piece(2, Player::One).unwrap();

        board.drop_piece(3, Player::Two).unwrap();
        board.drop_piece(3, Player::Two).unwrap();
        board.drop_piece(3, Player::Two).unwrap();
        assert!(!board.has_win(Player::One));
        board.drop_piece(3, Player::One).unwrap();

        assert!(board.has_win(Player::One));
        assert_eq!(
            board.winning_line(Player::One),
            Some([(0, 0), (1, 1), (2, 2), (3, 3)])
        );
    }

    #[test]
    fn test_falling_diagonal_win() {
        let mut board = Board::new();
        board.drop_piece(6, Player::Two).unwrap();

        board.drop_piece(5, Player::One).unwrap();
        board.drop_piece(5, Player::Two).unwrap();

        board.drop_piece(4, Player::One).unwrap();
        board.drop_piece(4, Player::One).unwrap();
        board.drop_piece(4, Player::Two).unwrap();

        board.drop_piece(3, Player::One).unwrap();
        board.drop_piece(3, Player::One).unwrap();
        board.drop_piece(3, Player::One).unwrap();
        board.drop_piece(3, Player::Two).unwrap();

        assert!(board.has_win(Player::Two));
        assert!(!board.has_win(Player::One));
        assert_eq!(
            board.winning_line(Player::Two),
            Some([(3, 3), (2, 4), (1, 5), (0, 6)])
        );
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Player::One).unwrap();
        }
        for _ in 0..3 {
            board.drop_piece(6, Player::One).unwrap();
        }
        assert!(!board.has_win(Player::One));
    }

    #[test]
    fn test_broken_run_is_not_a_win() {
        let mut board = Board::new();
        for col in [0, 1, 3, 4] {
            board.drop_piece(col, Player::One).unwrap();
        }
        board.drop_piece(2, Player::Two).unwrap();
        assert!(!board.has_win(Player::One));
    }

    #[test]
    fn test_windows_stay_in_bounds() {
        let horizontal = (0..ROWS)
            .flat_map(|r| (0..COLS).map(move |c| (r, c)))
            .filter(|&(r, c)| window(r, c, 0, 1).is_some())
            .count();
        assert_eq!(horizontal, ROWS * (COLS - 3));
        assert!(window(0, 0, -1, 1).is_none());
        assert!(window(ROWS - 1, COLS - 1, 1, 0).is_none());
        assert_eq!(window(5, 0, -1, 1), Some([(5, 0), (4, 1), (3, 2), (2, 3)]));
    }

    #[test]
    fn test_matches_brute_force_and_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..500 {
            let mut board = Board::new();
            let moves = rng.random_range(0..ROWS * COLS);
            for _ in 0..moves {
                let col = rng.random_range(0..COLS);
                let player = if rng.random_bool(0.5) { Player::One } else { Player::Two };
                let _ = board.drop_piece(col, player);
            }
            for player in [Player::One, Player::Two] {
                let first = board.has_win(player);
                assert_eq!(first, brute_force_win(&board, player), "board:\n{board}");
                assert_eq!(first, board.has_win(player));
                if let Some(line) = board.winning_line(player) {
                    assert!(line.iter().all(|&(r, c)| board.get(r, c) == player.to_cell()));
                    assert!(line.iter().all(|&(r, c)| board.get(r, c) != Cell::Empty));
                }
            }
        }
    }
}
