use super::board::{BoardError, COLS};
use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Turn controller states. `Won` and `Draw` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    AwaitingMove(Player),
    Won(Player),
    Draw,
}

/// An accepted move and where the piece landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub player: Player,
    pub row: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::InvalidColumn(col) => MoveError::InvalidColumn(col),
            BoardError::ColumnFull(col) => MoveError::ColumnFull(col),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    status: Status,
    last_move: Option<Move>,
    move_count: usize,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            status: Status::AwaitingMove(Player::One), // Player 1 starts
            last_move: None,
            move_count: 0,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Player to move, or the player who made the final move once the game is over
    pub fn current_player(&self) -> Player {
        match self.status {
            Status::AwaitingMove(player) | Status::Won(player) => player,
            Status::Draw => self
                .last_move
                .map(|mv| mv.player)
                .unwrap_or(Player::One),
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.status {
            Status::AwaitingMove(_) => None,
            Status::Won(player) => Some(GameOutcome::Winner(player)),
            Status::Draw => Some(GameOutcome::Draw),
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| self.board.is_valid_column(col))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move mutably. A rejected move leaves the state untouched.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<Move, MoveError> {
        let player = match self.status {
            Status::AwaitingMove(player) => player,
            Status::Won(_) | Status::Draw => return Err(MoveError::GameOver),
        };

        if !self.board.is_valid_column(column) {
            return Err(if column >= COLS {
                MoveError::InvalidColumn(column)
            } else {
                MoveError::ColumnFull(column)
            });
        }

        let row = self.board.next_open_row(column)?;
        self.board.place(row, column, player);

        self.status = if self.board.has_win(player) {
            Status::Won(player)
        } else if self.board.is_full() {
            Status::Draw
        } else {
            Status::AwaitingMove(player.other())
        };

        let mv = Move { player, row, column };
        self.last_move = Some(mv);
        self.move_count += 1;
        Ok(mv)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
