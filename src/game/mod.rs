//! Core Connect Four game logic: board representation, player types, win
//! detection, and the turn state machine. Nothing here touches the terminal.

mod board;
mod player;
mod state;
mod win;

pub use board::{Board, BoardError, Cell, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, Move, MoveError, Status};
pub use win::{WinningLine, CONNECT};
