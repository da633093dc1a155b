//! # Connect Four
//!
//! Two-player Connect Four in the terminal. Pieces are aimed and dropped with
//! the mouse (or the keyboard), and the game ends on four in a row or a full
//! board. The UI is built with Ratatui on top of Crossterm.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection, turn state machine
//! - [`ui`] — Terminal UI: layout, game view, input handling
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — File-backed `tracing` setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
