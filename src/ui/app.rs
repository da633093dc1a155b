use crate::config::UiConfig;
use crate::game::{GameOutcome, GameState, COLS};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;
use tracing::{debug, info};

use super::game_view;
use super::layout::BoardGeometry;

pub struct App {
    game_state: GameState,
    hover_column: usize,
    should_quit: bool,
    geometry: Option<BoardGeometry>,
    ui: UiConfig,
}

impl App {
    pub fn new(ui: UiConfig) -> Self {
        App {
            game_state: GameState::initial(),
            hover_column: ui.start_column.min(COLS - 1),
            should_quit: false,
            geometry: None,
            ui,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn hover_column(&self) -> usize {
        self.hover_column
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Board placement from the last frame, if one has been drawn
    pub fn geometry(&self) -> Option<BoardGeometry> {
        self.geometry
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!("new game, {} to move", self.game_state.current_player().name());

        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                info!("quit requested");
                break;
            }

            if self.game_state.is_terminal() {
                // Leave the banner up before exiting
                std::thread::sleep(self.ui.game_over_delay());
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Wait up to one poll interval for the next event
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.ui.poll_interval())? {
            self.handle_event(event::read()?);
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.hover_column = self.hover_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.hover_column < COLS - 1 {
                    self.hover_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.hover_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < COLS {
                    self.hover_column = col;
                }
                self.drop_piece(col);
            }
            _ => {}
        }
    }

    /// Pointer moves aim, left clicks drop
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(col) = self.geometry.and_then(|g| g.column_at(mouse.column)) else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                self.hover_column = col;
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.hover_column = col;
                self.drop_piece(col);
            }
            _ => {}
        }
    }

    /// Drop a piece in a column. Rejected moves change nothing.
    fn drop_piece(&mut self, col: usize) {
        match self.game_state.apply_move_mut(col) {
            Ok(mv) => {
                info!(
                    player = mv.player.name(),
                    column = mv.column,
                    row = mv.row,
                    "piece dropped"
                );
                debug!("board after move {}:\n{}", self.game_state.move_count(), self.game_state.board());

                match self.game_state.outcome() {
                    Some(GameOutcome::Winner(player)) => {
                        info!(moves = self.game_state.move_count(), "{} wins", player.name());
                    }
                    Some(GameOutcome::Draw) => {
                        info!(moves = self.game_state.move_count(), "draw");
                    }
                    None => {}
                }
            }
            Err(err) => {
                debug!(column = col, %err, "move ignored");
            }
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let geometry = game_view::render(frame, &self.game_state, self.hover_column, &self.ui);
        self.geometry = Some(geometry);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}
