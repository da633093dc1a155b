use crate::config::UiConfig;
use crate::game::{Cell, GameOutcome, GameState, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::layout::BoardGeometry;

const PIECE: &str = "\u{25cf}";
const HOLE: &str = ".";

/// Draw the whole game screen and return where the board ended up
pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    hover_column: usize,
    ui: &UiConfig,
) -> BoardGeometry {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Header
            Constraint::Min(ROWS as u16 + 3),        // Hover row + board
            Constraint::Length(3),                   // Banner
            Constraint::Length(3),                   // Controls
        ])
        .split(frame.area());

    let geometry = BoardGeometry::new(chunks[1], ui.cell_width);

    render_header(frame, game_state, ui, chunks[0]);
    render_hover(frame, game_state, hover_column, ui, &geometry);
    render_board(frame, game_state, ui, &geometry);
    render_banner(frame, game_state, ui, chunks[2]);
    render_controls(frame, chunks[3]);

    geometry
}

pub fn player_color(player: Player, ui: &UiConfig) -> Color {
    match player {
        Player::One => ui.player_one_color,
        Player::Two => ui.player_two_color,
    }
}

/// Result line shown once the game is over
pub fn banner_text(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Winner(player) => format!("{} wins!!", player.name()),
        GameOutcome::Draw => "It's a draw!".to_string(),
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, ui: &UiConfig, area: Rect) {
    let (status, color) = match game_state.outcome() {
        None => {
            let player = game_state.current_player();
            (
                format!("Current Player: {}", player.name()),
                player_color(player, ui),
            )
        }
        Some(GameOutcome::Winner(player)) => ("Game Over".to_string(), player_color(player, ui)),
        Some(GameOutcome::Draw) => ("Game Over".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_hover(
    frame: &mut Frame,
    game_state: &GameState,
    hover_column: usize,
    ui: &UiConfig,
    geometry: &BoardGeometry,
) {
    if game_state.is_terminal() {
        return;
    }

    let style = Style::default().fg(player_color(game_state.current_player(), ui));
    let spans: Vec<Span> = (0..COLS)
        .map(|col| {
            let glyph = if col == hover_column { PIECE } else { " " };
            Span::styled(pad_cell(glyph, ui.cell_width), style)
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), geometry.hover);
}

fn render_board(frame: &mut Frame, game_state: &GameState, ui: &UiConfig, geometry: &BoardGeometry) {
    let board = game_state.board();
    let winning_line = match game_state.outcome() {
        Some(GameOutcome::Winner(player)) => board.winning_line(player),
        _ => None,
    };

    let mut lines = Vec::with_capacity(ROWS);

    // Top row first
    for row in (0..ROWS).rev() {
        let spans: Vec<Span> = (0..COLS)
            .map(|col| {
                let (glyph, mut style) = match board.get(row, col) {
                    Cell::Empty => (HOLE, Style::default().fg(Color::DarkGray)),
                    Cell::PlayerOne => (PIECE, Style::default().fg(ui.player_one_color)),
                    Cell::PlayerTwo => (PIECE, Style::default().fg(ui.player_two_color)),
                };
                if winning_line.is_some_and(|line| line.contains(&(row, col))) {
                    style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                }
                Span::styled(pad_cell(glyph, ui.cell_width), style)
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let board_widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    frame.render_widget(board_widget, geometry.grid);
}

fn render_banner(frame: &mut Frame, game_state: &GameState, ui: &UiConfig, area: Rect) {
    let (text, color) = match game_state.outcome() {
        Some(outcome @ GameOutcome::Winner(player)) => (banner_text(outcome), player_color(player, ui)),
        Some(outcome @ GameOutcome::Draw) => (banner_text(outcome), Color::White),
        None => (String::new(), Color::White),
    };

    let banner = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(banner, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("Mouse: Aim + Click  |  ←/→: Move  |  Enter: Drop  |  1-7: Drop  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

/// Center a one-column glyph in a cell `width` columns wide
fn pad_cell(glyph: &str, width: u16) -> String {
    let width = width as usize;
    let left = width.saturating_sub(1) / 2;
    let right = width.saturating_sub(1 + left);
    format!("{}{glyph}{}", " ".repeat(left), " ".repeat(right))
}
