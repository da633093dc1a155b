//! Terminal UI: board layout, rendering from game state snapshots, and
//! mouse/keyboard input mapped to column drops.

mod app;
pub mod game_view;
pub mod layout;

pub use app::App;
pub use layout::BoardGeometry;
