//! Core Connect Four game logic: grid ownership, whole-grid win detection,
//! and the turn-taking session state machine.

mod grid;
mod player;
mod session;
mod win;

pub use grid::{Grid, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use player::{PlayerId, PlayerProfile};
pub use session::{GameSession, Placement, SessionSettings, Status};
pub use win::{has_won, WIN_LENGTH};
