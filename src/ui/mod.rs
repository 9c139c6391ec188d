//! Terminal UI: interactive game view for playing Connect Four.

mod app;
mod game_view;

pub use app::App;
