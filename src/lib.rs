//! # Connect Four TUI
//!
//! A two-player Connect Four game for the terminal, built with Ratatui.
//! Players alternate dropping pieces into columns until one lines up four
//! in a row or the grid fills.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: grid, players, win detection, session state machine
//! - [`ui`] — Terminal UI: event loop and game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
