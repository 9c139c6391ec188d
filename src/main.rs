use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four_tui::config::AppConfig;
use connect_four_tui::game::GameSession;
use connect_four_tui::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override Player One's color
    #[arg(long)]
    one: Option<String>,

    /// Override Player Two's color
    #[arg(long)]
    two: Option<String>,

    /// Override board width (columns)
    #[arg(long)]
    width: Option<usize>,

    /// Override board height (rows)
    #[arg(long)]
    height: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides, then re-check the merged result
    if let Some(one) = cli.one {
        config.players.one = one;
    }
    if let Some(two) = cli.two {
        config.players.two = two;
    }
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    config.validate().context("validating configuration")?;

    let session = GameSession::new(config.session_settings());

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal before reporting any error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running app")
}
