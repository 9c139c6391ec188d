use crate::game::{GameSession, Status};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    session: GameSession,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(session: GameSession) -> Self {
        let selected_column = session.grid().width() / 2;
        App {
            session,
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.session.grid().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.session.restart(None);
                self.selected_column = self.session.grid().width() / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop a piece in the selected column
    fn drop_piece(&mut self) {
        if self.session.is_over() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.session.submit_move(self.selected_column) {
            Some(_) => match self.session.status() {
                Status::Won(winner) => {
                    self.message = Some(format!("{} wins!", self.session.profile(winner).label()));
                }
                Status::Tied => {
                    self.message = Some("It's a tie!".to_string());
                }
                Status::InProgress => {}
            },
            // Ignored input: the column has no room
            None => {
                self.message = Some("Column is full!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.selected_column, &self.message);
    }
}
