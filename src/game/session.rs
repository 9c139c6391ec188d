use super::grid::{Grid, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use super::player::{PlayerId, PlayerProfile};
use super::win;

/// Where a session stands after any number of moves.
///
/// `Won` and `Tied` are terminal: once set they stay until a restart, and
/// further move submissions are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won(PlayerId),
    Tied,
}

/// A piece placed by an accepted move; what the presentation layer needs to
/// render the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: PlayerId,
}

/// Everything needed to start (or restart) a session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub width: usize,
    pub height: usize,
    pub profiles: [PlayerProfile; 2],
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            profiles: PlayerProfile::defaults(),
        }
    }
}

/// One game of Connect Four: the grid, the two players, whose turn it is,
/// and whether the game has ended.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    profiles: [PlayerProfile; 2],
    active: PlayerId,
    status: Status,
}

impl GameSession {
    /// Fresh session: empty grid, Player One to move.
    pub fn new(settings: SessionSettings) -> Self {
        GameSession {
            grid: Grid::new(settings.width, settings.height),
            profiles: settings.profiles,
            active: PlayerId::One,
            status: Status::InProgress,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    pub fn profile(&self, id: PlayerId) -> &PlayerProfile {
        &self.profiles[id.index()]
    }

    pub fn is_over(&self) -> bool {
        !matches!(self.status, Status::InProgress)
    }

    /// Process one column drop for the active player.
    ///
    /// Full columns, out-of-range columns, and submissions after the game
    /// has ended are ignored inputs, not errors: the session is left
    /// untouched and `None` comes back. An accepted move reports where the
    /// piece landed.
    ///
    /// A move that completes four in a row wins even if it also fills the
    /// grid; the tie check runs only when no win was found.
    pub fn submit_move(&mut self, column: usize) -> Option<Placement> {
        if self.is_over() {
            return None;
        }
        let row = self.grid.lowest_open_row(column)?;

        let player = self.active;
        self.grid.place(row, column, player);

        if win::has_won(&self.grid, player) {
            self.status = Status::Won(player);
        } else if self.grid.is_full() {
            self.status = Status::Tied;
        } else {
            self.active = player.other();
        }

        Some(Placement {
            row,
            column,
            player,
        })
    }

    /// Discard the current game: empty grid, `InProgress`, Player One to
    /// move. `profiles` swaps in new colors; `None` keeps the current ones.
    pub fn restart(&mut self, profiles: Option<[PlayerProfile; 2]>) {
        self.grid = Grid::new(self.grid.width(), self.grid.height());
        self.active = PlayerId::One;
        self.status = Status::InProgress;
        if let Some(profiles) = profiles {
            self.profiles = profiles;
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}
