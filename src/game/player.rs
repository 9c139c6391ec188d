/// Stable identity for one of the two players in a session.
///
/// Identity never changes while a game is running; only the display
/// attributes in [`PlayerProfile`] can be swapped at restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Index into per-player arrays (profiles are stored as `[_; 2]`)
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// Display attributes for a player: a color name that doubles as the
/// player's label in announcements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    color: String,
}

impl PlayerProfile {
    pub fn new(color: impl Into<String>) -> Self {
        PlayerProfile {
            color: color.into(),
        }
    }

    /// The configured color name, as-is ("red", "blue", ...).
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Capitalized color name for messages ("Red wins!").
    pub fn label(&self) -> String {
        let mut chars = self.color.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    /// The two default profiles: "red" for Player One, "blue" for Player Two.
    pub fn defaults() -> [PlayerProfile; 2] {
        [PlayerProfile::new("red"), PlayerProfile::new("blue")]
    }
}
