//! Game mode selection.

/// Game mode - who plays O?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Human vs the minimax computer opponent.
    #[default]
    VsComputer,
    /// Two humans sharing the keyboard.
    TwoPlayers,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::VsComputer => "Vs Computer",
            GameMode::TwoPlayers => "2 Players",
        }
    }

    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            GameMode::VsComputer => GameMode::TwoPlayers,
            GameMode::TwoPlayers => GameMode::VsComputer,
        }
    }
}
