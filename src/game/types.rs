// Shared enums used by the game loop

/// Game phase: `GameOver` is terminal, only a restart gets back to `Running`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    GameOver,
}

/// What a single tick did, reported back to the loop for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game is over, nothing moved
    Frozen,
    /// Shapes fell, no intercept
    Advanced,
    /// The target shape was caught and a new level started
    LevelUp { level: u32 },
    /// A wrong shape was hit
    GameOver { level: u32 },
}
