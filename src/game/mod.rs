// Game module - game state, the per-tick update and the tick clock
//
// This module contains:
// - state.rs: GameState, the physics/collision step and input application
// - ticker.rs: FixedTicker, the fixed-period tick source
// - types.rs: GamePhase and TickOutcome

pub mod state;
pub mod ticker;
pub mod types;

pub use state::GameState;
pub use ticker::FixedTicker;
pub use types::*;
