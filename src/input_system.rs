use crate::game::GamePhase;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

/// Actions the player can perform in the game
///
/// Raw SDL2 events are translated into these before they reach the game
/// state, so the state never sees a keycode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,

    /// Window closed
    Quit,
}

/// Input context determines which actions are available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Normal play: arrow keys move the player
    Playing,
    /// Game over screen: only closing the window does anything
    GameOver,
}

/// InputSystem turns SDL2 events into GameActions
///
/// # Architecture
///
/// 1. Update the InputContext from the current game phase
/// 2. Poll SDL2 events
/// 3. Translate the ones that mean something in this context
/// 4. Hand the actions back to the game loop
///
/// Key repeat events are kept: holding an arrow key moves the player one
/// step per repeat, like pressing it repeatedly.
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Playing,
        }
    }

    /// Call before `poll_events` so game-over input is filtered out.
    pub fn update_context(&mut self, phase: GamePhase) {
        self.context = match phase {
            GamePhase::Running => InputContext::Playing,
            GamePhase::GameOver => InputContext::GameOver,
        };
    }

    /// Drains all pending SDL2 events and returns the resulting actions
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.translate(&event))
            .collect()
    }

    /// Translates a single event, `None` if it means nothing right now
    pub fn translate(&self, event: &Event) -> Option<GameAction> {
        match event {
            Event::Quit { .. } => Some(GameAction::Quit),
            Event::KeyDown {
                keycode: Some(key), ..
            } => self.action_for_key(*key),
            _ => None,
        }
    }

    /// Maps a pressed key to an action in the current context
    pub fn action_for_key(&self, key: Keycode) -> Option<GameAction> {
        match self.context {
            InputContext::Playing => match key {
                Keycode::Left => Some(GameAction::MoveLeft),
                Keycode::Right => Some(GameAction::MoveRight),
                _ => None,
            },
            InputContext::GameOver => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}
