use super::{
    action::Key,
    engine::GameEngine,
    state::{GameState, Phase},
};
use tracing::debug;

/// Effect of a key on the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A new pending direction was stored
    Turned,
    /// A fresh game was started; the tick driver should (re)start
    Started,
    /// The key had no effect in the current phase
    Ignored,
}

impl GameEngine {
    /// Apply a logical key to the game state, depending on the phase
    pub fn on_key(&mut self, state: &mut GameState, key: Key) -> KeyOutcome {
        match state.phase {
            Phase::Running => match key.direction() {
                Some(direction) if state.snake.direction.is_opposite(direction) => {
                    debug!(?direction, "reverse turn ignored");
                    KeyOutcome::Ignored
                }
                Some(direction) => {
                    state.pending_direction = Some(direction);
                    KeyOutcome::Turned
                }
                None => KeyOutcome::Ignored,
            },
            Phase::StartScreen | Phase::GameOver => {
                if key == Key::Confirm {
                    self.start_game(state);
                    KeyOutcome::Started
                } else {
                    KeyOutcome::Ignored
                }
            }
        }
    }
}
