use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, info};

use super::scheduler::TickDriver;
use crate::game::{GameConfig, GameEngine, GameState, KeyOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    driver: TickDriver,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let driver = TickDriver::new(config.tick_interval());
        let engine = GameEngine::new(config);
        let state = engine.initial_state();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            driver,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        info!(
            tick_ms = self.driver.period().as_millis() as u64,
            axis_cells = self.state.grid.axis_cells(),
            "entering game loop"
        );

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick; pends while the driver is stopped
                _ = self.driver.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!(
                    games_played = self.metrics.games_played,
                    high_score = self.metrics.high_score,
                    "quitting"
                );
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Game(game_key) => {
                    if self.engine.on_key(&mut self.state, game_key) == KeyOutcome::Started {
                        self.driver.start();
                        self.metrics.on_game_start();
                    }
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) {
        let outcome = self.engine.tick(&mut self.state);

        if outcome.ate_food {
            self.metrics.on_food();
        }

        if outcome.game_over() {
            self.driver.stop();
            self.metrics.on_game_over(self.state.score);
            debug!(games_played = self.metrics.games_played, "tick driver stopped");
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Direction, Phase};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn seeded_mode() -> HumanMode {
        HumanMode::new(GameConfig {
            seed: Some(21),
            ..Default::default()
        })
    }

    #[test]
    fn test_game_initialization() {
        let mode = seeded_mode();
        assert_eq!(mode.state.phase, Phase::StartScreen);
        assert!(!mode.driver.is_running());
        assert_eq!(mode.driver.period(), Duration::from_millis(200));
    }

    #[tokio::test]
    async fn test_enter_starts_game_and_driver() {
        let mut mode = seeded_mode();

        mode.handle_event(key(KeyCode::Enter));

        assert_eq!(mode.state.phase, Phase::Running);
        assert!(mode.driver.is_running());
    }

    #[tokio::test]
    async fn test_game_over_stops_driver() {
        let mut mode = seeded_mode();
        mode.handle_event(key(KeyCode::Enter));
        mode.state.food = Some(Cell::new(11, 11, 11));

        // Heading north from the origin leaves the grid at once
        mode.handle_event(key(KeyCode::Char('w')));
        mode.update_game();
        assert_eq!(mode.state.snake.direction, Direction::North);
        assert_eq!(mode.state.phase, Phase::GameOver);
        assert!(!mode.driver.is_running());
        assert_eq!(mode.metrics.games_played, 1);

        let frozen = mode.state.clone();
        mode.update_game();
        assert_eq!(mode.state, frozen);

        mode.handle_event(key(KeyCode::Enter));
        assert_eq!(mode.state.phase, Phase::Running);
        assert!(mode.driver.is_running());
    }

    #[test]
    fn test_key_release_ignored() {
        let mut mode = seeded_mode();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });

        mode.handle_event(release);
        assert_eq!(mode.state.phase, Phase::StartScreen);
    }

    #[test]
    fn test_quit_key() {
        let mut mode = seeded_mode();
        mode.handle_event(key(KeyCode::Char('q')));
        assert!(mode.should_quit);
    }
}
