use super::{
    action::Direction,
    config::GameConfig,
    food::FoodSpawner,
    grid::{Cell, Grid},
    state::{CollisionType, GameState, Phase, Snake},
};
use tracing::{debug, info};

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Whether the tick was applied at all (false outside `Phase::Running`)
    pub applied: bool,
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// Whether food could not be placed because the snake fills the grid
    pub stalled: bool,
}

impl TickOutcome {
    /// Whether this tick ended the game
    pub fn game_over(&self) -> bool {
        self.collision_type.is_some()
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    spawner: FoodSpawner,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let spawner = FoodSpawner::new(config.seed);
        Self { config, spawner }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.config.axis_cells())
    }

    /// State shown before the first game: start screen, nothing placed yet
    pub fn initial_state(&self) -> GameState {
        let mut state = GameState::new(self.fresh_snake(), None, self.grid());
        state.phase = Phase::StartScreen;
        state
    }

    /// Reset everything and enter `Phase::Running`, whatever the prior phase
    pub fn start_game(&mut self, state: &mut GameState) {
        let snake = self.fresh_snake();
        let grid = self.grid();
        let food = self.spawner.respawn(&snake, &grid);

        *state = GameState::new(snake, food, grid);
        info!(axis_cells = grid.axis_cells(), ?food, "game started");
    }

    fn fresh_snake(&self) -> Snake {
        Snake::collapsed(
            Cell::ORIGIN,
            Direction::East,
            self.config.initial_snake_length,
        )
    }

    /// Execute one step of the game
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        if !state.is_running() {
            return TickOutcome::default();
        }

        let mut outcome = TickOutcome {
            applied: true,
            ..Default::default()
        };

        if let Some(direction) = state.pending_direction.take() {
            state.snake.direction = direction;
        }

        state.snake.advance();
        state.steps += 1;

        let head = state.snake.head();
        if state.food == Some(head) {
            state.snake.grow();
            state.score += 1;
            outcome.ate_food = true;

            state.food = self.spawner.respawn(&state.snake, &state.grid);
            if state.food.is_none() {
                outcome.stalled = true;
                info!(
                    score = state.score,
                    cells = state.grid.cell_count(),
                    "no free cell left for food"
                );
            }
            debug!(score = state.score, length = state.snake.len(), "food eaten");
        }

        outcome.collision_type = self.check_collision(state, head);

        if let Some(collision) = outcome.collision_type {
            state.phase = Phase::GameOver;
            state.snake.collapse_to_origin();
            info!(?collision, score = state.score, steps = state.steps, "game over");
        }

        outcome
    }

    /// Check whether the freshly moved head ends the game
    fn check_collision(&self, state: &GameState, head: Cell) -> Option<CollisionType> {
        if state.snake.collides_with_body(head) {
            return Some(CollisionType::SelfCollision);
        }

        if !state.is_in_bounds(head) {
            return Some(CollisionType::Wall);
        }

        None
    }
}
