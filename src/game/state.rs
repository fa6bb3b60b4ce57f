use super::action::Direction;
use super::grid::{Cell, Grid};

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Cell>,
    /// Current direction of movement
    pub direction: Direction,
    /// Cell the tail left behind on the last advance
    vacated: Option<Cell>,
}

impl Snake {
    /// Create a snake from explicit segments, head first
    ///
    /// # Panics
    ///
    /// Panics if `body` is empty; every other method relies on a head segment.
    pub fn from_cells(body: Vec<Cell>, direction: Direction) -> Self {
        let snake = Self {
            body,
            direction,
            vacated: None,
        };
        assert!(!snake.is_empty(), "a snake needs at least one segment");
        snake
    }

    /// Create a snake with every segment stacked on `origin`.
    ///
    /// The body unfolds over the first `length - 1` advances.
    pub fn collapsed(origin: Cell, direction: Direction, length: usize) -> Self {
        Self::from_cells(vec![origin; length.max(1)], direction)
    }

    /// Get the head cell
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get the tail cell (last segment)
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.body
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Cell] {
        &self.body[1..]
    }

    /// Check if a cell collides with the snake body (excluding head)
    pub fn collides_with_body(&self, cell: Cell) -> bool {
        self.body_segments().contains(&cell)
    }

    /// Check if any segment, head included, sits on `cell`
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Shift every segment into the one ahead of it, then step the head
    pub fn advance(&mut self) {
        let new_head = self.head().moved_in_direction(self.direction);
        self.body.insert(0, new_head);
        self.vacated = self.body.pop();
    }

    /// Lengthen the snake by one, keeping the cell the tail just left
    pub fn grow(&mut self) {
        let tail = self.vacated.take().unwrap_or_else(|| self.tail());
        self.body.push(tail);
    }

    /// Move every segment back to the origin, keeping the length
    pub fn collapse_to_origin(&mut self) {
        self.body.iter_mut().for_each(|cell| *cell = Cell::ORIGIN);
        self.vacated = None;
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the grid
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Coarse game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    StartScreen,
    Running,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// `None` only once the snake fills the whole grid
    pub food: Option<Cell>,
    pub grid: Grid,
    pub score: u32,
    pub steps: u32,
    pub phase: Phase,
    /// Direction to apply on the next tick
    pub pending_direction: Option<Direction>,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Option<Cell>, grid: Grid) -> Self {
        Self {
            snake,
            food,
            grid,
            score: 0,
            steps: 0,
            phase: Phase::Running,
            pending_direction: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Check if a cell is within the grid bounds
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        self.grid.contains(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_snake() -> Snake {
        Snake::from_cells(
            vec![Cell::new(5, 5, 5), Cell::new(4, 5, 5), Cell::new(3, 5, 5)],
            Direction::East,
        )
    }

    #[test]
    fn test_collapsed_creation() {
        let snake = Snake::collapsed(Cell::ORIGIN, Direction::East, 4);
        assert_eq!(snake.len(), 4);
        assert!(snake.cells().iter().all(|c| *c == Cell::ORIGIN));
    }

    #[test]
    fn test_collapsed_snake_unfolds() {
        let mut snake = Snake::collapsed(Cell::ORIGIN, Direction::East, 4);

        snake.advance();
        assert_eq!(
            snake.cells(),
            &[Cell::new(1, 0, 0), Cell::ORIGIN, Cell::ORIGIN, Cell::ORIGIN]
        );

        snake.advance();
        snake.advance();
        assert_eq!(
            snake.cells(),
            &[
                Cell::new(3, 0, 0),
                Cell::new(2, 0, 0),
                Cell::new(1, 0, 0),
                Cell::ORIGIN
            ]
        );
    }

    #[test]
    fn test_snake_movement() {
        let mut snake = straight_snake();

        snake.advance();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(6, 5, 5));
        assert_eq!(snake.tail(), Cell::new(4, 5, 5));

        snake.direction = Direction::Up;
        snake.advance();
        assert_eq!(snake.head(), Cell::new(6, 5, 4));
        assert_eq!(snake.body[1], Cell::new(6, 5, 5));
    }

    #[test]
    fn test_grow_keeps_vacated_tail() {
        let mut snake = straight_snake();

        snake.advance();
        snake.grow();
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), Cell::new(3, 5, 5));

        // The next advance drops nothing extra
        snake.advance();
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), Cell::new(4, 5, 5));
    }

    #[test]
    fn test_grow_before_any_advance() {
        let mut snake = Snake::from_cells(vec![Cell::new(5, 5, 5)], Direction::East);
        snake.grow();
        assert_eq!(snake.cells(), &[Cell::new(5, 5, 5), Cell::new(5, 5, 5)]);
    }

    #[test]
    fn test_collision_detection() {
        let snake = straight_snake();
        assert!(!snake.collides_with_body(Cell::new(5, 5, 5))); // head
        assert!(snake.collides_with_body(Cell::new(4, 5, 5))); // body
        assert!(!snake.collides_with_body(Cell::new(10, 10, 10))); // empty
        assert!(snake.occupies(Cell::new(5, 5, 5)));
    }

    #[test]
    #[should_panic(expected = "at least one segment")]
    fn test_empty_body_rejected() {
        Snake::from_cells(Vec::new(), Direction::East);
    }

    #[test]
    fn test_collapse_to_origin() {
        let mut snake = straight_snake();
        snake.collapse_to_origin();
        assert_eq!(snake.len(), 3);
        assert!(snake.cells().iter().all(|c| *c == Cell::ORIGIN));
    }

    #[test]
    fn test_state_defaults() {
        let state = GameState::new(straight_snake(), Some(Cell::new(1, 1, 1)), Grid::new(12));
        assert!(state.is_running());
        assert_eq!(state.score, 0);
        assert_eq!(state.pending_direction, None);
        assert!(state.is_in_bounds(Cell::new(11, 0, 0)));
        assert!(!state.is_in_bounds(Cell::new(12, 0, 0)));
    }
}
