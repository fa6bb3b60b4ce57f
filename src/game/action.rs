/// Direction the snake can move along one of the three grid axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// -Y on the XY plane
    North,
    /// +Y on the XY plane
    South,
    /// +X on the XY plane
    East,
    /// -X on the XY plane
    West,
    /// -Z
    Up,
    /// +Z
    Down,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// The direction pointing exactly the other way along the same axis
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Returns the delta (dx, dy, dz) for moving in this direction
    pub fn delta(&self) -> (i32, i32, i32) {
        match self {
            Direction::North => (0, -1, 0),
            Direction::South => (0, 1, 0),
            Direction::East => (1, 0, 0),
            Direction::West => (-1, 0, 0),
            Direction::Up => (0, 0, -1),
            Direction::Down => (0, 0, 1),
        }
    }
}

/// Logical keys the game understands, independent of the terminal key binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Forward,
    Back,
    Up,
    Down,
    Confirm,
}

impl Key {
    /// The direction a movement key asks for, or `None` for non-movement keys
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Key::Left => Some(Direction::West),
            Key::Right => Some(Direction::East),
            Key::Forward => Some(Direction::North),
            Key::Back => Some(Direction::South),
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Confirm => None,
        }
    }
}
