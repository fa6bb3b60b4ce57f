//! Flattening of the 3D state onto the three axis-aligned planes

use crate::game::{Cell, GameState};

/// One of the three projection planes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plane {
    /// Head-on view: x across, y down
    XY,
    /// x across, z down
    XZ,
    /// y across, z down
    YZ,
}

impl Plane {
    pub const ALL: [Plane; 3] = [Plane::XY, Plane::XZ, Plane::YZ];

    /// Axis labels as (horizontal, vertical)
    pub fn axes(&self) -> (&'static str, &'static str) {
        match self {
            Plane::XY => ("X", "Y"),
            Plane::XZ => ("X", "Z"),
            Plane::YZ => ("Y", "Z"),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Plane::XY => " XY ",
            Plane::XZ => " XZ ",
            Plane::YZ => " YZ ",
        }
    }

    /// Drop the axis perpendicular to this plane
    pub fn flatten(&self, cell: Cell) -> (i32, i32) {
        match self {
            Plane::XY => (cell.x, cell.y),
            Plane::XZ => (cell.x, cell.z),
            Plane::YZ => (cell.y, cell.z),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Empty,
    Food,
    Body,
    Head,
}

/// A square raster of glyphs, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneView {
    pub plane: Plane,
    pub rows: Vec<Vec<Glyph>>,
}

impl PlaneView {
    pub fn glyph_at(&self, col: usize, row: usize) -> Option<Glyph> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }
}

/// Project the food and the snake onto `plane`.
///
/// Snake segments are painted over food, and the head over the body.
pub fn project(state: &GameState, plane: Plane) -> PlaneView {
    let side = state.grid.axis_cells().max(0) as usize;
    let mut rows = vec![vec![Glyph::Empty; side]; side];

    let mut paint = |cell: Cell, glyph: Glyph| {
        let (col, row) = plane.flatten(cell);
        if col < 0 || row < 0 {
            return;
        }
        if let Some(slot) = rows
            .get_mut(row as usize)
            .and_then(|r| r.get_mut(col as usize))
        {
            *slot = glyph;
        }
    };

    if let Some(food) = state.food {
        paint(food, Glyph::Food);
    }
    for segment in state.snake.body_segments() {
        paint(*segment, Glyph::Body);
    }
    paint(state.snake.head(), Glyph::Head);

    PlaneView { plane, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Grid, Snake};

    fn sample_state() -> GameState {
        let snake = Snake::from_cells(
            vec![Cell::new(2, 1, 3), Cell::new(1, 1, 3)],
            Direction::East,
        );
        GameState::new(snake, Some(Cell::new(0, 2, 1)), Grid::new(4))
    }

    #[test]
    fn test_projection_axes() {
        let state = sample_state();

        let xy = project(&state, Plane::XY);
        assert_eq!(xy.glyph_at(2, 1), Some(Glyph::Head));
        assert_eq!(xy.glyph_at(1, 1), Some(Glyph::Body));
        assert_eq!(xy.glyph_at(0, 2), Some(Glyph::Food));

        let xz = project(&state, Plane::XZ);
        assert_eq!(xz.glyph_at(2, 3), Some(Glyph::Head));
        assert_eq!(xz.glyph_at(1, 3), Some(Glyph::Body));
        assert_eq!(xz.glyph_at(0, 1), Some(Glyph::Food));

        let yz = project(&state, Plane::YZ);
        assert_eq!(yz.glyph_at(1, 3), Some(Glyph::Head));
        assert_eq!(yz.glyph_at(2, 1), Some(Glyph::Food));
    }

    #[test]
    fn test_view_is_square() {
        let state = sample_state();
        for plane in Plane::ALL {
            let view = project(&state, plane);
            assert_eq!(view.rows.len(), 4);
            assert!(view.rows.iter().all(|r| r.len() == 4));
        }
    }

    #[test]
    fn test_head_painted_over_overlapping_segments() {
        let state = GameState::new(
            Snake::collapsed(Cell::ORIGIN, Direction::East, 4),
            Some(Cell::new(3, 3, 3)),
            Grid::new(4),
        );

        let xy = project(&state, Plane::XY);
        assert_eq!(xy.glyph_at(0, 0), Some(Glyph::Head));
    }

    #[test]
    fn test_out_of_bounds_cells_are_skipped() {
        let snake = Snake::from_cells(vec![Cell::new(-1, 0, 0), Cell::new(0, 0, 0)], Direction::West);
        let state = GameState::new(snake, None, Grid::new(3));

        let xy = project(&state, Plane::XY);
        assert_eq!(xy.glyph_at(0, 0), Some(Glyph::Body));
        assert!(xy.rows.iter().flatten().all(|g| *g != Glyph::Head));
    }
}
