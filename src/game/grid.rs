use super::action::Direction;

/// A cell on the 3D game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, y: 0, z: 0 };

    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Move cell one step in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy, dz) = direction.delta();
        self.moved_by(dx, dy, dz)
    }
}

/// A cubic grid with the same number of cells along every axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    axis_cells: i32,
}

impl Grid {
    pub fn new(axis_cells: i32) -> Self {
        Self {
            axis_cells: axis_cells.max(0),
        }
    }

    pub fn axis_cells(&self) -> i32 {
        self.axis_cells
    }

    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        let side = self.axis_cells as usize;
        side * side * side
    }

    /// Check if a cell lies within `[0, axis_cells)` on every axis
    pub fn contains(&self, cell: Cell) -> bool {
        let in_axis = |v: i32| v >= 0 && v < self.axis_cells;
        in_axis(cell.x) && in_axis(cell.y) && in_axis(cell.z)
    }

    /// Iterate over every cell, x varying fastest
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let n = self.axis_cells;
        (0..n).flat_map(move |z| (0..n).flat_map(move |y| (0..n).map(move |x| Cell::new(x, y, z))))
    }
}
