use crate::error::WormError;
use crate::snake::STARTING_WORM;

/// A grid coordinate. Signed so a head stepping past the left or top edge is
/// still representable, and then rejected by [`Grid::in_bounds`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Cell::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

/// The playfield: `width` columns by `height` rows, both fixed once built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    /// Builds a grid, refusing sizes that cannot hold the starting worm.
    pub fn new(width: u16, height: u16) -> Result<Self, WormError> {
        let (min_width, min_height) = Self::min_size();

        if width < min_width || height < min_height {
            return Err(WormError::GridTooSmall { width, height, min_width, min_height });
        }

        Ok(Grid { width, height })
    }

    /// Derives the column/row counts from a drawing surface and the size of one cell.
    pub fn from_surface(surface: (u16, u16), cell: (u16, u16)) -> Result<Self, WormError> {
        let (cell_w, cell_h) = cell;
        if cell_w == 0 || cell_h == 0 {
            return Err(WormError::ZeroCellSize { width: cell_w, height: cell_h });
        }

        Self::new(surface.0 / cell_w, surface.1 / cell_h)
    }

    /// Smallest grid that fits the starting worm with room for its first step.
    pub fn min_size() -> (u16, u16) {
        let max_x = STARTING_WORM.iter().map(|&(x, _)| x).max().unwrap_or(0);
        let max_y = STARTING_WORM.iter().map(|&(_, y)| y).max().unwrap_or(0);
        ((max_x + 2) as u16, (max_y + 1) as u16)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        in_bounds(cell, self.width, self.height)
    }
}

pub fn in_bounds(cell: Cell, width: u16, height: u16) -> bool {
    (0..width as i32).contains(&cell.x) && (0..height as i32).contains(&cell.y)
}
