use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::snake::Worm;

/// Picks a uniformly random cell of `grid` that the worm does not cover.
///
/// Samples until a free cell turns up. Returns `None` when the worm already
/// fills the whole grid, where sampling would never end.
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, worm: &Worm, grid: &Grid) -> Option<Cell> {
    if worm.len() >= grid.cell_count() {
        return None;
    }

    loop {
        let cell = Cell::new(
            rng.gen_range(0..grid.width() as i32),
            rng.gen_range(0..grid.height() as i32),
        );

        if !worm.contains(cell) {
            return Some(cell);
        }
    }
}
