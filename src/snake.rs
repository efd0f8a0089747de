use std::collections::VecDeque;

use crate::grid::{Cell, Grid};
use Direction::*;
use MoveResult::*;

/// Canonical starting body, head first.
pub const STARTING_WORM: [(i32, i32); 3] = [(8, 10), (7, 10), (6, 10)];
pub const STARTING_DIRECTION: Direction = Right;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Unit step in grid coordinates, y growing downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Left | Right)
    }

    /// A change is only refused when both directions lie on the same axis: that is
    /// either the committed direction itself or its exact reverse.
    pub fn is_valid_change(candidate: Direction, committed: Direction) -> bool {
        candidate.is_horizontal() != committed.is_horizontal()
    }

    pub fn head_char(self) -> char {
        match self {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Cell, old_head: Cell, old_tail: Option<Cell> },
    Crashed(Collision)
}

/// The worm's body, head at the front. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Worm {
    body: VecDeque<Cell>,
    grow_next_move: bool,
}

impl Worm {
    pub fn new<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let body: VecDeque<Cell> = cells.into_iter().map(Into::into).collect();
        assert!(!body.is_empty(), "a worm needs at least one segment");
        Worm { body, grow_next_move: false }
    }

    pub fn starting() -> Self {
        Worm::new(STARTING_WORM)
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false, a worm keeps at least one segment.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// True when no cell appears twice.
    pub fn is_self_disjoint(&self) -> bool {
        self.body
            .iter()
            .enumerate()
            .all(|(i, cell)| !self.body.range(i + 1..).any(|other| other == cell))
    }

    /// Moves one cell towards `direction`. Collisions are checked against the
    /// body as it was before this move, so the cell the tail is about to vacate
    /// still counts as occupied. On a crash the worm is left untouched.
    pub fn move_step(&mut self, direction: Direction, grid: &Grid, food: Cell) -> MoveResult {
        let old_head = self.head();
        let new_head = old_head.offset(direction.delta());

        if !grid.in_bounds(new_head) {
            return Crashed(Collision::Wall);
        }
        if self.contains(new_head) {
            return Crashed(Collision::Body);
        }

        self.body.push_front(new_head);

        if new_head == food {
            self.grow();
        }

        if self.grow_next_move {
            self.grow_next_move = false;
            Moved { new_head, old_head, old_tail: None }
        } else {
            let old_tail = self.body.pop_back();
            Moved { new_head, old_head, old_tail }
        }
    }

    pub fn grow(&mut self) {
        self.grow_next_move = true;
    }
}
