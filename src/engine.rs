//! The tick-driven game state machine.
//!
//! All mutation goes through [`GameEngine::tick`], [`GameEngine::submit_direction`]
//! and [`GameEngine::reset`]. Renderers only ever see a [`Snapshot`].

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info, instrument};

use crate::food;
use crate::grid::{Cell, Grid};
use crate::input::InputQueue;
use crate::snake::{Collision, Direction, MoveResult, Worm, STARTING_DIRECTION};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// Why a game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    HitWall,
    HitSelf,
    /// The worm ate the last food that could be placed.
    BoardCleared,
}

/// What a single tick did, for renderers that update incrementally.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickReport {
    /// The game is over, nothing changed.
    Idle,
    Moved { new_head: Cell, old_head: Cell, old_tail: Option<Cell>, ate: bool },
    Ended(Outcome),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    worm: Worm,
    direction: Direction,
    pending_direction: Direction,
    input: InputQueue,
    food: Cell,
    score: u32,
    phase: Phase,
    outcome: Option<Outcome>,
}

impl GameState {
    /// A running game with an empty input queue and a zero score.
    pub fn new(worm: Worm, direction: Direction, food: Cell) -> Self {
        GameState {
            worm,
            direction,
            pending_direction: direction,
            input: InputQueue::new(),
            food,
            score: 0,
            phase: Phase::Running,
            outcome: None,
        }
    }

    pub fn worm(&self) -> &Worm {
        &self.worm
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn input(&self) -> &InputQueue {
        &self.input
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}

/// Read-only view handed to renderers after each tick.
#[derive(Copy, Clone, Debug)]
pub struct Snapshot<'a> {
    pub worm: &'a Worm,
    pub food: Cell,
    pub score: u32,
    pub phase: Phase,
    pub outcome: Option<Outcome>,
    pub direction: Direction,
}

pub struct GameEngine<R = StdRng> {
    grid: Grid,
    state: GameState,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Seeded engines place food reproducibly, unseeded ones draw from OS entropy.
    pub fn with_seed(grid: Grid, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        GameEngine::new(grid, rng)
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn new(grid: Grid, mut rng: R) -> Self {
        let state = fresh_state(&grid, &mut rng);
        GameEngine { grid, state, rng }
    }

    /// Starts from an arbitrary state.
    ///
    /// # Panics
    ///
    /// If the worm leaves the grid or overlaps itself, or the food sits on the worm.
    pub fn from_state(grid: Grid, state: GameState, rng: R) -> Self {
        assert!(
            state.worm.segments().all(|cell| grid.in_bounds(cell)),
            "worm must lie within the {}x{} grid",
            grid.width(),
            grid.height()
        );
        assert!(state.worm.is_self_disjoint(), "worm must not overlap itself");
        assert!(!state.worm.contains(state.food), "food must not be placed on the worm");

        GameEngine { grid, state, rng }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            worm: &self.state.worm,
            food: self.state.food,
            score: self.state.score,
            phase: self.state.phase,
            outcome: self.state.outcome,
            direction: self.state.direction,
        }
    }

    /// Buffers a direction for a later tick. Accepted in any phase; whatever is
    /// still queued when the game is reset gets discarded.
    pub fn submit_direction(&mut self, direction: Direction) -> bool {
        self.state.input.enqueue(direction)
    }

    /// Advances the game by one step. Does nothing once the game is over.
    pub fn tick(&mut self) -> TickReport {
        let state = &mut self.state;
        if state.phase == Phase::GameOver {
            return TickReport::Idle;
        }

        if let Some(candidate) = state.input.dequeue_one() {
            if Direction::is_valid_change(candidate, state.direction) {
                state.pending_direction = candidate;
            } else {
                debug!(?candidate, committed = ?state.direction, "ignoring same-axis turn");
            }
        }
        state.direction = state.pending_direction;

        let moved = state.worm.move_step(state.direction, &self.grid, state.food);
        let (new_head, old_head, old_tail) = match moved {
            MoveResult::Moved { new_head, old_head, old_tail } => (new_head, old_head, old_tail),
            MoveResult::Crashed(collision) => {
                let outcome = match collision {
                    Collision::Wall => Outcome::HitWall,
                    Collision::Body => Outcome::HitSelf,
                };
                self.end(outcome);
                return TickReport::Ended(outcome);
            }
        };

        let ate = new_head == state.food;
        if ate {
            state.score += 1;
            debug!(cell = ?new_head, score = state.score, "food eaten");

            match food::spawn(&mut self.rng, &state.worm, &self.grid) {
                Some(cell) => state.food = cell,
                None => {
                    self.end(Outcome::BoardCleared);
                    return TickReport::Ended(Outcome::BoardCleared);
                }
            }
        }

        TickReport::Moved { new_head, old_head, old_tail, ate }
    }

    /// Throws the current game away and starts over from the canonical worm.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        let previous_score = self.state.score;
        self.state = fresh_state(&self.grid, &mut self.rng);
        info!(previous_score, "game reset");
    }

    fn end(&mut self, outcome: Outcome) {
        self.state.phase = Phase::GameOver;
        self.state.outcome = Some(outcome);
        info!(?outcome, score = self.state.score, length = self.state.worm.len(), "game over");
    }
}

fn fresh_state<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> GameState {
    let worm = Worm::starting();
    // Grid::new only accepts grids with room beyond the starting worm
    let food = food::spawn(rng, &worm, grid)
        .expect("grid has free cells next to the starting worm");
    GameState::new(worm, STARTING_DIRECTION, food)
}
