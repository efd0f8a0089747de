//! Core of a grid-based worm game: the playfield, the worm, buffered input and
//! the tick-driven engine. The terminal frontend lives in the `worm` binary.

pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod grid;
pub mod input;
pub mod snake;

pub use engine::{GameEngine, GameState, Outcome, Phase, Snapshot, TickReport};
pub use error::WormError;
pub use grid::{Cell, Grid};
pub use snake::{Direction, Worm};
