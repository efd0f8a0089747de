use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::error::WormError;
use crate::grid::Grid;

/// Terminal columns used to draw one grid cell, which keeps cells roughly square.
pub const CELL_COLUMNS: u16 = 2;
/// Terminal rows and columns taken by the border around the playfield.
pub const BORDER: u16 = 2;

/// Grow by eating, die by crashing into walls or yourself
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "worm", version, long_about = None)]
pub struct Cli {
    /// Grid columns. Fills the terminal when omitted
    #[arg(long)]
    pub width: Option<u16>,

    /// Grid rows. Fills the terminal when omitted
    #[arg(long)]
    pub height: Option<u16>,

    /// Milliseconds between two game ticks
    #[arg(long, default_value_t = 100)]
    pub tick_ms: u64,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Validated settings the game runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub grid: Grid,
    pub tick_period: Duration,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Resolves the grid against a terminal of `cols`x`rows` and checks everything fits.
    pub fn into_settings(self, (cols, rows): (u16, u16)) -> Result<Settings, WormError> {
        if self.tick_ms == 0 {
            return Err(WormError::ZeroTickPeriod);
        }

        let fitted = Grid::from_surface(
            (cols.saturating_sub(BORDER), rows.saturating_sub(BORDER)),
            (CELL_COLUMNS, 1),
        );

        let grid = match (self.width, self.height) {
            (None, None) => fitted?,
            (width, height) => {
                let (min_width, min_height) = Grid::min_size();
                let (fit_width, fit_height) = fitted
                    .map(|g| (g.width(), g.height()))
                    .unwrap_or((min_width, min_height));
                Grid::new(width.unwrap_or(fit_width), height.unwrap_or(fit_height))?
            }
        };

        let (needed_cols, needed_rows) = terminal_size_for(&grid);
        if needed_cols > cols || needed_rows > rows {
            return Err(WormError::GridDoesNotFitTerminal {
                width: grid.width(),
                height: grid.height(),
                needed_cols,
                needed_rows,
                cols,
                rows,
            });
        }

        Ok(Settings {
            grid,
            tick_period: Duration::from_millis(self.tick_ms),
            seed: self.seed,
            log_file: self.log_file,
        })
    }
}

/// Terminal size needed to draw `grid` with its border.
pub fn terminal_size_for(grid: &Grid) -> (u16, u16) {
    (
        grid.width().saturating_mul(CELL_COLUMNS).saturating_add(BORDER),
        grid.height().saturating_add(BORDER),
    )
}
