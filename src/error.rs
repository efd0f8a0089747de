use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WormError {
    #[error(
        "a {width}x{height} grid cannot hold the starting worm \
         (need at least {min_width}x{min_height})"
    )]
    GridTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    #[error("cell size must be non-zero, got {width}x{height}")]
    ZeroCellSize { width: u16, height: u16 },

    #[error("tick period must be at least 1 ms")]
    ZeroTickPeriod,

    #[error(
        "a {width}x{height} grid needs a {needed_cols}x{needed_rows} terminal, \
         found {cols}x{rows}"
    )]
    GridDoesNotFitTerminal {
        width: u16,
        height: u16,
        needed_cols: u16,
        needed_rows: u16,
        cols: u16,
        rows: u16,
    },

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
