use std::{io, time::{Duration, Instant}};

use worm::{Cell, Direction::{*, self}, GameEngine, Outcome, TickReport, Worm};
use worm::config::{terminal_size_for, CELL_COLUMNS};

use crate::clock::FixedTicker;
use crate::term::TermManager;
use crate::TermInt;

use crossterm::event::{KeyEvent, KeyModifiers, KeyCode};
use tracing::{debug, info};

const PAUSED_POLL: Duration = Duration::from_millis(250);

const WORM_BODY_CHAR: char = '█';
const FOOD_CHAR: char = 'O';
const DEAD_WORM_CHAR: char = 'X';

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Command {
    Turn(Direction),
    Restart,
    TogglePause,
    Quit,
}

pub struct WormGame {
    term: TermManager,
    engine: GameEngine,
    tick_period: Duration,
    paused: bool,
}

impl WormGame {
    pub fn new(term: TermManager, engine: GameEngine, tick_period: Duration) -> Self {
        WormGame { term, engine, tick_period, paused: false }
    }

    pub fn setup(&mut self) -> io::Result<()> {
        self.term.setup()
    }

    pub fn restore(&mut self) -> io::Result<()> {
        self.term.restore()
    }

    /// Returns false if the player chose to quit instead of starting.
    pub fn show_intro(&mut self) -> io::Result<bool> {
        self.draw_board()?;
        self.term.show_message(&[
            "Arrow keys or WASD to move",
            "R to restart",
            "Esc to pause",
            "Q or CTRL+C to quit",
            "",
            "Press any key to begin"
        ])?;

        let key = self.term.read_key_blocking()?;
        self.term.hide_message()?;
        Ok(command_for(&key) != Some(Command::Quit))
    }

    /// Runs games back to back until the player quits.
    pub fn play(&mut self) -> io::Result<()> {
        let mut ticker = FixedTicker::new(self.tick_period, Instant::now());

        loop {
            let timeout = if self.paused { PAUSED_POLL } else { ticker.time_left(Instant::now()) };

            if let Some(key) = self.term.next_key(timeout)? {
                match command_for(&key) {
                    Some(Command::Quit) => return Ok(()),
                    Some(Command::Turn(dir)) => {
                        if !self.engine.submit_direction(dir) {
                            debug!(?dir, "input dropped");
                        }
                    }
                    Some(Command::Restart) => {
                        self.engine.reset();
                        self.paused = false;
                        self.draw_board()?;
                        ticker.restart(Instant::now());
                    }
                    Some(Command::TogglePause) => {
                        self.toggle_pause()?;
                        ticker.restart(Instant::now());
                    }
                    None => {}
                }
            }

            if self.paused { continue; }

            if ticker.is_due(Instant::now()) {
                let report = self.engine.tick();
                self.draw_tick(report)?;
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_board(&mut self) -> io::Result<()> {
        let snapshot = self.engine.snapshot();

        self.term.clear()?;
        let size = terminal_size_for(&self.engine.grid());
        self.term.draw_borders(size, &score_title(snapshot.score))?;

        print_cell(&mut self.term, snapshot.food, FOOD_CHAR)?;
        for (cell, ch) in worm_glyphs(snapshot.worm, snapshot.direction, snapshot.outcome) {
            print_cell(&mut self.term, cell, ch)?;
        }

        self.term.flush()
    }

    fn draw_tick(&mut self, report: TickReport) -> io::Result<()> {
        match report {
            TickReport::Idle => Ok(()),
            TickReport::Moved { new_head, old_head, old_tail, ate } => {
                let snapshot = self.engine.snapshot();

                if let Some(old_tail) = old_tail {
                    print_cell(&mut self.term, old_tail, ' ')?;
                }
                print_cell(&mut self.term, old_head, WORM_BODY_CHAR)?;
                print_cell(&mut self.term, new_head, snapshot.direction.head_char())?;

                if ate {
                    print_cell(&mut self.term, snapshot.food, FOOD_CHAR)?;
                    let (width, _) = terminal_size_for(&self.engine.grid());
                    self.term.print_title(width, &score_title(snapshot.score))?;
                }

                self.term.flush()
            }
            TickReport::Ended(outcome) => self.game_over(outcome),
        }
    }

    fn game_over(&mut self, outcome: Outcome) -> io::Result<()> {
        let snapshot = self.engine.snapshot();
        let won = outcome == Outcome::BoardCleared;
        info!(?outcome, score = snapshot.score, "showing end screen");

        // The final move is only drawn here, it never produced a Moved report
        for (cell, ch) in worm_glyphs(snapshot.worm, snapshot.direction, Some(outcome)) {
            print_cell(&mut self.term, cell, ch)?;
        }
        let (width, _) = terminal_size_for(&self.engine.grid());
        self.term.print_title(width, &score_title(snapshot.score))?;

        let s = if won {"You won!"} else {"Game over!"};
        let score = snapshot.score;
        self.term.show_message(&[
            s,
            &*format!("Score: {}", score),
            "",
            "Press R to play again,",
            "or Q to quit."
        ])
    }

    fn toggle_pause(&mut self) -> io::Result<()> {
        // The end screen stays up, there is nothing to pause
        if self.engine.snapshot().outcome.is_some() {
            return Ok(());
        }

        if !self.paused {
            self.term.show_message(&["Paused", "Press Esc to resume", "or Q to quit"])?;
        } else {
            self.term.hide_message()?;
        }

        self.paused = !self.paused;
        Ok(())
    }
}

/// What to draw on each worm cell. A crashed worm is drawn dead, a winning or
/// running one with its head glyph.
fn worm_glyphs(
    worm: &Worm,
    direction: Direction,
    outcome: Option<Outcome>,
) -> Vec<(Cell, char)> {
    let dead = matches!(outcome, Some(Outcome::HitWall) | Some(Outcome::HitSelf));

    worm.segments()
        .enumerate()
        .map(|(i, cell)| {
            let ch = if dead {
                DEAD_WORM_CHAR
            } else if i == 0 {
                direction.head_char()
            } else {
                WORM_BODY_CHAR
            };
            (cell, ch)
        })
        .collect()
}

fn print_cell(term: &mut TermManager, cell: Cell, ch: char) -> io::Result<()> {
    let (x, y) = cell_origin(cell);
    for dx in 0..CELL_COLUMNS {
        term.print_at((x + dx, y), ch)?;
    }
    Ok(())
}

/// Top left terminal position of a grid cell, inside the border.
fn cell_origin(cell: Cell) -> (TermInt, TermInt) {
    (1 + cell.x as TermInt * CELL_COLUMNS, 1 + cell.y as TermInt)
}

fn score_title(score: u32) -> String {
    format!("Score: {}", score)
}

fn command_for(ev: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(ev) {
        return Some(Command::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Command::Turn(Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(Command::Turn(Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(Command::Turn(Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(Command::Turn(Right)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        KeyCode::Esc => Some(Command::TogglePause),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL, .. })
}
