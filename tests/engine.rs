use rand::{rngs::StdRng, SeedableRng};

use worm::{
    Cell,
    Direction::{self, *},
    GameEngine, GameState, Grid, Outcome, Phase, TickReport, Worm,
};

fn grid() -> Grid {
    Grid::new(20, 20).expect("20x20 holds the starting worm")
}

fn engine(cells: &[(i32, i32)], direction: Direction, food: (i32, i32)) -> GameEngine {
    let state = GameState::new(Worm::new(cells.iter().copied()), direction, food.into());
    GameEngine::from_state(grid(), state, StdRng::seed_from_u64(17))
}

fn body(engine: &GameEngine) -> Vec<Cell> {
    engine.snapshot().worm.segments().collect()
}

fn cells(raw: &[(i32, i32)]) -> Vec<Cell> {
    raw.iter().copied().map(Cell::from).collect()
}

/// Next step along a loop that visits every cell of a 10x12 grid: right along
/// row 0, zigzag over columns 1..=9 down to row 11, then back up column 0.
fn loop_direction(head: Cell) -> Direction {
    match (head.x, head.y) {
        (x, 0) if x < 9 => Right,
        (_, 0) => Down,
        (0, _) => Up,
        (1, 11) => Left,
        (x, y) if y % 2 == 1 => if x > 1 { Left } else { Down },
        (x, _) => if x < 9 { Right } else { Down },
    }
}

#[test]
fn length_is_kept_unless_food_is_eaten() {
    // Shorter than the loop, so following it can never hit the body
    let grid = Grid::new(10, 12).expect("10x12 holds the starting worm");
    let state = GameState::new(Worm::new([(2, 0), (1, 0), (0, 0)]), Right, Cell::new(5, 0));
    let mut engine = GameEngine::from_state(grid, state, StdRng::seed_from_u64(99));

    let (mut meals, mut plain_moves) = (0, 0);
    for _ in 0..600 {
        engine.submit_direction(loop_direction(engine.snapshot().worm.head()));

        let before = engine.snapshot().worm.len();
        match engine.tick() {
            TickReport::Moved { ate: false, .. } => {
                assert_eq!(engine.snapshot().worm.len(), before);
                plain_moves += 1;
            }
            TickReport::Moved { ate: true, .. } => {
                assert_eq!(engine.snapshot().worm.len(), before + 1);
                meals += 1;
            }
            other => panic!("worm left the loop: {:?}", other),
        }
        assert_eq!(engine.phase(), Phase::Running);
    }

    // Food is always somewhere on the loop, so it is reached within 120 ticks
    assert!(meals >= 5, "only {} meals", meals);
    assert!(plain_moves > 0);
    assert_eq!(engine.snapshot().score, meals);
    assert_eq!(engine.snapshot().worm.len(), 3 + meals as usize);
}

#[test]
fn reversal_does_not_change_axis() {
    let mut engine = engine(&[(8, 10), (7, 10), (6, 10)], Right, (0, 0));

    engine.submit_direction(Left);
    assert!(matches!(engine.tick(), TickReport::Moved { .. }));

    assert_eq!(engine.snapshot().direction, Right);
    assert_eq!(engine.snapshot().worm.head(), Cell::new(9, 10));
}

#[test]
fn food_is_never_spawned_on_the_worm() {
    let mut engine = engine(&[(8, 10), (7, 10), (6, 10)], Right, (9, 10));

    for _ in 0..5 {
        let snapshot = engine.snapshot();
        assert!(!snapshot.worm.contains(snapshot.food));
        engine.tick();
    }
    let snapshot = engine.snapshot();
    assert!(!snapshot.worm.contains(snapshot.food));
}

#[test]
fn leaving_column_zero_ends_the_game() {
    let mut engine = engine(&[(0, 5), (1, 5), (2, 5)], Left, (10, 10));

    assert_eq!(engine.tick(), TickReport::Ended(Outcome::HitWall));
    assert_eq!(engine.phase(), Phase::GameOver);
    assert_eq!(body(&engine), cells(&[(0, 5), (1, 5), (2, 5)]));
    assert_eq!(engine.snapshot().score, 0);
}

#[test]
fn u_turn_hits_the_body_on_the_right_tick() {
    let mut engine = engine(&[(5, 5), (4, 5), (3, 5), (2, 5), (1, 5)], Right, (15, 15));

    engine.submit_direction(Down);
    engine.submit_direction(Left);
    engine.submit_direction(Up);

    assert!(matches!(engine.tick(), TickReport::Moved { .. }));
    assert!(matches!(engine.tick(), TickReport::Moved { .. }));
    assert_eq!(engine.phase(), Phase::Running);

    assert_eq!(engine.tick(), TickReport::Ended(Outcome::HitSelf));
    assert_eq!(engine.snapshot().outcome, Some(Outcome::HitSelf));
    // Frozen at the last legal position
    assert_eq!(body(&engine), cells(&[(4, 6), (5, 6), (5, 5), (4, 5), (3, 5)]));
}

#[test]
fn head_entering_the_vacating_tail_still_collides() {
    let mut engine = engine(&[(5, 5), (4, 5), (3, 5), (2, 5)], Right, (15, 15));

    engine.submit_direction(Down);
    engine.submit_direction(Left);
    engine.submit_direction(Up);

    engine.tick();
    engine.tick();
    assert_eq!(engine.snapshot().worm.tail(), Cell::new(4, 5));

    assert_eq!(engine.tick(), TickReport::Ended(Outcome::HitSelf));
}

#[test]
fn eating_grows_and_scores() {
    let mut engine = engine(&[(8, 10), (7, 10), (6, 10)], Right, (9, 10));

    let report = engine.tick();

    assert_eq!(
        report,
        TickReport::Moved {
            new_head: Cell::new(9, 10),
            old_head: Cell::new(8, 10),
            old_tail: None,
            ate: true,
        }
    );
    assert_eq!(body(&engine), cells(&[(9, 10), (8, 10), (7, 10), (6, 10)]));
    assert_eq!(engine.snapshot().score, 1);
    let food = engine.snapshot().food;
    assert!(grid().in_bounds(food));
    assert!(!body(&engine).contains(&food));
}

#[test]
fn queue_keeps_the_first_three_inputs() {
    let mut engine = engine(&[(8, 10), (7, 10), (6, 10)], Right, (0, 0));

    let kept: Vec<bool> =
        [Up, Left, Down, Right, Up].iter().map(|&d| engine.submit_direction(d)).collect();
    assert_eq!(kept, vec![true, true, true, false, false]);
    assert_eq!(engine.state().input().iter().collect::<Vec<_>>(), vec![Up, Left, Down]);

    engine.tick();
    assert_eq!(engine.snapshot().direction, Up);
    engine.tick();
    assert_eq!(engine.snapshot().direction, Left);
    engine.tick();
    assert_eq!(engine.snapshot().direction, Down);
    assert!(engine.state().input().is_empty());
}

#[test]
fn reset_restores_a_fresh_game() {
    let mut engine = engine(&[(8, 10), (7, 10), (6, 10)], Right, (9, 10));
    engine.tick();
    engine.submit_direction(Up);
    engine.tick();
    for _ in 0..20 {
        engine.tick();
    }
    assert_eq!(engine.phase(), Phase::GameOver);
    engine.submit_direction(Left);
    engine.submit_direction(Down);

    engine.reset();

    let state = engine.state();
    assert_eq!(state.worm(), &Worm::starting());
    assert_eq!(state.direction(), Right);
    assert_eq!(state.pending_direction(), Right);
    assert_eq!(state.score(), 0);
    assert_eq!(state.phase(), Phase::Running);
    assert_eq!(state.outcome(), None);
    assert!(state.input().is_empty());
    assert!(!state.worm().contains(state.food()));
}

#[test]
fn reset_works_mid_game() {
    let mut engine = GameEngine::with_seed(grid(), Some(4));
    engine.submit_direction(Down);
    engine.tick();
    engine.tick();

    engine.reset();

    assert_eq!(engine.state().worm(), &Worm::starting());
    assert_eq!(engine.state().direction(), Right);
    assert_eq!(engine.phase(), Phase::Running);
}
