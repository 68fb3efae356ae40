//! Integration tests for the game state machine driven the way the host loop drives it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tui_snake::core::{Collision, GameConfig, GameState, TickOutcome};
use tui_snake::input::handle_key_event;
use tui_snake::types::{Direction, Position, Signal};

fn grid10() -> GameConfig {
    GameConfig::with_grid(10, 10)
}

#[test]
fn test_eats_food_at_right_edge() {
    let mut state = GameState::with_layout(
        grid10(),
        1,
        &[Position::new(5, 5)],
        Direction::Right,
        Position::new(9, 5),
    );

    for _ in 0..4 {
        state.tick();
    }

    assert_eq!(state.head(), Position::new(9, 5));
    assert_eq!(state.score(), 10);
    assert_eq!(state.len(), 2);
    assert!(!state.game_over());
    let food = state.food().expect("food respawned");
    assert!(!state.snake().contains(&food));
}

#[test]
fn test_reverse_request_keeps_heading() {
    let body = [Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)];
    let mut state = GameState::with_layout(
        grid10(),
        1,
        &body,
        Direction::Right,
        Position::new(0, 9),
    );

    state.apply_signal(Signal::Turn(Direction::Left));
    assert_eq!(state.tick(), TickOutcome::Moved);
    assert_eq!(state.head(), Position::new(6, 5));
    assert_eq!(state.direction(), Direction::Right);
}

#[test]
fn test_wall_then_reset() {
    let mut state = GameState::with_layout(
        grid10(),
        1,
        &[Position::new(0, 5)],
        Direction::Left,
        Position::new(7, 7),
    );

    assert_eq!(state.tick(), TickOutcome::Collided(Collision::Wall));
    assert!(state.game_over());

    let frozen = state.snapshot();
    for _ in 0..3 {
        assert_eq!(state.tick(), TickOutcome::Idle);
    }
    let after = state.snapshot();
    assert_eq!(frozen.snake, after.snake);
    assert_eq!(frozen.food, after.food);
    assert_eq!(frozen.score, after.score);

    state.reset();
    assert!(!state.game_over());
    assert_eq!(state.score(), 0);
    assert_eq!(state.snake().iter().copied().collect::<Vec<_>>(), vec![Position::new(5, 5)]);
}

#[test]
fn test_keys_drive_the_game() {
    use crossterm::event::{KeyCode, KeyEvent};

    let mut state = GameState::new(grid10(), 3);
    for code in [KeyCode::Up, KeyCode::Char(' ')] {
        let signal = handle_key_event(KeyEvent::from(code)).unwrap();
        state.apply_signal(signal);
    }
    assert!(state.paused());
    assert_eq!(state.tick(), TickOutcome::Idle);

    state.apply_signal(handle_key_event(KeyEvent::from(KeyCode::Char('p'))).unwrap());
    assert_ne!(state.tick(), TickOutcome::Idle);
    assert_eq!(state.head(), Position::new(5, 4));
}

#[test]
fn test_same_seed_replays_identically() {
    let run = |seed| {
        let mut state = GameState::new(grid10(), seed);
        let mut foods = vec![state.food()];
        for i in 0..60 {
            let dir = Direction::ALL[i % 4];
            state.set_direction(dir);
            state.tick();
            if state.game_over() {
                state.reset();
            }
            foods.push(state.food());
        }
        foods
    };
    assert_eq!(run(99), run(99));
}

/// Random play over many seeds, checking the invariants after every tick.
#[test]
fn test_invariants_hold_under_random_play() {
    for seed in 0..40u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let config = GameConfig::with_grid(rng.gen_range(4..12), rng.gen_range(4..12));
        let (w, h) = (config.grid_width, config.grid_height);
        let mut state = GameState::new(config, seed);

        for _ in 0..400 {
            if rng.gen_bool(0.3) {
                let requested = Direction::ALL[rng.gen_range(0..4)];
                let before = state.next_direction();
                let accepted = state.set_direction(requested);
                if requested.is_opposite(state.direction()) {
                    assert!(!accepted);
                    assert_eq!(state.next_direction(), before);
                }
            }
            if rng.gen_bool(0.02) {
                state.toggle_pause();
            }

            let len_before = state.len();
            let score_before = state.score();
            let snake_before = state.snake().clone();
            let food_before = state.food();
            let outcome = state.tick();

            match outcome {
                TickOutcome::Idle | TickOutcome::Collided(_) => {
                    assert_eq!(state.snake(), &snake_before);
                    assert_eq!(state.food(), food_before);
                    assert_eq!(state.score(), score_before);
                }
                TickOutcome::Moved => {
                    assert_eq!(state.len(), len_before);
                    assert_eq!(state.score(), score_before);
                }
                TickOutcome::Ate | TickOutcome::Cleared => {
                    assert_eq!(state.len(), len_before + 1);
                    assert_eq!(state.score(), score_before + 10);
                }
            }

            // Food never sits on the snake, and the body never overlaps itself.
            if let Some(food) = state.food() {
                assert!(food.in_bounds(w, h));
                assert!(!state.snake().contains(&food));
            }
            let mut cells: Vec<_> = state.snake().iter().copied().collect();
            cells.sort_by_key(|p| (p.x, p.y));
            cells.dedup();
            assert_eq!(cells.len(), state.len());
            assert!(state.snake().iter().all(|p| p.in_bounds(w, h)));
            assert!(state.tick_interval_ms() >= 40);

            if state.game_over() {
                assert!(state.apply_signal(Signal::Restart));
                assert_eq!(state.len(), 1);
            }
        }
    }
}
