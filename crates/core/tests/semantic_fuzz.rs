use maze_core::{Direction, InputSource, MazeConfig, MazeError, Session, SessionState};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn run_fuzz_session(
    maze_seed: u64,
    input_seed: u64,
    rows: usize,
    cols: usize,
    max_inputs: u32,
) -> Result<(), String> {
    let config = MazeConfig { time_limit_secs: 1_000, ..MazeConfig::with_dimensions(rows, cols) };
    let mut session =
        Session::start(config, maze_seed).map_err(|err| format!("start failed: {err}"))?;
    let mut rng = ChaCha8Rng::seed_from_u64(input_seed);
    let grid = session.maze().grid.clone();

    for _ in 0..max_inputs {
        let before = session.player();
        let direction = choose(&mut rng, &Direction::ALL);
        let source = choose(&mut rng, &InputSource::ALL);

        match session.apply_move(source, direction) {
            Ok(report) => {
                if report.from != before {
                    return Err(format!("report origin drifted on maze_seed {maze_seed}"));
                }
            }
            Err(MazeError::SessionEnded) => {
                if session.state() == SessionState::Active {
                    return Err(format!("active session refused input on maze_seed {maze_seed}"));
                }
                if session.player() != before {
                    return Err(format!("ended session moved player on maze_seed {maze_seed}"));
                }
                break;
            }
            Err(err) => return Err(format!("unexpected error {err} on maze_seed {maze_seed}")),
        }

        let player = session.player();
        if !grid.in_bounds(player) {
            return Err(format!("Invariant failed: player left grid on maze_seed {maze_seed}"));
        }
        if !grid.is_passage(player) {
            return Err(format!("Invariant failed: player inside wall on maze_seed {maze_seed}"));
        }
        let step = player.x.abs_diff(before.x) + player.y.abs_diff(before.y);
        if step > 1 {
            return Err(format!("Invariant failed: player jumped on maze_seed {maze_seed}"));
        }
    }

    if session.maze().grid != grid {
        return Err(format!("Invariant failed: grid mutated during play on maze_seed {maze_seed}"));
    }
    Ok(())
}

#[test]
fn test_fuzz_movement_keeps_player_on_passages() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(48));
    let inputs = (any::<u64>(), any::<u64>(), 1_usize..=30, 1_usize..=30);

    runner
        .run(&inputs, |(maze_seed, input_seed, rows, cols)| {
            run_fuzz_session(maze_seed, input_seed, rows, cols, 2_000)
                .map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("movement fuzz should preserve invariants");
}
