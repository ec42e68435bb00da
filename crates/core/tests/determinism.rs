use maze_core::journal::InputJournal;
use maze_core::replay::replay_to_end;
use maze_core::{Direction, InputSource, MazeConfig, MazeGenerator, Session};

#[test]
fn test_determinism_identical_seeds_produce_same_hash() {
    let config = MazeConfig::default();
    let mut journal1 = InputJournal::new(12345, config.clone());
    journal1.append_move(InputSource::Keyboard, Direction::Right);
    journal1.append_tick();

    let mut journal2 = InputJournal::new(12345, config);
    journal2.append_move(InputSource::Keyboard, Direction::Right);
    journal2.append_tick();

    let result1 = replay_to_end(&journal1).expect("Replay 1 failed");
    let result2 = replay_to_end(&journal2).expect("Replay 2 failed");

    assert_eq!(
        result1.final_snapshot_hash, result2.final_snapshot_hash,
        "Identical runs must produce identical hashes"
    );
    assert_eq!(result1.final_player, result2.final_player);
}

#[test]
fn test_determinism_different_seeds_produce_different_hashes() {
    let config = MazeConfig::default();
    let result1 = replay_to_end(&InputJournal::new(123, config.clone())).expect("Replay 1 failed");
    let result2 = replay_to_end(&InputJournal::new(456, config)).expect("Replay 2 failed");

    assert_ne!(
        result1.final_snapshot_hash, result2.final_snapshot_hash,
        "Different seeds should produce different mazes and hashes"
    );
}

#[test]
fn test_fixed_seed_maze_layout_is_stable_across_generators() {
    for seed in [0_u64, 1, 99, 4_242, u64::MAX] {
        let generator = MazeGenerator::new(MazeConfig::with_dimensions(17, 23)).expect("config");
        let first = generator.generate(seed).expect("maze");
        let second = generator.generate(seed).expect("maze");
        assert_eq!(first.ascii_rows(), second.ascii_rows(), "seed={seed}");
        assert_eq!(first.fingerprint(), second.fingerprint(), "seed={seed}");
    }
}

#[test]
fn test_session_start_matches_generator_output() {
    let config = MazeConfig::with_dimensions(11, 11);
    let session = Session::start(config.clone(), 55).expect("session");
    let maze = MazeGenerator::new(config).expect("config").generate(55).expect("maze");
    assert_eq!(session.maze(), &maze);
    assert_eq!(session.goal(), maze.goal);
}
