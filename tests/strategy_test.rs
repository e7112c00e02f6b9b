//! Tests for the move-selection strategies.

use tictactoe_engine::{
    Board, Difficulty, Game, HeuristicStrategy, OptimalStrategy, Outcome, Player, Position,
    RandomStrategy, Square, Strategy, StrategyError,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn board_with(marks: &[(Position, Player)]) -> Board {
    let mut board = Board::new();
    for &(pos, player) in marks {
        board.set(pos, Square::Occupied(player));
    }
    board
}

fn full_board() -> Board {
    // X O X / O X X / O X O, a drawn board
    board_with(&[
        (Position::TopLeft, Player::X),
        (Position::TopCenter, Player::O),
        (Position::TopRight, Player::X),
        (Position::MiddleLeft, Player::O),
        (Position::Center, Player::X),
        (Position::MiddleRight, Player::X),
        (Position::BottomLeft, Player::O),
        (Position::BottomCenter, Player::X),
        (Position::BottomRight, Player::O),
    ])
}

// ─────────────────────────────────────────────────────────────
//  OptimalStrategy
// ─────────────────────────────────────────────────────────────

#[test]
fn test_optimal_takes_immediate_win() {
    // X X _ / O O _ / _ _ _ with X to move: must complete the top row
    let board = board_with(&[
        (Position::TopLeft, Player::X),
        (Position::TopCenter, Player::X),
        (Position::MiddleLeft, Player::O),
        (Position::Center, Player::O),
    ]);

    let mut strategy = OptimalStrategy::new();
    let pos = strategy.choose(&board, Player::X).expect("Moves remain");
    assert_eq!(pos, Position::TopRight);
}

#[test]
fn test_optimal_blocks_forced_loss() {
    // O O _ / _ X _ / _ _ _ with X to move: anything but TopRight loses
    let board = board_with(&[
        (Position::TopLeft, Player::O),
        (Position::TopCenter, Player::O),
        (Position::Center, Player::X),
    ]);

    let mut strategy = OptimalStrategy::new();
    let pos = strategy.choose(&board, Player::X).expect("Moves remain");
    assert_eq!(pos, Position::TopRight);
}

#[test]
fn test_optimal_self_play_always_draws() {
    init_tracing();
    let mut game = Game::new();
    let mut strategy = OptimalStrategy::new();

    loop {
        let pos = strategy
            .choose(game.board(), game.to_move())
            .expect("Board not full while in progress");
        if let Some(result) = game.play(pos).expect("Strategy returns legal moves") {
            assert_eq!(result.outcome(), &Outcome::Draw);
            break;
        }
    }
}

#[test]
fn test_optimal_never_loses_to_random() {
    for seed in 0..10 {
        let mut game = Game::new();
        let mut challenger = RandomStrategy::new(seed);
        let mut defender = OptimalStrategy::new();

        loop {
            let pos = match game.to_move() {
                Player::X => challenger.choose(game.board(), Player::X),
                Player::O => defender.choose(game.board(), Player::O),
            }
            .expect("Board not full while in progress");

            if let Some(result) = game.play(pos).expect("Strategies return legal moves") {
                assert_ne!(
                    result.outcome(),
                    &Outcome::Winner(Player::X),
                    "optimal play lost to random play (seed {seed})"
                );
                break;
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  HeuristicStrategy
// ─────────────────────────────────────────────────────────────

#[test]
fn test_heuristic_blocks_immediate_win() {
    // X X _ / _ _ _ / _ _ _ with O to move: must block at TopRight
    let board = board_with(&[
        (Position::TopLeft, Player::X),
        (Position::TopCenter, Player::X),
    ]);

    let mut strategy = HeuristicStrategy::new(7);
    let pos = strategy.choose(&board, Player::O).expect("Moves remain");
    assert_eq!(pos, Position::TopRight);
}

#[test]
fn test_heuristic_prefers_win_over_block() {
    // X X _ / O O _ / _ _ _ with O to move: completing the middle row
    // beats blocking the top row
    let board = board_with(&[
        (Position::TopLeft, Player::X),
        (Position::TopCenter, Player::X),
        (Position::MiddleLeft, Player::O),
        (Position::Center, Player::O),
    ]);

    let mut strategy = HeuristicStrategy::new(7);
    let pos = strategy.choose(&board, Player::O).expect("Moves remain");
    assert_eq!(pos, Position::MiddleRight);
}

#[test]
fn test_heuristic_takes_center() {
    let board = board_with(&[(Position::TopLeft, Player::X)]);

    let mut strategy = HeuristicStrategy::new(7);
    let pos = strategy.choose(&board, Player::O).expect("Moves remain");
    assert_eq!(pos, Position::Center);
}

#[test]
fn test_heuristic_takes_corner_when_center_taken() {
    let board = board_with(&[(Position::Center, Player::X)]);
    let corners = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    for seed in 0..5 {
        let mut strategy = HeuristicStrategy::new(seed);
        let pos = strategy.choose(&board, Player::O).expect("Moves remain");
        assert!(corners.contains(&pos), "expected a corner, got {pos}");
    }
}

// ─────────────────────────────────────────────────────────────
//  RandomStrategy
// ─────────────────────────────────────────────────────────────

#[test]
fn test_random_picks_only_empty_squares() {
    let mut board = full_board();
    board.set(Position::Center, Square::Empty);

    let mut strategy = RandomStrategy::new(3);
    for _ in 0..5 {
        let pos = strategy.choose(&board, Player::X).expect("One move left");
        assert_eq!(pos, Position::Center);
    }
}

#[test]
fn test_random_is_deterministic_per_seed() {
    let board = Board::new();

    let mut first = RandomStrategy::new(42);
    let mut second = RandomStrategy::new(42);

    for _ in 0..10 {
        let a = first.choose(&board, Player::X).expect("Moves remain");
        let b = second.choose(&board, Player::X).expect("Moves remain");
        assert_eq!(a, b);
    }
}

// ─────────────────────────────────────────────────────────────
//  Shared contract
// ─────────────────────────────────────────────────────────────

#[test]
fn test_all_strategies_reject_full_board() {
    let board = full_board();

    let mut random = RandomStrategy::new(1);
    let mut heuristic = HeuristicStrategy::new(1);
    let mut optimal = OptimalStrategy::new();

    assert!(matches!(
        random.choose(&board, Player::X),
        Err(StrategyError::NoLegalMoves)
    ));
    assert!(matches!(
        heuristic.choose(&board, Player::X),
        Err(StrategyError::NoLegalMoves)
    ));
    assert!(matches!(
        optimal.choose(&board, Player::X),
        Err(StrategyError::NoLegalMoves)
    ));
}

#[test]
fn test_difficulty_builds_matching_strategy() {
    assert_eq!(Difficulty::Easy.strategy(0).name(), "random");
    assert_eq!(Difficulty::Medium.strategy(0).name(), "heuristic");
    assert_eq!(Difficulty::Hard.strategy(0).name(), "optimal");
}

#[test]
fn test_difficulty_parses_from_str() {
    assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
    assert_eq!("medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
    assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
    assert!("impossible".parse::<Difficulty>().is_err());
    assert_eq!(Difficulty::Hard.to_string(), "hard");
}
