use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{AlphaBeta, SearchLimits};
use crate::error::SearchError;
use crate::game::{Board, Move, Player, Score};

/// Un-pruned minimax over the same tree, with the same leaf evaluation and
/// the same root tie-break (first strictly greater value wins).
fn minimax_root(board: &Board, limit: Option<u32>) -> (Option<Move>, Score) {
    let root = board.to_move();
    let mut best = None;
    let mut best_value = Score::Loss;
    for mv in board.legal_moves() {
        let child = board.with_move(mv).unwrap();
        let value = minimax(&child, 1, limit, root, false);
        if value > best_value {
            best_value = value;
            best = Some(mv);
        }
    }
    (best, best_value)
}

fn minimax(board: &Board, depth: u32, limit: Option<u32>, root: Player, maximizing: bool) -> Score {
    if board.outcome().is_terminal() || limit.is_some_and(|l| depth >= l) {
        return board.evaluate(root);
    }
    let values = board.legal_moves().into_iter().map(|mv| {
        let child = board.with_move(mv).unwrap();
        minimax(&child, depth + 1, limit, root, !maximizing)
    });
    let value = if maximizing { values.max() } else { values.min() };
    value.unwrap()
}

fn play(board: &mut Board, moves: &[Move]) {
    for &mv in moves {
        board.apply(mv).unwrap();
    }
}

/// Random non-terminal position reached by `plies` random moves.
fn random_position(rng: &mut StdRng, rows: usize, cols: usize, plies: usize) -> Option<Board> {
    let mut board = Board::new(rows, cols);
    for _ in 0..plies {
        let legal = board.legal_moves();
        board.apply(legal[rng.random_range(0..legal.len())]).unwrap();
        if board.outcome().is_terminal() {
            return None;
        }
    }
    Some(board)
}

#[test]
fn depth_one_on_empty_board_maximizes_immediate_evaluation() {
    let board = Board::standard();
    let mut engine = AlphaBeta::new();
    let result = engine
        .choose_move(&board, SearchLimits::depth(1).unwrap())
        .unwrap();

    let mut expected = None;
    let mut expected_value = Score::Loss;
    for mv in board.legal_moves() {
        let value = board.with_move(mv).unwrap().evaluate(Player::One);
        if value > expected_value {
            expected_value = value;
            expected = Some(mv);
        }
    }

    assert_eq!(Some(result.best_move), expected);
    assert_eq!(result.best_move, 3);
    assert_eq!(result.value, Some(Score::Value(7)));
    assert_eq!(result.report.completed_depth, Some(1));
    assert!(!result.report.random_fallback);
}

#[test]
fn takes_the_horizontal_win_in_column_six() {
    // X holds row 0 columns 3-5; O has covered column 2 so only column 6 wins.
    let mut board = Board::standard();
    play(&mut board, &[3, 2, 4, 2, 5, 0]);
    assert_eq!(board.to_move(), Player::One);

    for depth in 1..=4 {
        let mut engine = AlphaBeta::new();
        let result = engine
            .choose_move(&board, SearchLimits::depth(depth).unwrap())
            .unwrap();
        assert_eq!(result.best_move, 6, "depth {depth}");
        assert_eq!(result.value, Some(Score::Win));
    }

    let mut engine = AlphaBeta::new().with_iterative_deepening(true);
    let result = engine
        .choose_move(&board, SearchLimits::time_ms(500).unwrap())
        .unwrap();
    assert_eq!(result.best_move, 6);
    assert_eq!(result.report.completed_depth, Some(1));
}

#[test]
fn blocks_opponent_win() {
    // O has row 0 columns 0-2; X must play column 3.
    let mut board = Board::standard();
    play(&mut board, &[6, 0, 6, 1, 5, 2]);

    for depth in [2, 4] {
        let mut engine = AlphaBeta::new();
        let result = engine
            .choose_move(&board, SearchLimits::depth(depth).unwrap())
            .unwrap();
        assert_eq!(result.best_move, 3, "depth {depth}");
    }
}

#[test]
fn alpha_beta_matches_minimax_on_small_boards() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut checked = 0;
    while checked < 40 {
        let plies = rng.random_range(0..=8);
        let Some(board) = random_position(&mut rng, 4, 4, plies) else {
            continue;
        };

        for depth in 1..=4 {
            let limits = SearchLimits::depth(depth).unwrap();
            let result = AlphaBeta::new().choose_move(&board, limits).unwrap();
            let (expected_move, expected_value) = minimax_root(&board, Some(depth));

            assert_eq!(result.value, Some(expected_value), "depth {depth}\n{board}");
            if let Some(mv) = expected_move {
                assert_eq!(result.best_move, mv, "depth {depth}\n{board}");
            }
        }
        checked += 1;
    }
}

#[test]
fn unlimited_depth_matches_minimax_near_the_end() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut checked = 0;
    while checked < 10 {
        let Some(board) = random_position(&mut rng, 4, 4, 8) else {
            continue;
        };
        let limits = SearchLimits::time_ms(600_000).unwrap();
        let result = AlphaBeta::new().choose_move(&board, limits).unwrap();
        let (expected_move, expected_value) = minimax_root(&board, None);

        assert!(!result.report.timed_out);
        assert_eq!(result.value, Some(expected_value), "\n{board}");
        if let Some(mv) = expected_move {
            assert_eq!(result.best_move, mv, "\n{board}");
        }
        checked += 1;
    }
}

#[test]
fn pruning_visits_fewer_nodes_than_minimax() {
    let board = Board::standard();
    let result = AlphaBeta::new()
        .choose_move(&board, SearchLimits::depth(4).unwrap())
        .unwrap();
    // 1 + 7 + 49 + 343 + 2401 nodes without pruning
    assert!(result.report.stats.nodes < 2801);
    assert!(result.report.stats.cutoffs > 0);
}

#[test]
fn iterative_deepening_agrees_with_fixed_depth_values() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut checked = 0;
    while checked < 15 {
        let plies = rng.random_range(0..=10);
        let Some(board) = random_position(&mut rng, 6, 7, plies) else {
            continue;
        };
        let limits = SearchLimits::depth(4).unwrap();
        let fixed = AlphaBeta::new().choose_move(&board, limits).unwrap();
        let deepened = AlphaBeta::new()
            .with_iterative_deepening(true)
            .choose_move(&board, limits)
            .unwrap();

        assert_eq!(fixed.value, deepened.value, "\n{board}");
        if fixed.value.is_some_and(Score::is_finite) {
            assert_eq!(fixed.best_move, deepened.best_move, "\n{board}");
            assert_eq!(deepened.report.completed_depth, Some(4));
        }
        checked += 1;
    }
}

#[test]
fn one_millisecond_budget_still_returns_a_legal_move() {
    let mut rng = StdRng::seed_from_u64(3);
    for iterative in [false, true] {
        let mut boards = vec![Board::standard()];
        boards.extend((0..10).filter_map(|_| random_position(&mut rng, 6, 7, 12)));

        for board in boards {
            let mut engine = AlphaBeta::new().with_iterative_deepening(iterative);
            let result = engine
                .choose_move(&board, SearchLimits::time_ms(1).unwrap())
                .unwrap();
            assert!(board.legal_moves().contains(&result.best_move));
        }
    }
}

#[test]
fn unlimited_depth_on_full_size_board_times_out() {
    let board = Board::standard();
    let result = AlphaBeta::new()
        .choose_move(&board, SearchLimits::time_ms(20).unwrap())
        .unwrap();
    assert!(result.report.timed_out);
    assert_eq!(result.value, None);
    assert!(board.is_legal(result.best_move));
}

#[test]
fn search_does_not_modify_the_callers_board() {
    let mut board = Board::standard();
    play(&mut board, &[3, 3, 4]);
    let before = board.clone();

    let mut engine = AlphaBeta::new();
    engine
        .choose_move(&board, SearchLimits::depth(5).unwrap())
        .unwrap();
    engine
        .choose_move(&board, SearchLimits::time_ms(5).unwrap())
        .unwrap();
    assert_eq!(board, before);
}

#[test]
fn all_moves_losing_falls_back_to_a_random_legal_move() {
    // O threatens both ends of row 0; X cannot stop both.
    let board = Board::from_rows(&[
        ".......", //
        ".......", //
        ".......", //
        ".......", //
        ".XXX...", //
        ".OOO...", //
    ])
    .unwrap();
    assert_eq!(board.to_move(), Player::One);

    let mut engine = AlphaBeta::new().with_seed(17);
    let result = engine
        .choose_move(&board, SearchLimits::depth(2).unwrap())
        .unwrap();
    assert_eq!(result.value, Some(Score::Loss));
    assert!(result.report.random_fallback);
    assert!(board.is_legal(result.best_move));
}

#[test]
fn finished_game_has_no_legal_move() {
    let won = Board::from_rows(&[
        "....", //
        "OOO.", //
        "XXXX", //
    ])
    .unwrap();
    let mut engine = AlphaBeta::new();
    let limits = SearchLimits::depth(3).unwrap();
    assert_eq!(
        engine.choose_move(&won, limits),
        Err(SearchError::NoLegalMove)
    );

    let full = Board::from_rows(&["XO", "OX", "XO"]).unwrap();
    assert_eq!(
        engine.choose_move(&full, limits),
        Err(SearchError::NoLegalMove)
    );
}
