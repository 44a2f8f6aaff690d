use crate::game::{Board, Player, Score};

/// Trait for evaluating a board position from a player's perspective.
///
/// Implementations must return `Score::Win` / `Score::Loss` for positions
/// where `player` / the opponent already has four in a row; the search relies
/// on those sentinels to recognise decided games.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> Score;
}

/// Default heuristic: open four-in-a-row windows for `player` minus those
/// still open for the opponent.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenWindowHeuristic;

impl Heuristic for OpenWindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> Score {
        board.evaluate(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_is_zero_for_both_sides() {
        let board = Board::standard();
        let h = OpenWindowHeuristic;
        assert_eq!(h.evaluate(&board, Player::One), Score::Value(0));
        assert_eq!(h.evaluate(&board, Player::Two), Score::Value(0));
    }

    #[test]
    fn center_preference() {
        let h = OpenWindowHeuristic;
        let center = Board::standard().with_move(3).unwrap();
        let edge = Board::standard().with_move(0).unwrap();

        let score_center = h.evaluate(&center, Player::One);
        let score_edge = h.evaluate(&edge, Player::One);
        assert!(
            score_center > score_edge,
            "Center ({score_center}) should score higher than edge ({score_edge})"
        );
    }

    #[test]
    fn scores_are_antisymmetric_without_a_winner() {
        let mut board = Board::standard();
        for col in [3, 3, 2, 4, 4] {
            board.apply(col).unwrap();
        }
        let h = OpenWindowHeuristic;
        assert_eq!(
            h.evaluate(&board, Player::One),
            -h.evaluate(&board, Player::Two)
        );
    }
}
