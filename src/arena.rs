//! Head-to-head games between agents.

use log::info;

use crate::ai::Agent;
use crate::error::ArenaError;
use crate::game::{Board, Move, Outcome, Player};

/// Match configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Number of games to play.
    pub games: usize,
    /// Alternate which agent moves first.
    pub swap_sides: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 10,
            swap_sides: true,
        }
    }
}

/// Moves and result of one finished game.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub outcome: Outcome,
}

/// Play one game from `board` until it ends. `first` plays for whoever is
/// to move on `board`.
pub fn play_game(
    first: &mut dyn Agent,
    second: &mut dyn Agent,
    mut board: Board,
) -> Result<GameRecord, ArenaError> {
    let first_player = board.to_move();
    let mut moves = Vec::new();

    while board.outcome() == Outcome::Ongoing {
        let agent: &mut dyn Agent = if board.to_move() == first_player {
            &mut *first
        } else {
            &mut *second
        };
        let column = agent.get_move(&board).map_err(|source| ArenaError::Agent {
            agent: agent.name().to_string(),
            source,
        })?;
        if board.apply(column).is_err() {
            return Err(ArenaError::IllegalMove {
                agent: agent.name().to_string(),
                column,
                legal: board.legal_moves(),
            });
        }
        moves.push(column);
    }

    Ok(GameRecord {
        moves,
        outcome: board.outcome(),
    })
}

/// Tally of a series of games between two agents.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct MatchSummary {
    pub agent_a: String,
    pub agent_b: String,
    pub games: usize,
    pub a_wins: usize,
    pub b_wins: usize,
    pub draws: usize,
    pub total_moves: usize,
}

impl MatchSummary {
    pub fn average_length(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f32 / self.games as f32
    }

    pub fn a_win_rate(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.a_wins as f32 / self.games as f32
    }
}

/// Play `config.games` games between `a` and `b` on empty `rows × cols`
/// boards. With `swap_sides`, `b` moves first in every odd-numbered game.
pub fn play_match(
    a: &mut dyn Agent,
    b: &mut dyn Agent,
    config: &ArenaConfig,
    rows: usize,
    cols: usize,
) -> Result<MatchSummary, ArenaError> {
    let mut summary = MatchSummary {
        agent_a: a.name().to_string(),
        agent_b: b.name().to_string(),
        ..MatchSummary::default()
    };

    for game in 0..config.games {
        let a_first = !config.swap_sides || game % 2 == 0;
        let record = if a_first {
            play_game(a, b, Board::new(rows, cols))?
        } else {
            play_game(b, a, Board::new(rows, cols))?
        };
        let a_player = if a_first { Player::One } else { Player::Two };

        summary.games += 1;
        summary.total_moves += record.moves.len();
        let result = match record.outcome {
            Outcome::Winner(winner) if winner == a_player => {
                summary.a_wins += 1;
                summary.agent_a.as_str()
            }
            Outcome::Winner(_) => {
                summary.b_wins += 1;
                summary.agent_b.as_str()
            }
            _ => {
                summary.draws += 1;
                "nobody (draw)"
            }
        };
        info!(
            "game {}/{}: {} moved first, won by {} in {} moves",
            game + 1,
            config.games,
            if a_first { &summary.agent_a } else { &summary.agent_b },
            result,
            record.moves.len()
        );
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{AlphaBetaAgent, RandomAgent};
    use crate::error::SearchError;

    /// Always answers the same column, full or not.
    struct Stubborn(Move);

    impl Agent for Stubborn {
        fn get_move(&mut self, _board: &Board) -> Result<Move, SearchError> {
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "Stubborn"
        }
    }

    #[test]
    fn game_record_replays_to_the_same_outcome() {
        let mut a = RandomAgent::with_seed(1);
        let mut b = RandomAgent::with_seed(2);
        let record = play_game(&mut a, &mut b, Board::standard()).unwrap();

        let mut board = Board::standard();
        for &mv in &record.moves {
            board.apply(mv).unwrap();
        }
        assert_eq!(board.outcome(), record.outcome);
        assert!(record.outcome.is_terminal());
    }

    #[test]
    fn illegal_move_is_reported() {
        let mut a = Stubborn(0);
        let mut b = Stubborn(0);
        let err = play_game(&mut a, &mut b, Board::new(2, 3)).unwrap_err();
        assert!(matches!(err, ArenaError::IllegalMove { column: 0, .. }));
    }

    #[test]
    fn finished_board_plays_no_moves() {
        let board = Board::from_rows(&["XO", "OX", "XO"]).unwrap();
        let mut a = Stubborn(0);
        let mut b = Stubborn(1);
        let record = play_game(&mut a, &mut b, board).unwrap();
        assert!(record.moves.is_empty());
        assert_eq!(record.outcome, Outcome::Draw);
    }

    #[test]
    fn match_tallies_every_game() {
        let mut a = AlphaBetaAgent::with_depth(2).unwrap();
        let mut b = RandomAgent::with_seed(3);
        let config = ArenaConfig {
            games: 4,
            swap_sides: true,
        };
        let summary = play_match(&mut a, &mut b, &config, 6, 7).unwrap();

        assert_eq!(summary.games, 4);
        assert_eq!(summary.a_wins + summary.b_wins + summary.draws, 4);
        assert!(summary.average_length() >= 7.0);
        assert_eq!(summary.agent_a, "AlphaBeta");
        assert_eq!(summary.agent_b, "Random");
    }

    #[test]
    fn empty_summary_rates_are_zero() {
        let summary = MatchSummary::default();
        assert_eq!(summary.average_length(), 0.0);
        assert_eq!(summary.a_win_rate(), 0.0);
    }
}
