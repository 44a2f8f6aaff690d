//! Open-window heuristic.
//!
//! A window is open for a player while the opponent has no piece in it. The
//! evaluation of a non-terminal position is the number of windows still open
//! for the player minus the number still open for the opponent.

use super::board::{Board, Outcome};
use super::player::Player;
use super::score::Score;
use super::window::windows;

/// Count the windows in which `player` could still complete four in a row.
pub fn open_windows(board: &Board, player: Player) -> u32 {
    let blocker = player.other().to_cell();
    let open = windows(board.rows(), board.cols())
        .filter(|window| window.iter().all(|&(r, c)| board.get(r, c) != blocker))
        .count();
    u32::try_from(open).unwrap_or(u32::MAX)
}

impl Board {
    /// Evaluate the position for `player`: `Win` if they have four in a row,
    /// `Loss` if the opponent has, otherwise the open-window difference.
    pub fn evaluate(&self, player: Player) -> Score {
        match self.outcome() {
            Outcome::Winner(winner) if winner == player => Score::Win,
            Outcome::Winner(_) => Score::Loss,
            Outcome::Draw | Outcome::Ongoing => {
                let own = i64::from(open_windows(self, player));
                let opp = i64::from(open_windows(self, player.other()));
                let diff = (own - opp).clamp(i64::from(i32::MIN), i64::from(i32::MAX));
                Score::Value(diff as i32)
            }
        }
    }
}
