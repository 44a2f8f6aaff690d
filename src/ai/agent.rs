use crate::error::SearchError;
use crate::game::{Board, Move};

/// Universal interface for automated players.
///
/// The harness calls [`Agent::get_move`] once per turn when it is this
/// agent's move, then applies the returned move to its own board. Agents
/// never mutate the board they are given.
pub trait Agent {
    /// Select a legal column for the player to move on `board`.
    ///
    /// Returns [`SearchError::NoLegalMove`] when the game is already over;
    /// callers are expected to check [`Board::outcome`] first.
    fn get_move(&mut self, board: &Board) -> Result<Move, SearchError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
