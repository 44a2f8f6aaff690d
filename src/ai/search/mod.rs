//! Alpha-beta game-tree search bounded by depth and/or wall-clock time.
//!
//! The engine clones the caller's board once per move computation and walks
//! that single scratch board depth-first, undoing every move on the way back
//! up (also when the search is aborted), so sibling branches never observe
//! each other's pieces and the caller's board is never touched.
//!
//! The player to move at the root is always the maximizing player; plies
//! alternate between maximizing and minimizing. A timeout unwinds the whole
//! recursion as `Err(SearchAbort::TimeUp)` so that no partially searched
//! subtree can leak a value into the alpha/beta bounds above it. The move
//! recorded at the root before the timeout is still returned.

mod limits;

use std::time::{Duration, Instant};

use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use self::limits::{Deadline, SearchAbort};
pub use self::limits::{SearchLimits, SearchStats};
use super::heuristic::{Heuristic, OpenWindowHeuristic};
use crate::error::SearchError;
use crate::game::{Board, Move, Player, Score};

/// Diagnostics for one `choose_move` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub stats: SearchStats,
    /// Deepest depth limit whose search ran to completion.
    pub completed_depth: Option<u32>,
    /// The time budget ran out before the search finished.
    pub timed_out: bool,
    /// The engine had no legal move recorded and picked one at random.
    pub random_fallback: bool,
    pub elapsed: Duration,
}

/// Result of a move computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    /// Minimax value of the root for the last completed search, from the
    /// point of view of the player to move.
    pub value: Option<Score>,
    pub report: SearchReport,
}

/// State shared by every frame of one search.
struct SearchContext<'h> {
    heuristic: &'h dyn Heuristic,
    root_player: Player,
    depth_limit: Option<u32>,
    deadline: Deadline,
    stats: SearchStats,
    /// Best root move found so far in the current iteration.
    root_best: Option<Move>,
}

impl SearchContext<'_> {
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Result<Score, SearchAbort> {
        if self.deadline.expired() {
            return Err(SearchAbort::TimeUp);
        }
        self.stats.nodes += 1;

        if board.outcome().is_terminal() || self.depth_limit.is_some_and(|limit| depth >= limit) {
            return Ok(self.heuristic.evaluate(board, self.root_player));
        }

        let mut value = if maximizing { Score::Loss } else { Score::Win };
        for mv in board.legal_moves() {
            board.apply(mv)?;
            let child = self.alpha_beta(board, depth + 1, alpha, beta, !maximizing);
            board.undo(mv);
            let child = child?;

            if maximizing {
                value = value.max(child);
                if value > alpha {
                    alpha = value;
                    if depth == 0 {
                        self.root_best = Some(mv);
                    }
                }
            } else {
                value = value.min(child);
                beta = beta.min(value);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok(value)
    }

    fn search_root(&mut self, board: &mut Board) -> Result<Score, SearchAbort> {
        self.root_best = None;
        self.alpha_beta(board, 0, Score::NEG_INFINITY, Score::INFINITY, true)
    }
}

/// What a search mode hands back before validation.
struct Candidate {
    best_move: Option<Move>,
    value: Option<Score>,
    completed_depth: Option<u32>,
    timed_out: bool,
}

/// Alpha-beta search engine.
pub struct AlphaBeta {
    heuristic: Box<dyn Heuristic>,
    iterative_deepening: bool,
    rng: StdRng,
}

impl AlphaBeta {
    pub fn new() -> Self {
        AlphaBeta {
            heuristic: Box::new(OpenWindowHeuristic),
            iterative_deepening: false,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seed the generator used for the random fallback move.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_heuristic(mut self, heuristic: Box<dyn Heuristic>) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Re-run the depth-limited search at depths 1, 2, ... until a limit is
    /// hit, keeping the last fully completed depth's move.
    pub fn with_iterative_deepening(mut self, enabled: bool) -> Self {
        self.iterative_deepening = enabled;
        self
    }

    pub fn iterative_deepening(&self) -> bool {
        self.iterative_deepening
    }

    /// Compute a move for the player to move on `board`.
    ///
    /// The returned move is always legal on `board`. Fails with
    /// [`SearchError::NoLegalMove`] if the game is already over.
    pub fn choose_move(
        &mut self,
        board: &Board,
        limits: SearchLimits,
    ) -> Result<SearchResult, SearchError> {
        let legal = board.legal_moves();
        if legal.is_empty() || board.outcome().is_terminal() {
            return Err(SearchError::NoLegalMove);
        }

        let started = Instant::now();
        let mut ctx = SearchContext {
            heuristic: self.heuristic.as_ref(),
            root_player: board.to_move(),
            depth_limit: limits.max_depth(),
            deadline: Deadline::starting_at(started, &limits),
            stats: SearchStats::default(),
            root_best: None,
        };
        let mut scratch = board.clone();

        let candidate = if self.iterative_deepening {
            deepen(&mut ctx, &mut scratch, &limits)?
        } else {
            fixed_depth(&mut ctx, &mut scratch, &limits)?
        };
        debug_assert_eq!(&scratch, board, "search left the scratch board modified");
        let stats = ctx.stats;

        let (best_move, random_fallback) = match candidate.best_move {
            Some(mv) if legal.contains(&mv) => (mv, false),
            recorded => {
                let mv = legal[self.rng.random_range(0..legal.len())];
                warn!("search produced no usable move ({recorded:?}); picking random column {mv}");
                (mv, true)
            }
        };

        let report = SearchReport {
            stats,
            completed_depth: candidate.completed_depth,
            timed_out: candidate.timed_out,
            random_fallback,
            elapsed: started.elapsed(),
        };
        debug!(
            "{} chose column {} (value {}, depth {:?}, {} nodes, {} cutoffs, {:?}{})",
            board.to_move().name(),
            best_move,
            candidate
                .value
                .map_or_else(|| "n/a".to_string(), |v| v.to_string()),
            report.completed_depth,
            report.stats.nodes,
            report.stats.cutoffs,
            report.elapsed,
            if report.timed_out { ", timed out" } else { "" },
        );

        Ok(SearchResult {
            best_move,
            value: candidate.value,
            report,
        })
    }
}

impl Default for AlphaBeta {
    fn default() -> Self {
        Self::new()
    }
}

/// One alpha-beta pass with the configured depth limit (possibly unlimited).
fn fixed_depth(
    ctx: &mut SearchContext<'_>,
    board: &mut Board,
    limits: &SearchLimits,
) -> Result<Candidate, SearchError> {
    match ctx.search_root(board) {
        Ok(value) => Ok(Candidate {
            best_move: ctx.root_best,
            value: Some(value),
            completed_depth: Some(
                limits
                    .max_depth()
                    .unwrap_or_else(|| depth_to_fill(board)),
            ),
            timed_out: false,
        }),
        Err(SearchAbort::TimeUp) => Ok(Candidate {
            best_move: ctx.root_best,
            value: None,
            completed_depth: None,
            timed_out: true,
        }),
        Err(SearchAbort::IllegalMove(err)) => Err(err.into()),
    }
}

/// Iterative deepening over [`fixed_depth`]-style passes.
fn deepen(
    ctx: &mut SearchContext<'_>,
    board: &mut Board,
    limits: &SearchLimits,
) -> Result<Candidate, SearchError> {
    let max_depth = limits
        .max_depth()
        .map_or(depth_to_fill(board), |limit| limit.min(depth_to_fill(board)));

    let mut candidate = Candidate {
        best_move: None,
        value: None,
        completed_depth: None,
        timed_out: false,
    };

    for depth in 1..=max_depth {
        ctx.depth_limit = Some(depth);
        match ctx.search_root(board) {
            Ok(value) => {
                candidate.best_move = ctx.root_best.or(candidate.best_move);
                candidate.value = Some(value);
                candidate.completed_depth = Some(depth);
                trace!(
                    "depth {depth} complete: column {:?}, value {value}, {} nodes",
                    candidate.best_move,
                    ctx.stats.nodes
                );
                if !value.is_finite() {
                    break;
                }
            }
            Err(SearchAbort::TimeUp) => {
                candidate.timed_out = true;
                if candidate.best_move.is_none() {
                    candidate.best_move = ctx.root_best;
                }
                break;
            }
            Err(SearchAbort::IllegalMove(err)) => return Err(err.into()),
        }
    }

    Ok(candidate)
}

/// Plies left until the board is full; no search needs to go deeper.
fn depth_to_fill(board: &Board) -> u32 {
    u32::try_from(board.empty_cells()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
