use log::debug;

use super::agent::Agent;
use super::search::{AlphaBeta, SearchLimits, SearchReport};
use crate::error::SearchError;
use crate::game::{Board, Move};

/// Search budget and behaviour of an alpha-beta player.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum depth in plies; 0 means unlimited.
    pub max_depth: u32,
    /// Time budget per move in milliseconds; 0 means unlimited.
    pub time_limit_ms: u64,
    /// Deepen one ply at a time until a limit is hit.
    pub iterative_deepening: bool,
    /// Seed for the random fallback move; entropy from the OS when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: 0,
            time_limit_ms: 2000,
            iterative_deepening: true,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn limits(&self) -> Result<SearchLimits, SearchError> {
        SearchLimits::new(self.max_depth, self.time_limit_ms)
    }
}

/// Move selection policy: one alpha-beta search per turn.
pub struct AlphaBetaAgent {
    engine: AlphaBeta,
    limits: SearchLimits,
    last_report: Option<SearchReport>,
}

impl AlphaBetaAgent {
    pub fn new(engine: AlphaBeta, limits: SearchLimits) -> Self {
        AlphaBetaAgent {
            engine,
            limits,
            last_report: None,
        }
    }

    /// Fixed-depth search without a time budget.
    pub fn with_depth(max_depth: u32) -> Result<Self, SearchError> {
        Ok(Self::new(AlphaBeta::new(), SearchLimits::depth(max_depth)?))
    }

    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        let mut engine = AlphaBeta::new().with_iterative_deepening(config.iterative_deepening);
        if let Some(seed) = config.seed {
            engine = engine.with_seed(seed);
        }
        Ok(Self::new(engine, config.limits()?))
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Diagnostics of the most recent search.
    pub fn last_report(&self) -> Option<&SearchReport> {
        self.last_report.as_ref()
    }
}

impl Agent for AlphaBetaAgent {
    fn get_move(&mut self, board: &Board) -> Result<Move, SearchError> {
        let result = self.engine.choose_move(board, self.limits)?;
        debug_assert!(board.is_legal(result.best_move));
        debug!(
            "{}: column {} after {:?} ({} nodes)",
            self.name(),
            result.best_move,
            result.report.elapsed,
            result.report.stats.nodes
        );
        self.last_report = Some(result.report);
        Ok(result.best_move)
    }

    fn name(&self) -> &str {
        if self.engine.iterative_deepening() {
            "AlphaBeta (iterative)"
        } else {
            "AlphaBeta"
        }
    }
}
