use std::time::{Duration, Instant};

use crate::error::{IllegalMoveError, SearchError};

/// Depth and wall-clock bounds for one move computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum depth in plies; 0 means unlimited.
    max_depth: u32,
    /// Time budget; `None` means unlimited.
    time_limit: Option<Duration>,
}

impl SearchLimits {
    /// Build limits from a depth (0 = unlimited) and a time budget in
    /// milliseconds (0 = unlimited). At least one must be positive.
    pub fn new(max_depth: u32, time_limit_ms: u64) -> Result<Self, SearchError> {
        if max_depth == 0 && time_limit_ms == 0 {
            return Err(SearchError::UnboundedSearch);
        }
        Ok(SearchLimits {
            max_depth,
            time_limit: (time_limit_ms > 0).then(|| Duration::from_millis(time_limit_ms)),
        })
    }

    /// Depth-limited search with no time budget.
    pub fn depth(max_depth: u32) -> Result<Self, SearchError> {
        Self::new(max_depth, 0)
    }

    /// Time-limited search with no depth limit.
    pub fn time_ms(time_limit_ms: u64) -> Result<Self, SearchError> {
        Self::new(0, time_limit_ms)
    }

    pub fn max_depth(&self) -> Option<u32> {
        (self.max_depth > 0).then_some(self.max_depth)
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }
}

/// Search counters.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered (including leaves).
    pub nodes: u64,
    /// Branches cut off by `alpha >= beta`.
    pub cutoffs: u64,
}

/// Reasons the recursion unwinds without a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum SearchAbort {
    /// The time budget ran out.
    TimeUp,
    /// Successor generation produced a move the board rejected.
    IllegalMove(IllegalMoveError),
}

impl From<IllegalMoveError> for SearchAbort {
    fn from(err: IllegalMoveError) -> Self {
        SearchAbort::IllegalMove(err)
    }
}

/// Point in time after which the search must stop.
#[derive(Debug, Clone, Copy)]
pub(super) struct Deadline(Option<Instant>);

impl Deadline {
    pub(super) fn starting_at(start: Instant, limits: &SearchLimits) -> Self {
        Deadline(limits.time_limit().map(|budget| start + budget))
    }

    pub(super) fn expired(&self) -> bool {
        self.0.is_some_and(|at| Instant::now() >= at)
    }
}
