//! Automated players: the agent interface, the alpha-beta search engine and
//! the move policies built on top of it.

mod agent;
mod alphabeta;
pub mod heuristic;
mod random;
pub mod search;

pub use agent::Agent;
pub use alphabeta::{AlphaBetaAgent, SearchConfig};
pub use heuristic::{Heuristic, OpenWindowHeuristic};
pub use random::RandomAgent;
pub use search::{AlphaBeta, SearchLimits, SearchReport, SearchResult, SearchStats};
