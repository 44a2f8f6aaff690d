//! # Connect Four alpha-beta
//!
//! A Connect Four engine built around a time-bounded alpha-beta search with
//! an open-window heuristic, plus a text harness for playing against it and
//! an arena for pitting agents against each other.
//!
//! ## Modules
//!
//! - [`game`]: Board, players, outcome detection, heuristic evaluation
//! - [`ai`]: Agent trait, alpha-beta search engine, random player
//! - [`arena`]: Head-to-head games and match summaries
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types
//! - [`logging`]: `flexi_logger` setup shared by the binaries

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
