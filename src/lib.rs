//! # Connect Four Engine
//!
//! An artificial opponent for Connect Four: depth-limited minimax with
//! alpha-beta pruning over a board that is mutated and restored in place.
//!
//! ## Modules
//!
//! - [`game`]: Board, sides, win detection, live game state
//! - [`ai`]: Minimax engine, positional evaluator, difficulty levels, agents
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
