//! Coin Collector - a single-screen arcade game.
//!
//! Core modules:
//! - `entities`: pure game data (player, coin, roamers, progress)
//! - `compute`: per-frame simulation, collisions and stage advance
//! - `progress`: timer and stage rules
//! - `screen`: start menu / playing / game over state machine
//! - `viewport`: 800×600 canvas to terminal cell mapping
//! - `input`: held-key tracking for terminals

pub mod compute;
pub mod consts;
pub mod entities;
pub mod error;
pub mod input;
pub mod progress;
pub mod screen;
pub mod viewport;

pub use error::GameError;
