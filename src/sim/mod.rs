//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick steps only (no wall-clock time)
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, resolve_paddle_collision};
pub use state::{
    Arena, Ball, GameEvent, GamePhase, GameState, MatchScore, Paddle, RngState, Side,
};
pub use tick::{ReplayChoice, TickInput, tick};
