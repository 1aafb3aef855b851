//! Rally Pong - a classic two-paddle court duel
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddles, scoring, match flow)
//! - `platform`: Renderer/input capability traits + headless backends
//! - `renderer`: Scene composition over the platform renderer trait
//! - `audio`: Sound cue vocabulary and playback seam
//! - `settings`: Player preferences persisted as JSON
//! - `app`: Frame-loop driver tying the collaborators together

pub mod app;
pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate; the driver paces one tick per frame
    pub const TICK_RATE: u32 = 60;
    /// Poll delay while the match-over screen waits for a choice
    pub const REPLAY_POLL_MS: u64 = 100;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Paddle defaults - player defends the left goal line, AI the right
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Player paddle inset from the left edge
    pub const PLAYER_X: f32 = 10.0;
    /// Vertical distance a paddle covers per tick (human and AI alike)
    pub const PADDLE_STEP: f32 = 10.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 7.0;
    /// Horizontal ball speed per tick (sign carries direction)
    pub const BALL_SPEED: f32 = 7.0;
    /// A serve randomizes the vertical component within this magnitude
    pub const SERVE_MAX_VY: f32 = 5.0;

    /// First score to reach this wins the match
    pub const DEFAULT_WINNING_SCORE: u32 = 5;
}
