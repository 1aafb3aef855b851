//! Scene composition
//!
//! Turns a [`crate::sim::GameState`] into draw calls on whatever
//! [`crate::platform::Renderer`] the frontend provides.

pub mod scene;

pub use scene::{draw_frame, draw_match_over};
