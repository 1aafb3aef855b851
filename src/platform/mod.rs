//! Platform capability traits
//!
//! The simulation never touches a window, GPU, or sound device. Frontends
//! implement these traits; the crate ships headless implementations for
//! tests and the demo binary.

pub mod headless;

use glam::Vec2;

use crate::sim::Rect;

/// RGBA color, 0-1 per channel
pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];

/// Keys the game reacts to. Backends map raw key codes onto these and drop
/// anything else, so unrecognized input never reaches the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Move the player paddle up
    W,
    /// Move the player paddle down
    S,
    /// Pick best-of-3 on the match-over screen
    Three,
    /// Pick best-of-5
    Five,
    /// Pick best-of-7
    Seven,
    /// Exit
    Escape,
}

/// Discrete input events drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close / process interrupt
    Quit,
    KeyDown(Key),
}

/// Drawing surface for one frame; calls accumulate until `present`
pub trait Renderer {
    fn clear(&mut self, color: Color);
    fn draw_rect(&mut self, rect: Rect, color: Color);
    fn draw_ellipse(&mut self, rect: Rect, color: Color);
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);
    /// Draws `text` horizontally centered on `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2);
    fn present(&mut self);
}

/// Keyboard state and event queue
pub trait InputSource {
    /// Level-triggered: is the key down right now?
    fn is_key_held(&self, key: Key) -> bool;
    /// Edge-triggered events since the last poll
    fn poll_events(&mut self) -> Vec<InputEvent>;
}
