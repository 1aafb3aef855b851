//! Headless collaborator implementations
//!
//! Used by the demo binary and the loop tests; none of them open a window
//! or read a real keyboard.

use std::collections::VecDeque;

use glam::Vec2;

use super::{Color, InputEvent, InputSource, Key, Renderer};
use crate::sim::Rect;

/// Renderer that swallows every draw call and counts presented frames
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub frames_presented: u64,
}

impl Renderer for HeadlessRenderer {
    fn clear(&mut self, _color: Color) {}
    fn draw_rect(&mut self, _rect: Rect, _color: Color) {}
    fn draw_ellipse(&mut self, _rect: Rect, _color: Color) {}
    fn draw_line(&mut self, _from: Vec2, _to: Vec2, _color: Color) {}
    fn draw_text(&mut self, _text: &str, _pos: Vec2) {}

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}

/// Input source that replays a fixed script, then reports `Quit`.
///
/// `held` keys are reported as held on every poll; the script supplies one
/// batch of discrete events per poll. Once the script runs dry the source
/// quits, which bounds every headless run.
#[derive(Debug)]
pub struct ScriptedInput {
    held: Vec<Key>,
    script: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(held: Vec<Key>) -> Self {
        Self {
            held,
            script: VecDeque::new(),
        }
    }

    /// Append `polls` event-free frames
    pub fn idle(mut self, polls: usize) -> Self {
        for _ in 0..polls {
            self.script.push_back(Vec::new());
        }
        self
    }

    /// Append one frame carrying a key press
    pub fn then_press(mut self, key: Key) -> Self {
        self.script.push_back(vec![InputEvent::KeyDown(key)]);
        self
    }
}

impl InputSource for ScriptedInput {
    fn is_key_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.script
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit])
    }
}
