//! Frame-loop driver
//!
//! Owns the game state and the platform collaborators: maps raw input onto
//! [`TickInput`], advances the simulation, dispatches audio cues, and draws
//! the frame. [`App::run`] paces one tick per frame at `TICK_RATE` and drops
//! to a slower bounded poll while the match-over screen waits for a choice,
//! so the wait never busy-spins.

use std::thread;
use std::time::{Duration, Instant};

use crate::audio::{self, AudioSink};
use crate::consts::*;
use crate::platform::{InputEvent, InputSource, Key, Renderer};
use crate::renderer::{draw_frame, draw_match_over};
use crate::sim::{GameEvent, GamePhase, GameState, ReplayChoice, TickInput, tick};

/// Game instance holding the state and its collaborators
pub struct App<R, I, A> {
    state: GameState,
    renderer: R,
    input: I,
    audio: A,
    /// Replay key pressed on the match-over screen, consumed by the next tick
    pending_replay: Option<ReplayChoice>,
    events: Vec<GameEvent>,
}

impl<R: Renderer, I: InputSource, A: AudioSink> App<R, I, A> {
    pub fn new(seed: u64, renderer: R, input: I, audio: A) -> Self {
        Self {
            state: GameState::new(seed),
            renderer,
            input,
            audio,
            pending_replay: None,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Replace the game state (restore a snapshot, or stage a test scenario)
    pub fn load_state(&mut self, state: GameState) {
        self.state = state;
        self.pending_replay = None;
    }

    /// Run until the player quits, pacing frames against the wall clock
    pub fn run(&mut self) {
        let frame = Duration::from_secs_f64(1.0 / f64::from(TICK_RATE));

        loop {
            let started = Instant::now();
            if !self.step() {
                return;
            }
            match self.state.phase {
                GamePhase::MatchOver { .. } => {
                    thread::sleep(Duration::from_millis(REPLAY_POLL_MS));
                }
                GamePhase::Playing => {
                    thread::sleep(frame.saturating_sub(started.elapsed()));
                }
            }
        }
    }

    /// One frame without pacing: poll input, tick, dispatch cues, draw.
    ///
    /// Returns `false` once the player quits.
    pub fn step(&mut self) -> bool {
        for event in self.input.poll_events() {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => return false,
                InputEvent::KeyDown(key) => {
                    // Selector keys only mean anything on the match-over screen
                    if let GamePhase::MatchOver { .. } = self.state.phase {
                        self.pending_replay = match key {
                            Key::Three => Some(ReplayChoice::BestOf3),
                            Key::Five => Some(ReplayChoice::BestOf5),
                            Key::Seven => Some(ReplayChoice::BestOf7),
                            _ => self.pending_replay,
                        };
                    }
                }
            }
        }

        let input = TickInput {
            move_up: self.input.is_key_held(Key::W),
            move_down: self.input.is_key_held(Key::S),
            replay: self.pending_replay.take(),
        };

        self.events.clear();
        tick(&mut self.state, &input, &mut self.events);

        for event in &self.events {
            if let Some(cue) = audio::cue_for(event) {
                self.audio.play(cue);
            }
        }

        match self.state.phase {
            GamePhase::Playing => draw_frame(&mut self.renderer, &self.state),
            GamePhase::MatchOver { winner } => {
                draw_match_over(&mut self.renderer, &self.state, winner)
            }
        }

        true
    }
}
