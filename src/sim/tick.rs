//! Per-tick simulation step
//!
//! The fixed order inside [`tick`] is load-bearing: input, ball motion,
//! paddle deflection, scoring, AI tracking, then the win check.

use super::collision::resolve_paddle_collision;
use super::state::{GameEvent, GamePhase, GameState, Side};
use crate::consts::*;

/// Replay choice offered on the match-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayChoice {
    BestOf3,
    BestOf5,
    BestOf7,
}

impl ReplayChoice {
    /// First-to score for the chosen series length (⌈N/2⌉)
    pub fn winning_score(self) -> u32 {
        match self {
            ReplayChoice::BestOf3 => 2,
            ReplayChoice::BestOf5 => 3,
            ReplayChoice::BestOf7 => 4,
        }
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Move-up key held this tick
    pub move_up: bool,
    /// Move-down key held this tick
    pub move_down: bool,
    /// Replay choice; honored only while the match is over
    pub replay: Option<ReplayChoice>,
}

/// Advance the game state by one tick, appending gameplay events for the
/// driver to dispatch (audio cues, logging).
pub fn tick(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    if let GamePhase::MatchOver { .. } = state.phase {
        // Gameplay is frozen; only a replay choice gets through
        if let Some(choice) = input.replay {
            state.start_series(choice.winning_score(), events);
        }
        return;
    }

    state.time_ticks += 1;

    // Held keys apply independently; opposite holds cancel out
    if input.move_up {
        state.player.move_by(-PADDLE_STEP, &state.arena);
    }
    if input.move_down {
        state.player.move_by(PADDLE_STEP, &state.arena);
    }

    state.ball.advance(&state.arena, events);

    // Paddle deflection wins over the goal-line check below
    if let Some(side) = resolve_paddle_collision(&mut state.ball, &state.player, &state.ai) {
        events.push(GameEvent::PaddleHit(side));
    }

    if state.ball.pos.x <= 0.0 {
        score_point(state, Side::Ai, events);
    } else if state.ball.pos.x >= state.arena.width {
        score_point(state, Side::Player, events);
    }

    state.ai.auto_track(&state.ball, &state.arena);

    if let Some(winner) = state.score.winner() {
        state.phase = GamePhase::MatchOver { winner };
        events.push(GameEvent::MatchWon(winner));
    }
}

fn score_point(state: &mut GameState, side: Side, events: &mut Vec<GameEvent>) {
    state.score.record_point(side);
    events.push(GameEvent::PointScored(side));
    let mut rng = state.rng_state.next_rng();
    state.ball.reset(&state.arena, &mut rng, events);
}
