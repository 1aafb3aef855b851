//! Collision detection and response
//!
//! Everything here is axis-aligned: the ball and both paddles are rectangles,
//! and a paddle hit simply repositions the ball flush against the paddle face
//! and reverses its horizontal velocity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle, Side};

/// An axis-aligned rectangle; `pos` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Overlap test; rectangles that only touch edges do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// Resolve a ball/paddle overlap, if any, and report which paddle was hit.
///
/// The two checks are mutually exclusive per tick, and the player's paddle is
/// tested first. A hit snaps the ball to the paddle's court-side face (the
/// player's trailing edge, the AI's leading edge) and reverses `vel.x`, so a
/// deflected ball can never register as a goal on the same tick.
pub fn resolve_paddle_collision(ball: &mut Ball, player: &Paddle, ai: &Paddle) -> Option<Side> {
    if ball.rect().intersects(&player.rect()) {
        ball.pos.x = player.pos.x + player.size.x;
        ball.vel.x = -ball.vel.x;
        Some(Side::Player)
    } else if ball.rect().intersects(&ai.rect()) {
        ball.pos.x = ai.pos.x - ball.size.x;
        ball.vel.x = -ball.vel.x;
        Some(Side::Ai)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Arena, RngState};

    fn test_ball(x: f32, y: f32, vx: f32) -> Ball {
        let arena = Arena::default();
        let mut rng = RngState::new(1).next_rng();
        let mut ball = Ball::serve(&arena, &mut rng);
        ball.pos = Vec2::new(x, y);
        ball.vel = Vec2::new(vx, 0.0);
        ball
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(20.0, 0.0, 10.0, 10.0)));
        // Shared edge is not an overlap
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_player_hit_snaps_to_trailing_edge() {
        let player = Paddle::new(PLAYER_X, 250.0);
        let ai = Paddle::new(ARENA_WIDTH - 2.0 * PADDLE_WIDTH, 250.0);
        let mut ball = test_ball(14.0, 280.0, -BALL_SPEED);

        let hit = resolve_paddle_collision(&mut ball, &player, &ai);

        assert_eq!(hit, Some(Side::Player));
        assert_eq!(ball.pos.x, player.pos.x + player.size.x);
        assert_eq!(ball.vel.x, BALL_SPEED);
    }

    #[test]
    fn test_ai_hit_snaps_to_leading_edge() {
        let player = Paddle::new(PLAYER_X, 250.0);
        let ai = Paddle::new(ARENA_WIDTH - 2.0 * PADDLE_WIDTH, 250.0);
        let mut ball = test_ball(ai.pos.x + 3.0, 280.0, BALL_SPEED);

        let hit = resolve_paddle_collision(&mut ball, &player, &ai);

        assert_eq!(hit, Some(Side::Ai));
        assert_eq!(ball.pos.x, ai.pos.x - ball.size.x);
        assert_eq!(ball.vel.x, -BALL_SPEED);
    }

    #[test]
    fn test_no_hit_leaves_ball_alone() {
        let player = Paddle::new(PLAYER_X, 250.0);
        let ai = Paddle::new(ARENA_WIDTH - 2.0 * PADDLE_WIDTH, 250.0);
        let mut ball = test_ball(400.0, 300.0, BALL_SPEED);

        assert_eq!(resolve_paddle_collision(&mut ball, &player, &ai), None);
        assert_eq!(ball.pos.x, 400.0);
        assert_eq!(ball.vel.x, BALL_SPEED);
    }

    #[test]
    fn test_miss_above_paddle() {
        // Same column as the player but vertically clear of it
        let player = Paddle::new(PLAYER_X, 250.0);
        let ai = Paddle::new(ARENA_WIDTH - 2.0 * PADDLE_WIDTH, 250.0);
        let mut ball = test_ball(14.0, 100.0, -BALL_SPEED);

        assert_eq!(resolve_paddle_collision(&mut ball, &player, &ai), None);
        assert_eq!(ball.vel.x, -BALL_SPEED);
    }
}
